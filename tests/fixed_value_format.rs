//! `FixedValue` formatting: `I.FFF` text reparses to the same scaled integer.
use korri_p1::core::{units, FixedValue};
use korri_p1::infra::codec::number::NumberParser;

fn reparse(value: u32) -> u32 {
    let text = format!("{}*kWh", FixedValue::from_int(value));
    NumberParser::parse(3, units::kWh, text.as_bytes())
        .expect("formatted value parses")
        .value
}

#[test]
fn test_display() {
    assert_eq!(FixedValue::from_int(473_789).to_string(), "473.789");
    assert_eq!(FixedValue::from_int(5).to_string(), "0.005");
    assert_eq!(FixedValue::from_int(12_000).to_string(), "12.000");
    assert_eq!(FixedValue::from_int(u32::MAX).to_string(), "4294967.295");
}

#[test]
/// Edges and a spread of values across the whole `u32` range.
fn test_round_trip() {
    for value in [0, 1, 999, 1_000, 1_001, 473_789, u32::MAX - 1, u32::MAX] {
        assert_eq!(reparse(value), value);
    }

    let mut value: u32 = 7;
    for _ in 0..10_000 {
        assert_eq!(reparse(value), value);
        value = value.wrapping_mul(2_654_435_761).wrapping_add(12_345);
    }
}

#[test]
fn test_accessors() {
    let value = FixedValue::from_int(1_234);
    assert_eq!(value.whole(), 1);
    assert_eq!(value.thousandths(), 234);
    assert_eq!(value.int_val(), 1_234);
    assert_eq!(f32::from(value), value.val());
}
