//! Decode a DSMR electricity telegram with gas, heat, water and slave meters on M-Bus.
mod helpers;

use helpers::{feed, LineError, DSMR_TELEGRAM};
use korri_p1::core::{units, ObisId};
use korri_p1::error::{ErrorKind, TokenError};
use korri_p1::infra::codec::traits::{FieldSet, FieldView};
use korri_p1::protocol::fields::{dsmr, DsmrTelegram};

#[test]
fn test_full_telegram() {
    let mut telegram = DsmrTelegram::new();
    let report = feed(&mut telegram, DSMR_TELEGRAM);

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    // Voltages carry one decimal and are not part of the profile.
    assert_eq!(
        report.unknown,
        [
            ObisId::abcde(1, 0, 32, 7, 0),
            ObisId::abcde(1, 0, 52, 7, 0),
            ObisId::abcde(1, 0, 72, 7, 0),
        ]
    );
    // p1_version_be is the only field missing from the sample.
    assert_eq!(telegram.present_count(), DsmrTelegram::FIELDS.len() - 1);
    assert!(!telegram.p1_version_be.is_present());

    let energy = telegram.energy_delivered_tariff1.value().expect("energy");
    assert_eq!(energy.int_val(), 123_456_789);
    assert_eq!(
        telegram.energy_returned_tariff1.value().map(|v| v.int_val()),
        Some(12_345)
    );
    assert_eq!(
        telegram.energy_returned_tariff2.value().map(|v| v.int_val()),
        Some(0)
    );
    assert_eq!(*telegram.electricity_tariff.value().expect("tariff"), "0002");
    assert_eq!(
        telegram.power_delivered.value().map(|v| v.int_val()),
        Some(1_193)
    );
    assert_eq!(telegram.electricity_failures.value(), Some(&4));
    assert_eq!(telegram.electricity_long_failures.value(), Some(&2));
    assert_eq!(telegram.electricity_sags_l1.value(), Some(&2));
    assert_eq!(telegram.electricity_swells_l2.value(), Some(&3));
    assert_eq!(telegram.current_l3.value(), Some(&3));
    assert_eq!(
        telegram.power_returned_l3.value().map(|v| v.int_val()),
        Some(6_666)
    );
    assert!(telegram.message_short.value().expect("present").is_empty());
    assert_eq!(telegram.gas_device_type.value(), Some(&3));

    let gas = telegram.gas_delivered.value().expect("gas");
    assert_eq!(gas.timestamp, "101209112500W");
    assert_eq!(gas.int_val(), 12_785_123);
}

#[test]
/// Luxembourg totals and reactive power readings.
fn test_reactive_power() {
    let mut telegram = DsmrTelegram::new();
    feed(&mut telegram, DSMR_TELEGRAM);

    let int_val = |field: Option<&korri_p1::core::FixedValue>| field.map(|v| v.int_val());
    assert_eq!(int_val(telegram.energy_delivered_lux.value()), Some(246_913_578));
    assert_eq!(int_val(telegram.energy_returned_lux.value()), Some(12_345));
    assert_eq!(int_val(telegram.total_imported_energy.value()), Some(100_250));
    assert_eq!(int_val(telegram.total_exported_energy.value()), Some(200_500));
    assert_eq!(int_val(telegram.reactive_power_delivered.value()), Some(125));
    assert_eq!(int_val(telegram.reactive_power_returned.value()), Some(0));
    assert_eq!(int_val(telegram.reactive_power_delivered_l2.value()), Some(42));
    assert_eq!(int_val(telegram.reactive_power_returned_l3.value()), Some(1));
    assert_eq!(telegram.electricity_switch_position.value(), Some(&1));

    assert_eq!(dsmr::TOTAL_IMPORTED_ENERGY.encoding.unit(), units::kvarh);
    assert_eq!(dsmr::TOTAL_IMPORTED_ENERGY.encoding.int_unit(), units::varh);
    assert_eq!(dsmr::REACTIVE_POWER_DELIVERED_L1.encoding.int_unit(), units::var);
}

#[test]
/// Every M-Bus group lands on its own members.
fn test_mbus_devices() {
    let mut telegram = DsmrTelegram::new();
    feed(&mut telegram, DSMR_TELEGRAM);

    let gas_be = telegram.gas_delivered_be.value().expect("gas_be");
    assert_eq!(gas_be.timestamp, "101209112500S");
    assert_eq!(gas_be.int_val(), 12_785_456);
    assert_eq!(
        *telegram.gas_delivered_text.value().expect("gas text"),
        "(090212160000)(00)(60)(1)(0-1:24.2.1)(m3)(00000.000)"
    );

    assert_eq!(telegram.thermal_device_type.value(), Some(&4));
    assert_eq!(telegram.thermal_valve_position.value(), Some(&0));
    assert_eq!(
        telegram.thermal_delivered.value().map(|v| v.int_val()),
        Some(123_456)
    );

    assert_eq!(telegram.water_device_type.value(), Some(&7));
    assert_eq!(
        *telegram.water_equipment_id.value().expect("water id"),
        "3434343441424344313233343536373839"
    );
    assert_eq!(
        telegram.water_delivered.value().map(|v| v.int_val()),
        Some(42_042)
    );

    assert_eq!(telegram.sub_device_type.value(), Some(&3));
    assert_eq!(telegram.sub_valve_position.value(), Some(&1));
    assert_eq!(
        telegram.sub_delivered.value().map(|v| v.int_val()),
        Some(1_500)
    );
}

#[test]
/// Raw lines keep their parentheses.
fn test_failure_log_is_raw() {
    let mut telegram = DsmrTelegram::new();
    feed(&mut telegram, DSMR_TELEGRAM);

    let log = telegram.electricity_failure_log.value().expect("log");
    assert_eq!(
        *log,
        "(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)"
    );
}

#[test]
/// Units are exposed for reporting, integer and wire side.
fn test_units() {
    assert_eq!(dsmr::POWER_DELIVERED_L1.encoding.unit(), units::kW);
    assert_eq!(dsmr::POWER_DELIVERED_L1.encoding.int_unit(), units::W);
    assert_eq!(dsmr::GAS_DELIVERED.encoding.int_unit(), units::dm3);
    assert_eq!(dsmr::CURRENT_L1.encoding.unit(), units::A);

    let telegram = DsmrTelegram::new();
    let mut units_seen = Vec::new();
    telegram.apply(&mut |field: &dyn FieldView| {
        if field.name() == "energy_delivered_tariff1" {
            units_seen.push((field.unit(), field.int_unit()));
        }
    });
    assert_eq!(units_seen, [(units::kWh, units::Wh)]);
}

#[test]
/// Malformed numbers and wrong units are reported per line.
fn test_malformed_values() {
    let text = DSMR_TELEGRAM
        .replace("1-0:1.8.1(123456.789*kWh)", "1-0:1.8.1(123456.78*kWh)")
        .replace("1-0:31.7.0(001*A)", "1-0:31.7.0(001)")
        .replace("1-0:1.7.0(01.193*kW)", "1-0:1.7.0(01.193*kW)x");

    let mut telegram = DsmrTelegram::new();
    let report = feed(&mut telegram, &text);

    assert_eq!(report.errors.len(), 3);
    match &report.errors[0] {
        LineError::Field(id, err) => {
            assert_eq!(*id, dsmr::ENERGY_DELIVERED_TARIFF1.id);
            assert_eq!(
                err.token_error(),
                Some(TokenError::WrongDecimalCount {
                    expected: 3,
                    found: 2
                })
            );
            assert_eq!(err.kind(), ErrorKind::MalformedNumber);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        report.errors[1],
        LineError::Trailing {
            id: dsmr::POWER_DELIVERED.id,
            consumed: 11,
            len: 12
        }
    );
    match &report.errors[2] {
        LineError::Field(_, err) => assert_eq!(err.kind(), ErrorKind::UnitMismatch),
        other => panic!("unexpected {:?}", other),
    }

    assert!(!telegram.energy_delivered_tariff1.is_present());
    assert!(!telegram.current_l1.is_present());
    assert!(telegram.energy_delivered_tariff2.is_present());
}
