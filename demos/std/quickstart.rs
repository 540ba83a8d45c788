//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-p1:
//! - Identify telegram lines by their OBIS id
//! - Route each value to the generated telegram struct
//! - Report every field through a visitor
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use korri_p1::core::ObisId;
use korri_p1::infra::codec::traits::{FieldSet, FieldView};
use korri_p1::protocol::fields::WarmtelinkTelegram;

const TELEGRAM: &str = r"/ISk5\2MT382-1000

1-3:0.2.8(50)
0-0:1.0.0(101209113020W)
0-0:96.1.1(4B384547303034303436333935353037)
0-1:24.1.0(003)
0-1:24.4.0(1)
0-1:24.2.1(101209112500W)(12785.123*GJ)
0-1:24.2.2(101209112500W)(00001.000*GJ)
!EF2F
";

fn main() {
    println!("=== korri-p1 Quickstart ===\n");

    // ======================================================================
    // 1. Feed every line to the telegram struct
    // ======================================================================
    println!("1. Parsing a Warmtelink telegram");

    let mut telegram = WarmtelinkTelegram::new();

    for line in TELEGRAM.lines().map(str::as_bytes) {
        let (id, span) = match line.first() {
            None | Some(b'!') => continue,
            Some(b'/') => (ObisId::IDENTIFICATION, &line[1..]),
            Some(_) => match ObisId::parse_prefix(line) {
                Ok((id, next)) => (id, &line[next..]),
                Err(e) => {
                    println!("   ✗ unreadable line: {}", e);
                    continue;
                }
            },
        };

        match telegram.parse_field(id, span) {
            Some(Ok(_)) => {}
            Some(Err(e)) => println!("   ✗ {}: {}", id, e),
            None => println!("   - {} not part of the profile, skipped", id),
        }
    }
    println!();

    // ======================================================================
    // 2. Report every field
    // ======================================================================
    println!("2. Fields");

    telegram.apply(&mut |field: &dyn FieldView| match field.value() {
        Some(value) => println!("   {:<24} {} {}", field.name(), value, field.unit()),
        None => println!("   {:<24} (absent)", field.name()),
    });
    println!();

    // ======================================================================
    // 3. Use typed values directly
    // ======================================================================
    println!("3. Typed access");

    if let Some(delivered) = telegram.thermal_delivered.value() {
        println!(
            "   Heat delivered at {}: {} MJ ({:.3} GJ)",
            delivered.timestamp,
            delivered.int_val(),
            delivered.val()
        );
    }

    telegram.reset();
    println!("   After reset: {} fields present", telegram.present_count());
}
