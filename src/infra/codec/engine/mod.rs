//! Generic decoding engine driven by static field definitions.
//! It picks the token parser(s) matching a field's `Encoding` and returns a
//! borrowed, not yet stored, `Decoded` value.
use super::number::NumberParser;
use super::string::StringParser;
use super::token::Parsed;
use crate::core::{Encoding, FIXED_DECIMALS, TIMESTAMP_LEN};
use crate::error::{CompoundPart, ParseError};

/// Output of a successful decode, borrowing text from the input span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// Whole span of a `Raw` field.
    Raw(&'a [u8]),
    /// Validated string (bounded string or timestamp).
    Text(&'a [u8]),
    /// Plain integer.
    Unsigned(u32),
    /// Fixed-point reading, in thousandths.
    Fixed(u32),
    /// Timestamp followed by a fixed-point reading in thousandths.
    TimestampedFixed { timestamp: &'a [u8], scaled: u32 },
}

/// Decodes the value span of a field according to `encoding`.
///
/// # Parameters
/// * `encoding` – static strategy taken from the field definition
/// * `input` – value span handed over by the line matcher
///
/// # Return value
/// The decoded value and the number of bytes consumed. Nothing is written anywhere:
/// storing the value is up to the caller, which keeps failures free of side effects.
pub fn decode<'a>(encoding: &Encoding, input: &'a [u8]) -> Result<Parsed<Decoded<'a>>, ParseError> {
    match *encoding {
        // Copied verbatim, parentheses included; cannot fail.
        Encoding::Raw => Ok(Parsed {
            value: Decoded::Raw(input),
            next: input.len(),
        }),

        Encoding::String { min, max } => {
            Ok(StringParser::parse(usize::from(min), usize::from(max), input)?.map(Decoded::Text))
        }

        Encoding::Timestamp => {
            Ok(StringParser::parse(TIMESTAMP_LEN, TIMESTAMP_LEN, input)?.map(Decoded::Text))
        }

        Encoding::UnsignedInt { unit } => {
            Ok(NumberParser::parse(0, unit, input)?.map(Decoded::Unsigned))
        }

        Encoding::FixedPoint { unit, .. } => {
            Ok(NumberParser::parse(FIXED_DECIMALS, unit, input)?.map(Decoded::Fixed))
        }

        // e.g. `(150117180000W)(00473.789*m3)`: both halves must succeed.
        Encoding::TimestampedFixedPoint { unit, .. } => {
            let stamp = StringParser::parse_fixed(TIMESTAMP_LEN, input).map_err(|reason| {
                ParseError::IncompleteCompoundField {
                    part: CompoundPart::Timestamp,
                    reason,
                }
            })?;
            let number = NumberParser::parse(FIXED_DECIMALS, unit, &input[stamp.next..])
                .map_err(|reason| ParseError::IncompleteCompoundField {
                    part: CompoundPart::Value,
                    reason,
                })?;
            Ok(Parsed {
                value: Decoded::TimestampedFixed {
                    timestamp: stamp.value,
                    scaled: number.value,
                },
                next: stamp.next + number.next,
            })
        }
    }
}
