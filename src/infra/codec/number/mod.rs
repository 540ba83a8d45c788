//! Numeric token parser.
//!
//! Grammar of a token: `digits [ '.' digits ] [ '*' unit ]`. No sign is accepted.
//! The value is accumulated digit by digit into an integer scaled by
//! `10^decimals`, so `00473.789` read with three decimals yields exactly `473789`.
use super::token::{Parsed, Token};
use crate::error::TokenError;

/// Stateless numeric token parser.
pub struct NumberParser;

impl NumberParser {
    /// Parse the first token of `input` as an unsigned number.
    ///
    /// * `decimals` – number of fractional digits the token must carry when it has a
    ///   `.`; a token without `.` is scaled as if they were all zero. With `0`, no
    ///   `.` is accepted.
    /// * `unit` – wire unit that must follow as `*unit`, or `""` for unit-less values.
    ///
    /// # Return value
    /// The scaled integer and the offset just past the token.
    pub fn parse(decimals: u8, unit: &str, input: &[u8]) -> Result<Parsed<u32>, TokenError> {
        let token = Token::frame(input)?;
        let mut reader = token.reader();
        let at = |cursor: usize| token.offset + cursor;

        // Integer part
        let (mut value, int_digits) = reader.accumulate_digits(0)?;
        if int_digits == 0 {
            return Err(match reader.peek() {
                None | Some(b'.') | Some(b'*') => TokenError::EmptyDigits {
                    at: at(reader.cursor()),
                },
                Some(_) => TokenError::InvalidDigit {
                    at: at(reader.cursor()),
                },
            });
        }

        // Fractional part, if any
        if reader.next_if(b'.') {
            // Digit count is checked before any arithmetic.
            let frac_digits = reader.digit_run();
            if frac_digits == 0 {
                return Err(TokenError::EmptyDigits {
                    at: at(reader.cursor()),
                });
            }
            if frac_digits != usize::from(decimals) {
                return Err(TokenError::WrongDecimalCount {
                    expected: decimals,
                    found: frac_digits,
                });
            }
            value = reader.accumulate_digits(value)?.0;
        } else {
            value = scale(value, decimals)?;
        }

        // Unit
        match (reader.next_if(b'*'), unit.is_empty()) {
            (true, true) => return Err(TokenError::UnexpectedUnit),
            (false, false) => return Err(TokenError::MissingUnit),
            (true, false) => {
                if reader.take_rest() != unit.as_bytes() {
                    return Err(TokenError::UnitMismatch);
                }
            }
            (false, true) => {}
        }

        if !reader.is_empty() {
            return Err(TokenError::TrailingBytes {
                at: at(reader.cursor()),
            });
        }

        Ok(Parsed {
            value,
            next: token.next,
        })
    }
}

/// Multiply `value` by `10^decimals`, refusing to overflow.
fn scale(value: u32, decimals: u8) -> Result<u32, TokenError> {
    (0..decimals).try_fold(value, |acc, _| {
        acc.checked_mul(10).ok_or(TokenError::Overflow)
    })
}
