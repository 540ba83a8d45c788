//! String token parser: bounded-length text read as-is, without escaping or trimming.
use super::token::{Parsed, Token};
use crate::error::TokenError;

/// Stateless string token parser.
pub struct StringParser;

impl StringParser {
    /// Parse the first token of `input` as a string of `min..=max` bytes.
    ///
    /// The returned slice borrows from `input`; `min == max` accepts one exact length.
    pub fn parse(min: usize, max: usize, input: &[u8]) -> Result<Parsed<&[u8]>, TokenError> {
        let token = Token::frame(input)?;
        let len = token.body.len();
        if len < min || len > max {
            return Err(TokenError::LengthOutOfRange { len, min, max });
        }
        Ok(Parsed {
            value: token.body,
            next: token.next,
        })
    }

    /// Parse a fixed-width string at the start of `input`.
    ///
    /// A parenthesised token behaves as `parse(len, len, ..)`. A bare span has no
    /// delimiter, so exactly its first `len` bytes are taken and the rest is left
    /// for the next parser.
    pub fn parse_fixed(len: usize, input: &[u8]) -> Result<Parsed<&[u8]>, TokenError> {
        if input.first() == Some(&b'(') {
            return Self::parse(len, len, input);
        }
        match input.get(..len) {
            Some(value) => Ok(Parsed { value, next: len }),
            None => Err(TokenError::LengthOutOfRange {
                len: input.len(),
                min: len,
                max: len,
            }),
        }
    }
}
