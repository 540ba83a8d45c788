//! Byte-level components shared by the token parsers.
//! A telegram value is either a parenthesised group `(...)` or a bare token that
//! runs to the end of the span; both are read without copies.
use crate::error::TokenError;

/// Successful parse outcome: the value and the offset just past what was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Decoded value.
    pub value: T,
    /// Number of bytes consumed from the start of the input span.
    pub next: usize,
}

impl<T> Parsed<T> {
    /// Transform the value while keeping the cursor.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            next: self.next,
        }
    }
}

/// One framed value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token content, parentheses excluded.
    pub body: &'a [u8],
    /// Offset of `body` within the input span.
    pub offset: usize,
    /// Offset just past the token (past the closing `)` when parenthesised).
    pub next: usize,
}

impl<'a> Token<'a> {
    /// Delimit the first token of `input`.
    ///
    /// A leading `(` makes the token run up to the first `)`; otherwise the whole
    /// span is the token.
    pub fn frame(input: &'a [u8]) -> Result<Self, TokenError> {
        match input.split_first() {
            Some((&b'(', rest)) => {
                let close = rest
                    .iter()
                    .position(|&b| b == b')')
                    .ok_or(TokenError::MissingClosingParen)?;
                Ok(Self {
                    body: &rest[..close],
                    offset: 1,
                    // `(` + body + `)`
                    next: close + 2,
                })
            }
            _ => Ok(Self {
                body: input,
                offset: 0,
                next: input.len(),
            }),
        }
    }

    /// Reader positioned at the start of the body.
    #[inline]
    pub fn reader(&self) -> TokenReader<'a> {
        TokenReader::new(self.body)
    }
}

/// Forward-only cursor over a token body.
pub struct TokenReader<'a> {
    /// Token body being read.
    buffer: &'a [u8],
    /// Number of bytes consumed from the beginning.
    cursor: usize,
}

impl<'a> TokenReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Current position, in bytes from the start of the buffer.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Next byte, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buffer.get(self.cursor).copied()
    }

    /// Whether the whole buffer has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.buffer.len()
    }

    /// Consume `expected` if it is the next byte.
    pub fn next_if(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Length of the digit run starting at the cursor, without consuming it.
    pub fn digit_run(&self) -> usize {
        self.buffer[self.cursor.min(self.buffer.len())..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    }

    /// Consume a run of ASCII digits, folding them into `acc` (`acc * 10 + digit`).
    /// Returns the accumulated value and the number of digits consumed.
    pub fn accumulate_digits(&mut self, mut acc: u32) -> Result<(u32, usize), TokenError> {
        let start = self.cursor;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            acc = acc
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(byte - b'0')))
                .ok_or(TokenError::Overflow)?;
            self.cursor += 1;
        }
        Ok((acc, self.cursor - start))
    }

    /// Consume and return everything left.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.buffer[self.cursor.min(self.buffer.len())..];
        self.cursor = self.buffer.len();
        rest
    }
}

#[cfg(test)]
mod tests;
