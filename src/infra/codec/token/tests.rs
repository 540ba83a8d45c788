//! Unit tests for token framing and the token reader.
use super::*;

//==================================================================================FRAME
#[test]
/// A parenthesised token stops at the first `)` and skips it.
fn test_frame_parenthesised() {
    let token = Token::frame(b"(150117180000W)(00473.789*m3)").expect("framed");
    assert_eq!(token.body, b"150117180000W");
    assert_eq!(token.offset, 1);
    assert_eq!(token.next, 15);
}

#[test]
/// A bare token spans the whole input.
fn test_frame_bare() {
    let token = Token::frame(b"00473.789*m3").expect("framed");
    assert_eq!(token.body, b"00473.789*m3");
    assert_eq!(token.offset, 0);
    assert_eq!(token.next, 12);
}

#[test]
/// Empty parentheses produce an empty body.
fn test_frame_empty_group() {
    let token = Token::frame(b"()").expect("framed");
    assert!(token.body.is_empty());
    assert_eq!(token.next, 2);
}

#[test]
/// An unterminated group is rejected.
fn test_frame_missing_close() {
    assert_eq!(
        Token::frame(b"(0042"),
        Err(TokenError::MissingClosingParen)
    );
}

//==================================================================================READER
#[test]
/// Digits are folded left to right and the run stops on the first non-digit.
fn test_accumulate_digits() {
    let mut reader = TokenReader::new(b"0012.5");
    assert_eq!(reader.accumulate_digits(0), Ok((12, 4)));
    assert_eq!(reader.peek(), Some(b'.'));
    assert!(reader.next_if(b'.'));
    assert_eq!(reader.accumulate_digits(12), Ok((125, 1)));
    assert!(reader.is_empty());
}

#[test]
/// Accumulation past `u32::MAX` is reported, not wrapped.
fn test_accumulate_overflow() {
    let mut reader = TokenReader::new(b"4294967296");
    assert_eq!(reader.accumulate_digits(0), Err(TokenError::Overflow));

    let mut reader = TokenReader::new(b"4294967295");
    assert_eq!(reader.accumulate_digits(0), Ok((u32::MAX, 10)));
}

#[test]
/// `take_rest` drains the reader.
fn test_take_rest() {
    let mut reader = TokenReader::new(b"12*kWh");
    reader.accumulate_digits(0).expect("digits");
    assert!(reader.next_if(b'*'));
    assert_eq!(reader.take_rest(), b"kWh");
    assert!(reader.is_empty());
    assert_eq!(reader.take_rest(), b"");
}

#[test]
/// Digit runs are measured without moving the cursor.
fn test_digit_run() {
    let mut reader = TokenReader::new(b"12.34567*kWh");
    assert_eq!(reader.digit_run(), 2);
    reader.accumulate_digits(0).expect("digits");
    assert_eq!(reader.digit_run(), 0);
    assert!(reader.next_if(b'.'));
    assert_eq!(reader.digit_run(), 5);
    assert_eq!(reader.cursor(), 3);
    reader.take_rest();
    assert_eq!(reader.digit_run(), 0);
}
