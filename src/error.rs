//! Error definitions shared across library modules.
//! Every failure is local to one field value: nothing here aborts a telegram,
//! and none of these errors is raised after a field has been mutated.
use thiserror_no_std::Error;

//==================================================================================TOKEN_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures raised by the token parsers while reading a single value token.
/// Offsets are relative to the start of the span handed to the parser.
pub enum TokenError {
    /// A `(` opened the token but no `)` closes it.
    #[error("Missing closing parenthesis")]
    MissingClosingParen,
    /// String length is outside the accepted bounds.
    #[error("Invalid string length {len}, expected {min}..={max}")]
    LengthOutOfRange { len: usize, min: usize, max: usize },
    /// A byte that cannot start a number.
    #[error("Invalid number at offset {at}")]
    InvalidDigit { at: usize },
    /// No digit before the `.`, after the `.`, or at all.
    #[error("Empty digit run at offset {at}")]
    EmptyDigits { at: usize },
    /// Fractional part does not carry exactly the expected number of digits.
    #[error("Expected {expected} decimals, found {found}")]
    WrongDecimalCount { expected: u8, found: usize },
    /// A `*unit` suffix on a value that takes none.
    #[error("Unexpected unit")]
    UnexpectedUnit,
    /// The value requires a `*unit` suffix.
    #[error("Missing unit")]
    MissingUnit,
    /// The `*unit` suffix differs from the expected unit.
    #[error("Invalid unit")]
    UnitMismatch,
    /// Bytes left between the number and the end of the token.
    #[error("Extra data at offset {at}")]
    TrailingBytes { at: usize },
    /// The scaled value does not fit into 32 bits.
    #[error("Number too large")]
    Overflow,
}

//==================================================================================PARSE_ERROR
/// Part of a compound field that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompoundPart {
    Timestamp,
    Value,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors returned when a field fails to decode or store a value.
pub enum ParseError {
    /// The value token itself is malformed.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// One part of a multi-part field (timestamp + value) failed.
    #[error("Incomplete compound field, {part:?} failed: {reason}")]
    IncompleteCompoundField {
        part: CompoundPart,
        reason: TokenError,
    },
    /// The number is valid but does not fit into the field's integer width.
    #[error("Value {value} does not fit into {bits} bits")]
    SlotOverflow { value: u32, bits: u8 },
    /// The text is valid but longer than the field's storage.
    #[error("Value of {len} bytes exceeds capacity {capacity}")]
    SlotCapacity { len: usize, capacity: usize },
    /// The field's storage type cannot hold what its encoding produces.
    #[error("Storage cannot hold a `{encoding}` value")]
    IncompatibleSlot { encoding: &'static str },
    /// The field was already populated during this telegram pass.
    #[error("Duplicate field")]
    DuplicateField,
}

/// Coarse classification of a `ParseError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// String too short or too long.
    LengthOutOfRange,
    /// Bad digit run, decimal count mismatch, trailing data or overflow.
    MalformedNumber,
    /// Wire unit absent, unexpected or wrong.
    UnitMismatch,
    /// A sub-part of a multi-part field failed.
    IncompleteCompoundField,
    /// Token framing is broken (unbalanced parenthesis).
    MalformedToken,
    /// Field definition and storage type disagree.
    IncompatibleSlot,
    /// Field already populated.
    DuplicateField,
}

impl TokenError {
    /// Classify this token failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            TokenError::MissingClosingParen => ErrorKind::MalformedToken,
            TokenError::LengthOutOfRange { .. } => ErrorKind::LengthOutOfRange,
            TokenError::InvalidDigit { .. }
            | TokenError::EmptyDigits { .. }
            | TokenError::WrongDecimalCount { .. }
            | TokenError::TrailingBytes { .. }
            | TokenError::Overflow => ErrorKind::MalformedNumber,
            TokenError::UnexpectedUnit | TokenError::MissingUnit | TokenError::UnitMismatch => {
                ErrorKind::UnitMismatch
            }
        }
    }
}

impl ParseError {
    /// Classify this failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Token(err) => err.kind(),
            ParseError::IncompleteCompoundField { .. } => ErrorKind::IncompleteCompoundField,
            ParseError::SlotOverflow { .. } => ErrorKind::MalformedNumber,
            ParseError::SlotCapacity { .. } => ErrorKind::LengthOutOfRange,
            ParseError::IncompatibleSlot { .. } => ErrorKind::IncompatibleSlot,
            ParseError::DuplicateField => ErrorKind::DuplicateField,
        }
    }

    /// Token failure behind this error, compound fields included.
    pub const fn token_error(&self) -> Option<TokenError> {
        match *self {
            ParseError::Token(err) => Some(err),
            ParseError::IncompleteCompoundField { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

//==================================================================================OBIS_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while reading the textual OBIS identifier of a telegram line.
pub enum ObisIdError {
    /// The line does not start with an identifier.
    #[error("Empty OBIS id")]
    Empty,
    /// A group exceeds 255.
    #[error("OBIS id has number over 255 at offset {at}")]
    GroupOverflow { at: usize },
}
