//! Reading of the textual `A-B:C.D.E[*F]` identifier that prefixes every data line.
use crate::core::ObisId;
use crate::error::ObisIdError;

/// Separator accepted after the group at `index`, if any.
fn separator_after(index: usize, byte: u8) -> bool {
    matches!(
        (index, byte),
        (0, b'-') | (1, b':') | (2, b'.') | (3, b'.') | (4, b'.') | (4, b'*')
    )
}

impl ObisId {
    /// Parse the identifier at the start of `line`.
    ///
    /// Reading stops at the first byte that is neither a digit nor the separator
    /// expected at that position (usually the `(` opening the value). Groups the line
    /// leaves out are set to [`ObisId::UNUSED`], so `1-0:1.8.1` equals
    /// `ObisId::abcde(1, 0, 1, 8, 1)`.
    ///
    /// Returns the identifier and the offset where the value span starts.
    pub fn parse_prefix(line: &[u8]) -> Result<(ObisId, usize), ObisIdError> {
        let mut groups = [ObisId::UNUSED; 6];
        let mut index = 0;
        let mut value: u16 = 0;
        let mut has_digits = false;
        let mut cursor = 0;

        while let Some(&byte) = line.get(cursor) {
            if byte.is_ascii_digit() {
                value = value * 10 + u16::from(byte - b'0');
                if value > u16::from(u8::MAX) {
                    return Err(ObisIdError::GroupOverflow { at: cursor });
                }
                has_digits = true;
            } else if index < 5 && separator_after(index, byte) {
                groups[index] = value as u8;
                index += 1;
                value = 0;
                has_digits = false;
            } else {
                break;
            }
            cursor += 1;
        }

        if cursor == 0 {
            return Err(ObisIdError::Empty);
        }
        if has_digits {
            groups[index] = value as u8;
        }
        Ok((ObisId(groups), cursor))
    }
}
