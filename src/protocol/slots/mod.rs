//! Storage types a field can be backed by, and how each one accepts a decoded value.
//!
//! Every `store` validates first and writes last, so a refused value never leaves a
//! half-written slot behind.
use crate::core::{FieldString, FixedValue, TimestampedFixedValue, ValueView, TIMESTAMP_LEN};
use crate::error::ParseError;
use crate::infra::codec::engine::Decoded;
use crate::infra::codec::traits::FieldSlot;

/// Short name of a decoded value, used when a slot refuses it.
fn decoded_kind(decoded: &Decoded<'_>) -> &'static str {
    match decoded {
        Decoded::Raw(_) => "raw",
        Decoded::Text(_) => "text",
        Decoded::Unsigned(_) => "int",
        Decoded::Fixed(_) => "fixed",
        Decoded::TimestampedFixed { .. } => "timestamped_fixed",
    }
}

fn incompatible(decoded: &Decoded<'_>) -> ParseError {
    ParseError::IncompatibleSlot {
        encoding: decoded_kind(decoded),
    }
}

//==================================================================================TEXT
impl<const N: usize> FieldSlot for FieldString<N> {
    fn store(&mut self, decoded: &Decoded<'_>) -> Result<(), ParseError> {
        match *decoded {
            // Raw lines (e.g. the failure log) may exceed any sensible buffer.
            Decoded::Raw(bytes) => {
                self.copy_truncated(bytes);
                Ok(())
            }
            Decoded::Text(bytes) => {
                if bytes.len() > N {
                    return Err(ParseError::SlotCapacity {
                        len: bytes.len(),
                        capacity: N,
                    });
                }
                self.copy_truncated(bytes);
                Ok(())
            }
            _ => Err(incompatible(decoded)),
        }
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Text(self.as_bytes())
    }
}

//==================================================================================INTEGERS
macro_rules! impl_unsigned_slot {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldSlot for $ty {
            fn store(&mut self, decoded: &Decoded<'_>) -> Result<(), ParseError> {
                match *decoded {
                    Decoded::Unsigned(value) => {
                        *self = <$ty>::try_from(value).map_err(|_| ParseError::SlotOverflow {
                            value,
                            bits: <$ty>::BITS as u8,
                        })?;
                        Ok(())
                    }
                    _ => Err(incompatible(decoded)),
                }
            }

            fn view(&self) -> ValueView<'_> {
                ValueView::Unsigned(u32::from(*self))
            }
        }
    )*};
}

impl_unsigned_slot!(u8, u16, u32);

//==================================================================================FIXED
impl FieldSlot for FixedValue {
    fn store(&mut self, decoded: &Decoded<'_>) -> Result<(), ParseError> {
        match *decoded {
            Decoded::Fixed(scaled) => {
                *self = FixedValue::from_int(scaled);
                Ok(())
            }
            _ => Err(incompatible(decoded)),
        }
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::Fixed(*self)
    }
}

impl FieldSlot for TimestampedFixedValue {
    fn store(&mut self, decoded: &Decoded<'_>) -> Result<(), ParseError> {
        match *decoded {
            Decoded::TimestampedFixed { timestamp, scaled } => {
                if timestamp.len() > TIMESTAMP_LEN {
                    return Err(ParseError::SlotCapacity {
                        len: timestamp.len(),
                        capacity: TIMESTAMP_LEN,
                    });
                }
                self.timestamp.copy_truncated(timestamp);
                self.value = FixedValue::from_int(scaled);
                Ok(())
            }
            _ => Err(incompatible(decoded)),
        }
    }

    fn view(&self) -> ValueView<'_> {
        ValueView::TimestampedFixed {
            timestamp: self.timestamp.as_bytes(),
            value: self.value,
        }
    }
}
