//! `defmt::Format` impls for the shared data types of `core`.
use defmt::{write, Format, Formatter};

use crate::core::{
    Encoding, FieldDef, FieldString, FixedValue, ObisId, TimestampedFixedValue, ValueView,
};

impl Format for ObisId {
    fn format(&self, f: Formatter) {
        let [a, b, c, d, e, g] = self.0;
        if g == ObisId::UNUSED {
            write!(f, "{=u8}-{=u8}:{=u8}.{=u8}.{=u8}", a, b, c, d, e)
        } else {
            write!(f, "{=u8}-{=u8}:{=u8}.{=u8}.{=u8}*{=u8}", a, b, c, d, e, g)
        }
    }
}

impl Format for Encoding {
    fn format(&self, f: Formatter) {
        match *self {
            Encoding::String { min, max } => write!(f, "string[{=u16}..={=u16}]", min, max),
            Encoding::UnsignedInt { unit } => write!(f, "int[{=str}]", unit),
            Encoding::FixedPoint { unit, int_unit }
            | Encoding::TimestampedFixedPoint { unit, int_unit } => {
                write!(f, "{=str}[{=str}->{=str}]", self.keyword(), unit, int_unit)
            }
            _ => write!(f, "{=str}", self.keyword()),
        }
    }
}

impl Format for FieldDef {
    fn format(&self, f: Formatter) {
        write!(f, "{=str} {} {}", self.name, self.id, self.encoding)
    }
}

impl Format for FixedValue {
    fn format(&self, f: Formatter) {
        let frac = self.thousandths();
        write!(
            f,
            "{=u32}.{=u32}{=u32}{=u32}",
            self.whole(),
            frac / 100,
            frac / 10 % 10,
            frac % 10
        )
    }
}

impl<const N: usize> Format for FieldString<N> {
    fn format(&self, f: Formatter) {
        write!(f, "{=[u8]:a}", self.as_bytes())
    }
}

impl Format for TimestampedFixedValue {
    fn format(&self, f: Formatter) {
        write!(f, "{} {}", self.timestamp, self.value)
    }
}

impl Format for ValueView<'_> {
    fn format(&self, f: Formatter) {
        match *self {
            ValueView::Text(bytes) => write!(f, "{=[u8]:a}", bytes),
            ValueView::Unsigned(value) => write!(f, "{=u32}", value),
            ValueView::Fixed(value) => write!(f, "{}", value),
            ValueView::TimestampedFixed { timestamp, value } => {
                write!(f, "{=[u8]:a} {}", timestamp, value)
            }
        }
    }
}
