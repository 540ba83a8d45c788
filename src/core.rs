//! Defines the "data contract" between `build.rs` (the scribe) and
//! the field decoding engine (the interpreter).
//!
//! `build.rs` turns the field manifest into static `FieldDef`s built from the types below.
//! The `engine` module consumes those definitions to decode raw telegram values.

// Types in this module are also compiled into the build script, where most are unused.
// `defmt` is not a build dependency: its impls live in `infra::log_format`.
#![allow(dead_code)]

use core::fmt;

/// Length of a telegram timestamp: `YYMMDDhhmmssX`, X being `W` (winter) or `S` (summer).
pub const TIMESTAMP_LEN: usize = 13;
/// Number of implied fractional digits carried by a `FixedValue`.
pub const FIXED_DECIMALS: u8 = 3;
/// Scale factor between a fixed-point reading and its integer representation.
pub const FIXED_SCALE: u32 = 1000;

/// Unit tokens as they appear on the wire, compared byte for byte.
pub mod units {
    #![allow(non_upper_case_globals)]

    pub const none: &str = "";
    pub const kWh: &str = "kWh";
    pub const Wh: &str = "Wh";
    pub const kW: &str = "kW";
    pub const W: &str = "W";
    pub const V: &str = "V";
    pub const mV: &str = "mV";
    pub const A: &str = "A";
    pub const mA: &str = "mA";
    pub const m3: &str = "m3";
    pub const dm3: &str = "dm3";
    pub const GJ: &str = "GJ";
    pub const MJ: &str = "MJ";
    pub const kvar: &str = "kvar";
    pub const kvarh: &str = "kvarh";
    pub const var: &str = "var";
    pub const varh: &str = "varh";

    /// Every unit the field manifest may reference.
    pub const KNOWN: &[&str] = &[
        none, kWh, Wh, kW, W, V, mV, A, mA, m3, dm3, GJ, MJ, kvar, kvarh, var, varh,
    ];
}

//==================================================================================OBIS_ID
/// OBIS identifier: six hierarchical groups `A-B:C.D.E*F`.
///
/// Groups that a telegram line leaves out are set to `255`. Equality is the only
/// relation the line matcher relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObisId(pub [u8; 6]);

impl ObisId {
    /// Value used for groups that are absent from the textual form.
    pub const UNUSED: u8 = 255;

    /// Pseudo identifier carried by the identification line (`/XXX5...`), which
    /// has no OBIS prefix at all.
    pub const IDENTIFICATION: ObisId = ObisId([Self::UNUSED; 6]);

    /// Build an identifier from all six groups.
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        Self([a, b, c, d, e, f])
    }

    /// Build an identifier from groups A to E, F being unused.
    #[inline]
    pub const fn abcde(a: u8, b: u8, c: u8, d: u8, e: u8) -> Self {
        Self([a, b, c, d, e, Self::UNUSED])
    }

    /// Return the six raw groups.
    #[inline]
    pub const fn groups(&self) -> [u8; 6] {
        self.0
    }

    /// Channel, used as the M-Bus device index for sub-meters.
    #[inline]
    pub const fn channel(&self) -> u8 {
        self.0[1]
    }
}

impl fmt::Display for ObisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{}-{}:{}.{}.{}", a, b, c, d, e)?;
        if g != Self::UNUSED {
            write!(f, "*{}", g)?;
        }
        Ok(())
    }
}

//==================================================================================ENCODING
/// Parsing strategy of a field. Each variant carries its own constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The whole value span, parentheses included, copied verbatim.
    /// Never fails: a span longer than the slot is clipped to its capacity, and
    /// the stored length is shorter than the consumed one.
    Raw,
    /// A string whose length must stay within `min..=max`.
    String { min: u16, max: u16 },
    /// A `YYMMDDhhmmssX` string, kept uninterpreted.
    Timestamp,
    /// An integer with an optional wire unit.
    UnsignedInt { unit: &'static str },
    /// A three-decimal number stored as thousandths. `int_unit` names the unit of the
    /// stored integer (e.g. `GJ` on the wire is `MJ` once scaled).
    FixedPoint {
        unit: &'static str,
        int_unit: &'static str,
    },
    /// A timestamp immediately followed by a `FixedPoint` value.
    TimestampedFixedPoint {
        unit: &'static str,
        int_unit: &'static str,
    },
}

impl Encoding {
    /// Manifest keyword for this encoding.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::String { .. } => "string",
            Encoding::Timestamp => "timestamp",
            Encoding::UnsignedInt { .. } => "int",
            Encoding::FixedPoint { .. } => "fixed",
            Encoding::TimestampedFixedPoint { .. } => "timestamped_fixed",
        }
    }

    /// Unit expected on the wire (empty for text encodings).
    pub const fn unit(&self) -> &'static str {
        match *self {
            Encoding::UnsignedInt { unit }
            | Encoding::FixedPoint { unit, .. }
            | Encoding::TimestampedFixedPoint { unit, .. } => unit,
            _ => units::none,
        }
    }

    /// Unit of the stored integer. Equal to `unit()` for plain integers.
    pub const fn int_unit(&self) -> &'static str {
        match *self {
            Encoding::UnsignedInt { unit } => unit,
            Encoding::FixedPoint { int_unit, .. }
            | Encoding::TimestampedFixedPoint { int_unit, .. } => int_unit,
            _ => units::none,
        }
    }
}

/// Static description of one telegram field.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// 1. Field name (snake_case, as in the manifest).
    pub name: &'static str,
    /// 2. OBIS identifier the line matcher routes on.
    pub id: ObisId,
    /// 3. Parsing strategy and its constraints.
    pub encoding: Encoding,
}

//==================================================================================FIXED_VALUE
/// A decimal number with three fractional digits, stored in thousandths.
///
/// A reading of `1.234 kWh` is stored as `1234`, which is its value in Wh.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedValue(u32);

impl FixedValue {
    /// Wrap an integer already expressed in thousandths.
    #[inline]
    pub const fn from_int(scaled: u32) -> Self {
        Self(scaled)
    }

    /// Scaled integer value (value × 1000).
    #[inline]
    pub const fn int_val(&self) -> u32 {
        self.0
    }

    /// Integer part of the decimal value.
    #[inline]
    pub const fn whole(&self) -> u32 {
        self.0 / FIXED_SCALE
    }

    /// Fractional part, in thousandths.
    #[inline]
    pub const fn thousandths(&self) -> u32 {
        self.0 % FIXED_SCALE
    }

    /// Lossy floating-point view, for presentation only.
    #[inline]
    pub fn val(&self) -> f32 {
        self.0 as f32 / FIXED_SCALE as f32
    }
}

impl From<FixedValue> for f32 {
    fn from(value: FixedValue) -> Self {
        value.val()
    }
}

impl fmt::Display for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.whole(), self.thousandths())
    }
}

//==================================================================================FIELD_STRING
/// Fixed-capacity byte string backing every text field.
/// Bytes past `len` are leftovers and take no part in comparisons.
#[derive(Clone, Copy)]
pub struct FieldString<const N: usize> {
    len: usize,
    data: [u8; N],
}

impl<const N: usize> Default for FieldString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FieldString<N> {
    /// Maximum number of bytes the string can hold.
    pub const CAPACITY: usize = N;

    /// Create an empty string.
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; N],
        }
    }

    /// Number of valid bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset the string.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace the content with `bytes`, keeping at most `N` of them.
    /// Returns the number of bytes kept.
    #[inline]
    pub fn copy_truncated(&mut self, bytes: &[u8]) -> usize {
        let clamped = bytes.len().min(N);
        self.data[..clamped].copy_from_slice(&bytes[..clamped]);
        self.len = clamped;
        clamped
    }

    /// Immutable view over the populated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// UTF-8 view over the populated bytes.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl<const N: usize> PartialEq for FieldString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FieldString<N> {}

impl<const N: usize> PartialEq<str> for FieldString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FieldString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Debug for FieldString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        write_text(f, self.as_bytes())?;
        write!(f, "\"")
    }
}

impl<const N: usize> fmt::Display for FieldString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, self.as_bytes())
    }
}

/// Telegram payloads are ASCII; any other byte is shown as its Latin-1 character.
fn write_text(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    use fmt::Write;
    for &byte in bytes {
        f.write_char(char::from(byte))?;
    }
    Ok(())
}

/// A fixed-point reading prefixed by the timestamp of the measurement,
/// e.g. `0-1:24.2.1(150117180000W)(00473.789*m3)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimestampedFixedValue {
    /// Raw `YYMMDDhhmmssX` timestamp.
    pub timestamp: FieldString<TIMESTAMP_LEN>,
    /// Reading taken at `timestamp`.
    pub value: FixedValue,
}

impl TimestampedFixedValue {
    /// Scaled integer value of the reading.
    #[inline]
    pub const fn int_val(&self) -> u32 {
        self.value.int_val()
    }

    /// Lossy floating-point view of the reading.
    #[inline]
    pub fn val(&self) -> f32 {
        self.value.val()
    }
}

//==================================================================================VALUE_VIEW
/// Borrowed, type-erased view over a populated field slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueView<'a> {
    Text(&'a [u8]),
    Unsigned(u32),
    Fixed(FixedValue),
    TimestampedFixed {
        timestamp: &'a [u8],
        value: FixedValue,
    },
}

impl fmt::Display for ValueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueView::Text(bytes) => write_text(f, bytes),
            ValueView::Unsigned(value) => write!(f, "{}", value),
            ValueView::Fixed(value) => write!(f, "{}", value),
            ValueView::TimestampedFixed { timestamp, value } => {
                write_text(f, timestamp)?;
                write!(f, " {}", value)
            }
        }
    }
}
