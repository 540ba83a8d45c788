//! Typing helpers used while generating telegram structures.
use crate::build_core::domain::IntWidth;
use crate::core::{units, Encoding};

/// Storage type chosen for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotType {
    /// `FieldString<N>`.
    Text(usize),
    Int(IntWidth),
    Fixed,
    TimestampedFixed,
}

impl SlotType {
    /// Fully qualified Rust type of the slot.
    pub(crate) fn rust_type(&self) -> String {
        match self {
            SlotType::Text(capacity) => format!("crate::core::FieldString<{}>", capacity),
            SlotType::Int(width) => int_type(*width).to_string(),
            SlotType::Fixed => "crate::core::FixedValue".to_string(),
            SlotType::TimestampedFixed => "crate::core::TimestampedFixedValue".to_string(),
        }
    }
}

/// Primitive type matching an `int` width.
pub(crate) fn int_type(width: IntWidth) -> &'static str {
    match width {
        IntWidth::U8 => "u8",
        IntWidth::U16 => "u16",
        IntWidth::U32 => "u32",
    }
}

/// Path of the `core::units` constant for a wire unit.
pub(crate) fn unit_path(unit: &str) -> String {
    if unit == units::none {
        "crate::core::units::none".to_string()
    } else {
        format!("crate::core::units::{}", unit)
    }
}

/// Rust expression rebuilding `encoding`.
pub(crate) fn encoding_expr(encoding: &Encoding) -> String {
    match *encoding {
        Encoding::Raw => "crate::core::Encoding::Raw".to_string(),
        Encoding::String { min, max } => {
            format!("crate::core::Encoding::String {{ min: {}, max: {} }}", min, max)
        }
        Encoding::Timestamp => "crate::core::Encoding::Timestamp".to_string(),
        Encoding::UnsignedInt { unit } => format!(
            "crate::core::Encoding::UnsignedInt {{ unit: {} }}",
            unit_path(unit)
        ),
        Encoding::FixedPoint { unit, int_unit } => format!(
            "crate::core::Encoding::FixedPoint {{ unit: {}, int_unit: {} }}",
            unit_path(unit),
            unit_path(int_unit)
        ),
        Encoding::TimestampedFixedPoint { unit, int_unit } => format!(
            "crate::core::Encoding::TimestampedFixedPoint {{ unit: {}, int_unit: {} }}",
            unit_path(unit),
            unit_path(int_unit)
        ),
    }
}
