//! Public traits exposed by the codec engine. They decouple the generated
//! telegram structures from the decoding logic and give reporting code a
//! uniform API over heterogeneously typed fields.
use super::engine::Decoded;
use crate::core::{FieldDef, ObisId, ValueView};
use crate::error::ParseError;

//==================================================================================FIELD_SLOT
/// Typed storage behind a field (`FieldString<N>`, `u8`/`u16`/`u32`, `FixedValue`,
/// `TimestampedFixedValue`).
pub trait FieldSlot: Default {
    /// Validate `decoded` against this storage, then overwrite it.
    ///
    /// Implementations must leave `self` untouched when they return an error: every
    /// check happens before the first write.
    fn store(&mut self, decoded: &Decoded<'_>) -> Result<(), ParseError>;

    /// Type-erased view over the stored value.
    fn view(&self) -> ValueView<'_>;
}

//==================================================================================FIELD_VIEW
/// Read-only, object-safe face of a field, handed to visitors.
pub trait FieldView {
    /// Static definition (name, OBIS id, encoding).
    fn def(&self) -> &'static FieldDef;

    /// Whether a value was parsed during the current telegram pass.
    fn is_present(&self) -> bool;

    /// Stored value, `None` while the field is absent.
    fn value(&self) -> Option<ValueView<'_>>;

    /// Field name.
    fn name(&self) -> &'static str {
        self.def().name
    }

    /// OBIS identifier.
    fn id(&self) -> ObisId {
        self.def().id
    }

    /// Unit of the value as read from the wire.
    fn unit(&self) -> &'static str {
        self.def().encoding.unit()
    }

    /// Unit of the stored integer.
    fn int_unit(&self) -> &'static str {
        self.def().encoding.int_unit()
    }
}

//==================================================================================FIELD_VISITOR
/// Visitor applied uniformly to fields whose concrete type it does not know.
pub trait FieldVisitor {
    fn visit(&mut self, field: &dyn FieldView);
}

impl<F> FieldVisitor for F
where
    F: FnMut(&dyn FieldView),
{
    fn visit(&mut self, field: &dyn FieldView) {
        self(field)
    }
}

//==================================================================================FIELD_SET
/// Implemented by every generated telegram structure.
/// Routes a value span to the member whose OBIS id matches.
pub trait FieldSet {
    /// Definitions of every member, in declaration order.
    const FIELDS: &'static [&'static FieldDef];

    /// Parse `input` into the member identified by `id`.
    ///
    /// Returns `None` when no member carries `id`; unknown lines are the line
    /// matcher's business. A member that is already present is refused with
    /// `ParseError::DuplicateField` and keeps its first value.
    fn parse_field(&mut self, id: ObisId, input: &[u8]) -> Option<Result<usize, ParseError>>;

    /// Hand every member to `visitor`, in declaration order.
    fn apply<V: FieldVisitor + ?Sized>(&self, visitor: &mut V);

    /// Mark every member absent, ready for the next telegram.
    fn reset(&mut self);

    /// Definition of the member identified by `id`.
    fn find(id: ObisId) -> Option<&'static FieldDef> {
        Self::FIELDS.iter().copied().find(|def| def.id == id)
    }

    /// Number of members populated during the current pass.
    fn present_count(&self) -> usize {
        let mut count = 0;
        self.apply(&mut |field: &dyn FieldView| {
            if field.is_present() {
                count += 1;
            }
        });
        count
    }
}
