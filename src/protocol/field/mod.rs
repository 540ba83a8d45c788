//! A single telegram field: static definition, typed storage and presence flag.
use crate::core::{FieldDef, ObisId, ValueView};
use crate::error::ParseError;
use crate::infra::codec::engine::decode;
use crate::infra::codec::traits::{FieldSlot, FieldView, FieldVisitor};

/// Telegram field backed by a slot of type `S`.
///
/// The value is only meaningful while `is_present()` holds; `value()` enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<S: FieldSlot> {
    def: &'static FieldDef,
    value: S,
    present: bool,
}

impl<S: FieldSlot> Field<S> {
    /// Absent field bound to `def`.
    pub fn new(def: &'static FieldDef) -> Self {
        Self {
            def,
            value: S::default(),
            present: false,
        }
    }

    #[inline]
    pub fn def(&self) -> &'static FieldDef {
        self.def
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    #[inline]
    pub fn id(&self) -> ObisId {
        self.def.id
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Stored value, if one was parsed during the current pass.
    #[inline]
    pub fn value(&self) -> Option<&S> {
        self.present.then_some(&self.value)
    }

    /// Mark the field absent. The slot keeps its bytes until the next successful parse.
    #[inline]
    pub fn reset(&mut self) {
        self.present = false;
    }

    /// Decode `input` with this field's encoding and store the result.
    ///
    /// # Return value
    /// Number of bytes consumed from `input`. On error neither the value nor the
    /// presence flag has changed.
    ///
    /// `Raw` fields consume the whole span even when the slot keeps only its first
    /// `N` bytes; compare the stored length with the returned one to spot clipping.
    pub fn parse(&mut self, input: &[u8]) -> Result<usize, ParseError> {
        let outcome = decode(&self.def.encoding, input)
            .and_then(|parsed| self.value.store(&parsed.value).map(|()| parsed.next));

        match outcome {
            Ok(next) => {
                self.present = true;
                #[cfg(feature = "defmt")]
                defmt::trace!("{} parsed, {} bytes consumed", self.def.name, next);
                Ok(next)
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("{} ({}) rejected: {}", self.def.name, self.def.id, err);
                Err(err)
            }
        }
    }

    /// Like [`Field::parse`], but refuses a field already populated during this pass.
    pub fn parse_once(&mut self, input: &[u8]) -> Result<usize, ParseError> {
        if self.present {
            #[cfg(feature = "defmt")]
            defmt::debug!("{} ({}) repeated, first value kept", self.def.name, self.def.id);
            return Err(ParseError::DuplicateField);
        }
        self.parse(input)
    }

    /// Hand this field to `visitor`.
    #[inline]
    pub fn apply<V: FieldVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit(self);
    }
}

impl<S: FieldSlot> FieldView for Field<S> {
    fn def(&self) -> &'static FieldDef {
        self.def
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn value(&self) -> Option<ValueView<'_>> {
        self.present.then(|| self.value.view())
    }
}
