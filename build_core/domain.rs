use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::build_core::conf::{DEFAULT_RAW_CAPACITY, MBUS_ENV_PREFIX, MBUS_ENV_SUFFIX};
use crate::build_core::errors::BuildError;
use crate::build_core::type_helpers::SlotType;
use crate::core::{units, Encoding, ObisId, TIMESTAMP_LEN};

//==================================================================================MANIFEST
// Structures to deserialize `field_manifest.json`.
#[derive(Debug, Deserialize)]
/// Manifest listing every telegram profile to generate.
pub(crate) struct Manifest {
    pub(crate) profiles: Vec<Profile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
/// One telegram profile, turned into a module of field definitions and a struct.
pub(crate) struct Profile {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    /// Default M-Bus channel of each `$placeholder` used in group B.
    #[serde(default)]
    pub(crate) mbus_ids: BTreeMap<String, u8>,
    pub(crate) fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
/// OBIS group as written in the manifest: a byte, or a `"$name"` M-Bus placeholder.
pub(crate) enum ObisGroup {
    Number(u8),
    Placeholder(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum EncodingKind {
    Raw,
    String,
    Timestamp,
    Int,
    Fixed,
    TimestampedFixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Storage width of an `int` field.
pub(crate) enum IntWidth {
    U8,
    U16,
    U32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
/// Entry in the field list of a profile.
pub(crate) struct FieldEntry {
    pub(crate) name: String,
    pub(crate) obis: Vec<ObisGroup>,
    pub(crate) encoding: EncodingKind,
    #[serde(default)]
    pub(crate) min: Option<u16>,
    #[serde(default)]
    pub(crate) max: Option<u16>,
    #[serde(default)]
    pub(crate) unit: Option<String>,
    #[serde(default)]
    pub(crate) int_unit: Option<String>,
    #[serde(default)]
    pub(crate) width: Option<IntWidth>,
    #[serde(default)]
    pub(crate) capacity: Option<usize>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

//==================================================================================RESOLVED
/// A field entry once placeholders are resolved and attributes validated.
#[derive(Debug)]
pub(crate) struct ResolvedField<'a> {
    pub(crate) name: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) id: ObisId,
    pub(crate) encoding: Encoding,
    pub(crate) slot: SlotType,
}

impl Profile {
    /// Validate every field and resolve its OBIS id and encoding.
    pub(crate) fn resolve(&self) -> Result<Vec<ResolvedField<'_>>, BuildError> {
        let mut channels: BTreeMap<&str, u8> = BTreeMap::new();
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        let mut resolved = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(self.duplicate(field, "name"));
            }
            let id = self.resolve_obis(field, &mut channels)?;
            if !ids.insert(id) {
                return Err(self.duplicate(field, "OBIS id"));
            }
            let (encoding, slot) = self.resolve_encoding(field)?;
            resolved.push(ResolvedField {
                name: &field.name,
                description: field.description.as_deref(),
                id,
                encoding,
                slot,
            });
        }
        Ok(resolved)
    }

    fn duplicate(&self, field: &FieldEntry, what: &'static str) -> BuildError {
        BuildError::DuplicateField {
            profile: self.name.clone(),
            field: field.name.clone(),
            what,
        }
    }

    /// Channel bound to `placeholder`: environment override first, manifest default next.
    fn mbus_id(&self, placeholder: &str) -> Result<u8, BuildError> {
        let var = format!(
            "{}{}{}",
            MBUS_ENV_PREFIX,
            placeholder.to_uppercase(),
            MBUS_ENV_SUFFIX
        );
        println!("cargo:rerun-if-env-changed={}", var);

        match std::env::var(&var) {
            Ok(value) => {
                let id = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| BuildError::InvalidMbusId {
                        var: var.clone(),
                        value: value.clone(),
                    })?;
                println!("cargo:warning=Using M-Bus id {} for ${} ({})", id, placeholder, var);
                Ok(id)
            }
            Err(_) => self.mbus_ids.get(placeholder).copied().ok_or_else(|| {
                BuildError::UnresolvedPlaceholder {
                    profile: self.name.clone(),
                    placeholder: placeholder.to_string(),
                }
            }),
        }
    }

    fn resolve_obis<'a>(
        &'a self,
        field: &'a FieldEntry,
        channels: &mut BTreeMap<&'a str, u8>,
    ) -> Result<ObisId, BuildError> {
        if !(5..=6).contains(&field.obis.len()) {
            return Err(BuildError::invalid(
                &self.name,
                &field.name,
                "obis takes 5 or 6 groups",
            ));
        }

        let mut groups = [ObisId::UNUSED; 6];
        for (slot, group) in groups.iter_mut().zip(&field.obis) {
            *slot = match group {
                ObisGroup::Number(value) => *value,
                ObisGroup::Placeholder(text) => {
                    let placeholder = text.strip_prefix('$').ok_or_else(|| {
                        BuildError::invalid(
                            &self.name,
                            &field.name,
                            format!("'{}' is neither a number nor a $placeholder", text),
                        )
                    })?;
                    match channels.get(placeholder) {
                        Some(id) => *id,
                        None => {
                            let id = self.mbus_id(placeholder)?;
                            channels.insert(placeholder, id);
                            id
                        }
                    }
                }
            };
        }
        Ok(ObisId(groups))
    }

    fn resolve_encoding(&self, field: &FieldEntry) -> Result<(Encoding, SlotType), BuildError> {
        let invalid = |comment: &str| BuildError::invalid(&self.name, &field.name, comment);
        let is_numeric = matches!(
            field.encoding,
            EncodingKind::Int | EncodingKind::Fixed | EncodingKind::TimestampedFixed
        );
        let is_fixed = matches!(
            field.encoding,
            EncodingKind::Fixed | EncodingKind::TimestampedFixed
        );

        if !is_numeric && (field.unit.is_some() || field.int_unit.is_some()) {
            return Err(invalid("units only apply to numeric encodings"));
        }
        if !is_fixed && field.int_unit.is_some() {
            return Err(invalid("int_unit only applies to fixed-point encodings"));
        }
        if field.encoding != EncodingKind::Int && field.width.is_some() {
            return Err(invalid("width only applies to int fields"));
        }
        if field.encoding != EncodingKind::String && (field.min.is_some() || field.max.is_some())
        {
            return Err(invalid("min/max only apply to string fields"));
        }
        if !matches!(field.encoding, EncodingKind::Raw | EncodingKind::String)
            && field.capacity.is_some()
        {
            return Err(invalid("capacity only applies to raw and string fields"));
        }
        if field.capacity == Some(0) {
            return Err(invalid("capacity must be at least 1"));
        }

        let unit = self.known_unit(field, field.unit.as_deref().unwrap_or(units::none))?;

        match field.encoding {
            EncodingKind::Raw => Ok((
                Encoding::Raw,
                SlotType::Text(field.capacity.unwrap_or(DEFAULT_RAW_CAPACITY)),
            )),
            EncodingKind::String => {
                let max = field.max.ok_or_else(|| invalid("string fields need a max"))?;
                let min = field.min.unwrap_or(0);
                if min > max {
                    return Err(invalid("min is greater than max"));
                }
                let capacity = field.capacity.unwrap_or(usize::from(max));
                if capacity < usize::from(max) {
                    return Err(invalid("capacity is below max, valid values would not fit"));
                }
                Ok((Encoding::String { min, max }, SlotType::Text(capacity)))
            }
            EncodingKind::Timestamp => Ok((Encoding::Timestamp, SlotType::Text(TIMESTAMP_LEN))),
            EncodingKind::Int => Ok((
                Encoding::UnsignedInt { unit },
                SlotType::Int(field.width.unwrap_or(IntWidth::U32)),
            )),
            EncodingKind::Fixed | EncodingKind::TimestampedFixed => {
                if unit.is_empty() {
                    return Err(invalid("fixed-point fields need a unit"));
                }
                let int_unit = field
                    .int_unit
                    .as_deref()
                    .ok_or_else(|| invalid("fixed-point fields need an int_unit"))?;
                let int_unit = self.known_unit(field, int_unit)?;
                if field.encoding == EncodingKind::Fixed {
                    Ok((Encoding::FixedPoint { unit, int_unit }, SlotType::Fixed))
                } else {
                    Ok((
                        Encoding::TimestampedFixedPoint { unit, int_unit },
                        SlotType::TimestampedFixed,
                    ))
                }
            }
        }
    }

    /// Map a manifest unit onto the matching `core::units` constant.
    fn known_unit(&self, field: &FieldEntry, unit: &str) -> Result<&'static str, BuildError> {
        units::KNOWN
            .iter()
            .copied()
            .find(|known| *known == unit)
            .ok_or_else(|| {
                BuildError::invalid(&self.name, &field.name, format!("unknown unit '{}'", unit))
            })
    }
}
