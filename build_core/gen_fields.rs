//! Generate Rust code for the telegram profiles declared in the manifest.
use std::collections::HashSet;
use std::fmt::Write;

use super::domain::*;
use super::errors::*;
use super::name_helpers::*;
use super::type_helpers::*;

/// Emit field definitions, one struct and its `FieldSet` impl per profile.
pub(crate) fn run_fields_gen(manifest: &Manifest) -> Result<String, BuildError> {
    let mut buffer = String::new();
    let mut profile_names = HashSet::new();

    writeln!(
        buffer,
        "// Generated by build.rs from the field manifest. Do not edit."
    )?;
    writeln!(buffer)?;

    for profile in &manifest.profiles {
        if !is_snake_case(&profile.name) || RUST_KEYWORDS.contains(&profile.name.as_str()) {
            return Err(BuildError::invalid(
                &profile.name,
                "-",
                "profile names must be snake_case and not a keyword",
            ));
        }
        if !profile_names.insert(profile.name.as_str()) {
            return Err(BuildError::DuplicateProfile {
                profile: profile.name.clone(),
            });
        }

        let fields = profile.resolve()?;
        if fields.is_empty() {
            return Err(BuildError::invalid(&profile.name, "-", "profile has no fields"));
        }
        for field in &fields {
            if !is_snake_case(field.name) {
                return Err(BuildError::invalid(
                    &profile.name,
                    field.name,
                    "field names must be snake_case",
                ));
            }
        }

        let struct_name = format!("{}Telegram", to_pascal_case(&profile.name));
        generate_definitions(&mut buffer, profile, &fields)?;
        generate_struct(&mut buffer, profile, &struct_name, &fields)?;
        generate_field_set_impl(&mut buffer, profile, &struct_name, &fields)?;

        println!(
            "cargo:warning=Generated {} with {} fields",
            struct_name,
            fields.len()
        );
    }
    Ok(buffer)
}

/// `pub mod <profile>` holding one `FieldDef` const per field.
fn generate_definitions(
    buffer: &mut String,
    profile: &Profile,
    fields: &[ResolvedField<'_>],
) -> Result<(), BuildError> {
    writeln!(buffer, "/// Field definitions of the `{}` profile.", profile.name)?;
    writeln!(buffer, "pub mod {} {{", profile.name)?;
    for field in fields {
        writeln!(buffer, "\t/// `{}`", field.id)?;
        if let Some(description) = field.description {
            writeln!(buffer, "\t/// {}", description)?;
        }
        writeln!(
            buffer,
            "\tpub const {}: crate::core::FieldDef = crate::core::FieldDef {{",
            to_const_name(field.name)
        )?;
        writeln!(buffer, "\t\tname: \"{}\",", field.name)?;
        writeln!(buffer, "\t\tid: {},", obis_expr(field))?;
        writeln!(buffer, "\t\tencoding: {},", encoding_expr(&field.encoding))?;
        writeln!(buffer, "\t}};")?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(())
}

fn obis_expr(field: &ResolvedField<'_>) -> String {
    let [a, b, c, d, e, f] = field.id.groups();
    format!(
        "crate::core::ObisId::new({}, {}, {}, {}, {}, {})",
        a, b, c, d, e, f
    )
}

fn generate_struct(
    buffer: &mut String,
    profile: &Profile,
    struct_name: &str,
    fields: &[ResolvedField<'_>],
) -> Result<(), BuildError> {
    if let Some(description) = &profile.description {
        writeln!(buffer, "/// {}", description)?;
    }
    writeln!(buffer, "#[derive(Debug, Clone, PartialEq)]")?;
    writeln!(buffer, "pub struct {} {{", struct_name)?;
    for field in fields {
        if let Some(description) = field.description {
            writeln!(buffer, "\t/// {}", description)?;
        }
        writeln!(
            buffer,
            "\tpub {}: crate::protocol::field::Field<{}>,",
            to_member_name(field.name, "field"),
            field.slot.rust_type()
        )?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl {} {{", struct_name)?;
    writeln!(buffer, "\t/// Telegram with every field absent.")?;
    writeln!(buffer, "\tpub fn new() -> Self {{")?;
    writeln!(buffer, "\t\tSelf {{")?;
    for field in fields {
        writeln!(
            buffer,
            "\t\t\t{}: crate::protocol::field::Field::new(&{}::{}),",
            to_member_name(field.name, "field"),
            profile.name,
            to_const_name(field.name)
        )?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl Default for {} {{", struct_name)?;
    writeln!(buffer, "\tfn default() -> Self {{")?;
    writeln!(buffer, "\t\tSelf::new()")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(())
}

fn generate_field_set_impl(
    buffer: &mut String,
    profile: &Profile,
    struct_name: &str,
    fields: &[ResolvedField<'_>],
) -> Result<(), BuildError> {
    writeln!(
        buffer,
        "impl crate::infra::codec::traits::FieldSet for {} {{",
        struct_name
    )?;

    //======================const FIELDS
    writeln!(
        buffer,
        "\tconst FIELDS: &'static [&'static crate::core::FieldDef] = &["
    )?;
    for field in fields {
        writeln!(buffer, "\t\t&{}::{},", profile.name, to_const_name(field.name))?;
    }
    writeln!(buffer, "\t];")?;
    writeln!(buffer)?;

    //======================fn parse_field
    writeln!(
        buffer,
        "\tfn parse_field(&mut self, id: crate::core::ObisId, input: &[u8]) -> Option<Result<usize, crate::error::ParseError>> {{"
    )?;
    writeln!(buffer, "\t\tmatch id.groups() {{")?;
    for field in fields {
        let [a, b, c, d, e, f] = field.id.groups();
        writeln!(
            buffer,
            "\t\t\t[{}, {}, {}, {}, {}, {}] => Some(self.{}.parse_once(input)),",
            a,
            b,
            c,
            d,
            e,
            f,
            to_member_name(field.name, "field")
        )?;
    }
    writeln!(buffer, "\t\t\t_ => None,")?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    //======================fn apply
    writeln!(
        buffer,
        "\tfn apply<V: crate::infra::codec::traits::FieldVisitor + ?Sized>(&self, visitor: &mut V) {{"
    )?;
    for field in fields {
        writeln!(
            buffer,
            "\t\tself.{}.apply(visitor);",
            to_member_name(field.name, "field")
        )?;
    }
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    //======================fn reset
    writeln!(buffer, "\tfn reset(&mut self) {{")?;
    for field in fields {
        writeln!(buffer, "\t\tself.{}.reset();", to_member_name(field.name, "field"))?;
    }
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(())
}
