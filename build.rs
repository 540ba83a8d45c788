//! Cargo build script: generates the telegram field tables.

// Re-export the core module from src/core.rs so build_core can reuse it
#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::{
    conf::*, domain::Manifest, errors::BuildError, gen_fields::run_fields_gen,
};

use std::fs;
use std::path::PathBuf;

// The field manifest (JSON) declares, per telegram profile, every field with its OBIS
// id and encoding. This script validates it and writes one `FieldDef` const per field
// plus one struct per profile; `src/protocol/fields/mod.rs` pulls the result in.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    // Tell Cargo to rerun this script whenever one of these files changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_core");
    println!("cargo:rerun-if-changed={}", FIELD_MANIFEST_PATH);
    println!("cargo:rerun-if-env-changed={}", MANIFEST_PATH_ENV);

    // 1. Locate the manifest.
    // Priority order:
    //   1. KORRI_P1_MANIFEST_PATH environment variable (absolute or relative path)
    //   2. Default manifest shipped with the crate
    let default_manifest_path = PathBuf::from(FIELD_MANIFEST_PATH);

    let user_manifest_path = std::env::var(MANIFEST_PATH_ENV).ok().map(PathBuf::from);

    let manifest_path = if let Some(path) = user_manifest_path {
        if path.exists() {
            println!("cargo:warning=Using custom field_manifest.json from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        } else {
            println!(
                "cargo:warning=Custom manifest path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default field_manifest");
            default_manifest_path
        }
    } else {
        default_manifest_path
    };

    // 2. Parse it. M-Bus placeholders are resolved while generating.
    let manifest_string = fs::read_to_string(&manifest_path).map_err(|e| BuildError::ReadFile {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;
    let manifest: Manifest = serde_json::from_str(&manifest_string)?;

    // 3. Generate the field tables and telegram structs.
    let buffer_fields_code = run_fields_gen(&manifest)?;

    // 4. Write the generated code into `OUT_DIR`.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let fields_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_FIELDS_FILE_NAME);

    fs::write(&fields_file_path, &buffer_fields_code).map_err(|e| BuildError::WriteFile {
        path: fields_file_path,
        source: e,
    })?;

    Ok(())
}
