//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Manifest describing the telegram profiles to generate.
pub(crate) const FIELD_MANIFEST_PATH: &str = "build_core/var/field_manifest.json";
/// Environment variable pointing at a user manifest.
pub(crate) const MANIFEST_PATH_ENV: &str = "KORRI_P1_MANIFEST_PATH";
/// Generated field file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_FIELDS_FILE_NAME: &str = "generated_fields.rs";
/// M-Bus channel overrides are read from `KORRI_P1_<PLACEHOLDER>_MBUS_ID`.
pub(crate) const MBUS_ENV_PREFIX: &str = "KORRI_P1_";
pub(crate) const MBUS_ENV_SUFFIX: &str = "_MBUS_ID";
/// Buffer size of a `raw` field when the manifest gives none.
pub(crate) const DEFAULT_RAW_CAPACITY: usize = 128;
