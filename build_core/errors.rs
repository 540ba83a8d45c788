//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (manifest parsing, validation, code generation).
pub(crate) enum BuildError {
    /// A field entry is inconsistent (bounds, units, widths, names).
    #[error("[MESSAGE]:Invalid field [PROFILE]:{profile} [FIELD]:{field}, [COMMENT]:{comment}")]
    InvalidField {
        profile: String,
        field: String,
        comment: String,
    },

    /// Two fields of one profile share a name or an OBIS id.
    #[error("[MESSAGE]:Duplicate {what} [PROFILE]:{profile} [FIELD]:{field}")]
    DuplicateField {
        profile: String,
        field: String,
        what: &'static str,
    },

    /// Two profiles would generate the same module or struct.
    #[error("[MESSAGE]:Duplicate profile [PROFILE]:{profile}")]
    DuplicateProfile { profile: String },

    /// An OBIS group references an M-Bus placeholder nobody defines.
    #[error("[MESSAGE]:Unresolved M-Bus placeholder [PROFILE]:{profile} [PLACEHOLDER]:${placeholder}")]
    UnresolvedPlaceholder { profile: String, placeholder: String },

    /// An M-Bus override variable does not hold a byte.
    #[error("[MESSAGE]:Invalid M-Bus id [VAR]:{var} [VALUE]:{value}")]
    InvalidMbusId { var: String, value: String },

    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the manifest.
    #[error("[MESSAGE]:Invalid JSON format [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },
}

impl BuildError {
    pub(crate) fn invalid(profile: &str, field: &str, comment: impl Into<String>) -> Self {
        BuildError::InvalidField {
            profile: profile.to_string(),
            field: field.to_string(),
            comment: comment.into(),
        }
    }
}
