use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for configuration and file handling.
///
/// Fetch and persistence failures inside the running overlay are absorbed
/// where they happen; this enum only covers failures a caller can act on,
/// such as an unreadable or invalid configuration file.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// Configuration field missing or invalid
    #[error("invalid config field '{field}' in {component}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Component containing the field
        component: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// I/O error without path context, such as an unresolvable config directory
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for overlay operations.
pub type Result<T> = result::Result<T, OverlayError>;

impl OverlayError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        OverlayError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error tagged with the path it happened on.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        OverlayError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    pub(crate) fn invalid_field(component: &str, field: &str, reason: impl Into<String>) -> Self {
        OverlayError::InvalidConfigField {
            field: field.to_string(),
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}
