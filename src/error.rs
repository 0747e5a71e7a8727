//! Error types for the envbind library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for envbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for envbind operations
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Target Errors
    // -------------------------------------------------------------------------
    #[error("target is not a bindable record")]
    NotBindable,

    // -------------------------------------------------------------------------
    // Field Errors
    // -------------------------------------------------------------------------
    #[error("required variable '{var}' for field '{field}' is not set")]
    MissingRequired { field: &'static str, var: String },

    #[error("cannot parse '{value}' as {kind} for field '{field}'")]
    TypeCoercion {
        field: &'static str,
        value: String,
        kind: &'static str,
    },

    #[error("unsupported list element type for field '{field}': only string elements are supported")]
    UnsupportedSliceType { field: &'static str },

    #[error("unsupported type for field '{field}'")]
    UnsupportedFieldType { field: &'static str },

    // -------------------------------------------------------------------------
    // Bootstrap Errors
    // -------------------------------------------------------------------------
    #[error("failed to load environment file '{path}': {source}")]
    BootstrapLoad {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl Error {
    /// Name of the field this error refers to, if any
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingRequired { field, .. }
            | Error::TypeCoercion { field, .. }
            | Error::UnsupportedSliceType { field }
            | Error::UnsupportedFieldType { field } => Some(*field),
            _ => None,
        }
    }

    /// Check if this is a field-level binding error
    #[must_use]
    pub fn is_field_error(&self) -> bool {
        self.field().is_some()
    }

    /// Check if this error came from the declared field type rather than the value
    #[must_use]
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedSliceType { .. } | Error::UnsupportedFieldType { .. }
        )
    }
}
