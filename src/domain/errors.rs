//! Domain errors for parameter loading and reporting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or reading a parameter file.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The path does not exist.
    #[error("Parameter file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The path exists but could not be read (permissions, a directory).
    #[error("Failed to read parameter file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid JSON.
    #[error("Invalid JSON in {}", .path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an object.
    #[error("Expected a JSON object at the top level of {}, found {found}", .path.display())]
    TypeMismatch { path: PathBuf, found: &'static str },

    /// A field read named a key the document does not have.
    #[error("Missing parameter: {0}")]
    MissingKey(String),

    /// A field has the wrong type or range for strict mode.
    #[error("Invalid value for {key}: expected {expected}, found {found}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: String,
    },
}

impl ParamsError {
    /// Short machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::Unreadable { .. } => "unreadable",
            Self::JsonParse { .. } => "json_parse",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::MissingKey(_) => "missing_key",
            Self::InvalidValue { .. } => "invalid_value",
        }
    }
}

/// Result alias for parameter operations.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// JSON type name of a value, as used in error messages.
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
