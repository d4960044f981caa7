use thiserror::Error;

/// Errors raised while decoding canonical values and strict records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A mandatory field was absent from the input object.
    #[error("field {field} of type {record} is required")]
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
        /// Record type that requires the field.
        record: &'static str,
    },
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a numeric value exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfRange {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// Malformed JSON or a scalar of the wrong JSON type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while producing canonical text encodings.
///
/// These do not occur for well-formed values; they surface serializer
/// failures rather than a normal control-flow path.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The JSON serializer failed.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
