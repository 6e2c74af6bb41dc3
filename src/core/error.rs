// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for schemapack.
//!
//! Errors fall into four groups:
//! - Configuration (schema compilation, registry construction)
//! - Encode (record does not fit the schema)
//! - Decode (buffer is malformed, truncated or from another schema)
//! - Schema document loading (parse and I/O failures)

use thiserror::Error;

/// Errors that can occur while compiling schemas or encoding/decoding records.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Type name not present in the type registry
    #[error("Unknown type '{type_name}' for field '{field}'")]
    UnknownType {
        /// Field that referenced the type
        field: String,
        /// Type name that was not found
        type_name: String,
    },

    /// A codec was registered twice under the same name
    #[error("Type '{type_name}' is already registered")]
    DuplicateType {
        /// Conflicting type name
        type_name: String,
    },

    /// Two schema entries share the same field name
    #[error("Duplicate field '{name}' in schema")]
    DuplicateField {
        /// Conflicting field name
        name: String,
    },

    /// Schema declares more fields than a header byte can address
    #[error("Schema declares {count} fields, at most {max} are supported")]
    TooManyFields {
        /// Number of declared fields
        count: usize,
        /// Maximum supported fields
        max: usize,
    },

    /// Record key with no matching field definition
    #[error("Unknown field '{name}' is not part of the schema")]
    UnknownField {
        /// Record key that was not found
        name: String,
    },

    /// Value kind does not fit the field's codec
    #[error("Field '{field}' expects a {expected} value, found {found}")]
    TypeMismatch {
        /// Field name (or codec name when raised by a codec directly)
        field: String,
        /// Codec type name
        expected: String,
        /// Kind of the value supplied
        found: String,
    },

    /// Value cannot be represented by the field's codec
    #[error("Value {value} is out of range for type '{type_name}'")]
    ValueOutOfRange {
        /// Codec type name
        type_name: String,
        /// Offending value, rendered for diagnostics
        value: String,
    },

    /// Field index cannot be packed into a header byte
    #[error("Field index {index} is out of range, header supports at most {max}")]
    HeaderOutOfRange {
        /// Requested index
        index: usize,
        /// Largest representable index
        max: usize,
    },

    /// Encoded buffer is malformed or truncated
    #[error("Corrupt data at offset {offset}: {reason}")]
    CorruptData {
        /// Byte offset of the failing unit
        offset: usize,
        /// What went wrong
        reason: String,
    },

    /// A codec broke its own contract (e.g. wrote more than it sized)
    #[error("Invariant violation: {invariant}")]
    InvariantViolation {
        /// Description of the invariant that was violated
        invariant: String,
    },

    /// Input record could not be interpreted
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// What went wrong
        reason: String,
    },

    /// Schema document could not be parsed
    #[error("Parse error in {context}: {message}")]
    Parse {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Create an "unknown type" error.
    pub fn unknown_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        CodecError::UnknownType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a "duplicate type" error.
    pub fn duplicate_type(type_name: impl Into<String>) -> Self {
        CodecError::DuplicateType {
            type_name: type_name.into(),
        }
    }

    /// Create a "duplicate field" error.
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        CodecError::DuplicateField { name: name.into() }
    }

    /// Create an "unknown field" error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        CodecError::UnknownField { name: name.into() }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        CodecError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a value out of range error.
    pub fn out_of_range(type_name: impl Into<String>, value: impl ToString) -> Self {
        CodecError::ValueOutOfRange {
            type_name: type_name.into(),
            value: value.to_string(),
        }
    }

    /// Create a corrupt data error.
    pub fn corrupt(offset: usize, reason: impl Into<String>) -> Self {
        CodecError::CorruptData {
            offset,
            reason: reason.into(),
        }
    }

    /// Create a corrupt data error for a read that runs past the buffer end.
    pub fn truncated(requested: usize, available: usize, offset: usize) -> Self {
        CodecError::CorruptData {
            offset,
            reason: format!(
                "truncated buffer, requested {requested} bytes but only {available} available"
            ),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(invariant: impl Into<String>) -> Self {
        CodecError::InvariantViolation {
            invariant: invariant.into(),
        }
    }

    /// Create an invalid record error.
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        CodecError::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised while reading an encoded buffer.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, CodecError::CorruptData { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnknownType { field, type_name } => {
                vec![("field", field.clone()), ("type", type_name.clone())]
            }
            CodecError::DuplicateType { type_name } => vec![("type", type_name.clone())],
            CodecError::DuplicateField { name } | CodecError::UnknownField { name } => {
                vec![("field", name.clone())]
            }
            CodecError::TooManyFields { count, max } => {
                vec![("count", count.to_string()), ("max", max.to_string())]
            }
            CodecError::TypeMismatch {
                field,
                expected,
                found,
            } => vec![
                ("field", field.clone()),
                ("expected", expected.clone()),
                ("found", found.clone()),
            ],
            CodecError::ValueOutOfRange { type_name, value } => {
                vec![("type", type_name.clone()), ("value", value.clone())]
            }
            CodecError::HeaderOutOfRange { index, max } => {
                vec![("index", index.to_string()), ("max", max.to_string())]
            }
            CodecError::CorruptData { offset, reason } => {
                vec![("offset", offset.to_string()), ("reason", reason.clone())]
            }
            CodecError::InvariantViolation { invariant } => {
                vec![("invariant", invariant.clone())]
            }
            CodecError::InvalidRecord { reason } => vec![("reason", reason.clone())],
            CodecError::Parse { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::Io(err) => vec![("message", err.to_string())],
        }
    }
}

/// Result type for schemapack operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_error() {
        let err = CodecError::unknown_type("price", "decimal");
        assert!(matches!(err, CodecError::UnknownType { .. }));
        assert_eq!(
            err.to_string(),
            "Unknown type 'decimal' for field 'price'"
        );
    }

    #[test]
    fn test_duplicate_field_error() {
        let err = CodecError::duplicate_field("symbol");
        assert_eq!(err.to_string(), "Duplicate field 'symbol' in schema");
    }

    #[test]
    fn test_unknown_field_error() {
        let err = CodecError::unknown_field("volume");
        assert!(matches!(err, CodecError::UnknownField { .. }));
        assert_eq!(
            err.to_string(),
            "Unknown field 'volume' is not part of the schema"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = CodecError::type_mismatch("a", "uint8", "string");
        assert_eq!(
            err.to_string(),
            "Field 'a' expects a uint8 value, found string"
        );
    }

    #[test]
    fn test_out_of_range_error() {
        let err = CodecError::out_of_range("uint8", 300);
        assert_eq!(err.to_string(), "Value 300 is out of range for type 'uint8'");
    }

    #[test]
    fn test_truncated_is_corrupt_data() {
        let err = CodecError::truncated(4, 1, 9);
        assert!(err.is_corrupt_data());
        assert_eq!(
            err.to_string(),
            "Corrupt data at offset 9: truncated buffer, requested 4 bytes but only 1 available"
        );
    }

    #[test]
    fn test_header_out_of_range_error() {
        let err = CodecError::HeaderOutOfRange { index: 64, max: 63 };
        assert_eq!(
            err.to_string(),
            "Field index 64 is out of range, header supports at most 63"
        );
    }

    #[test]
    fn test_invariant_violation_error() {
        let err = CodecError::invariant_violation("buffer overrun");
        assert_eq!(err.to_string(), "Invariant violation: buffer overrun");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CodecError = io_err.into();
        assert!(matches!(err, CodecError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: file not found");
    }

    #[test]
    fn test_log_fields_corrupt_data() {
        let err = CodecError::corrupt(12, "bad header");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("offset", "12".to_string()));
        assert_eq!(fields[1], ("reason", "bad header".to_string()));
    }

    #[test]
    fn test_log_fields_type_mismatch() {
        let err = CodecError::type_mismatch("a", "boolean", "int");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].0, "field");
        assert_eq!(fields[1].1, "boolean");
        assert_eq!(fields[2].1, "int");
    }

    #[test]
    fn test_log_fields_parse() {
        let err = CodecError::parse("TOML schema", "expected table");
        let fields = err.log_fields();
        assert_eq!(fields[0], ("context", "TOML schema".to_string()));
        assert_eq!(fields[1], ("message", "expected table".to_string()));
    }
}
