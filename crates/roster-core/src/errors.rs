use std::fmt;

use thiserror::Error;

use crate::model::Script;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in Roster. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Person validation
    InvalidFormat,
    LanguageMismatch,
    OutOfRange,

    // List addressing
    IndexOutOfRange,

    // Integration
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::LanguageMismatch => "ERR_LANGUAGE_MISMATCH",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the
/// context a caller needs to report the failure.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<PersonField>,
    index: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            index: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the person field the error refers to
    pub fn with_field(mut self, field: PersonField) -> Self {
        self.field = Some(field);
        self
    }

    /// Add list index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the person field context, if any
    pub fn field(&self) -> Option<PersonField> {
        self.field
    }

    /// Get the list index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Which of the two name fields a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Surname,
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonField::Name => f.write_str("name"),
            PersonField::Surname => f.write_str("surname"),
        }
    }
}

/// Error taxonomy for Roster operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    // ===== Person Validation =====
    /// Value contains characters outside one recognised script, or bad hyphenation
    #[error("Invalid {field} '{value}': only Latin or only Cyrillic letters, with at most one inner hyphen")]
    InvalidFormat { field: PersonField, value: String },

    /// Name and surname are written in different scripts
    #[error("Name and surname must be in one language (name: {name_script}, surname: {surname_script})")]
    LanguageMismatch {
        name_script: Script,
        surname_script: Script,
    },

    /// Age outside the inclusive `[min, max]` range
    #[error("Age value must be in range [{min}:{max}], got {value}")]
    AgeOutOfRange { value: i32, min: i32, max: i32 },

    // ===== List Addressing =====
    /// Index does not address an element of the list
    #[error("Index {index} is out of range for list of {count} persons")]
    IndexOutOfRange { index: usize, count: usize },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from RosterError to ExError
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidFormat { field, value } => {
                ExError::new(ExErrorKind::InvalidFormat)
                    .with_field(field)
                    .with_message(format!("Invalid format: '{}'", value))
            }

            RosterError::LanguageMismatch {
                name_script,
                surname_script,
            } => ExError::new(ExErrorKind::LanguageMismatch).with_message(format!(
                "Name is {}, surname is {}",
                name_script, surname_script
            )),

            RosterError::AgeOutOfRange { value, min, max } => {
                ExError::new(ExErrorKind::OutOfRange)
                    .with_op("set_age")
                    .with_message(format!("Age {} outside [{}:{}]", value, min, max))
            }

            RosterError::IndexOutOfRange { index, count } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_index(index)
                    .with_message(format!("List holds {} persons", count))
            }

            RosterError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RosterError
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidFormat,
            ExErrorKind::LanguageMismatch,
            ExErrorKind::OutOfRange,
            ExErrorKind::IndexOutOfRange,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let err = ExError::new(ExErrorKind::IndexOutOfRange)
            .with_op("get")
            .with_index(7)
            .with_message("List holds 3 persons");
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "[ERR_INDEX_OUT_OF_RANGE] in operation 'get': List holds 3 persons (index: 7)"
        );
    }

    #[test]
    fn test_age_out_of_range_message_reports_bounds() {
        let err = RosterError::AgeOutOfRange {
            value: 123,
            min: 0,
            max: 122,
        };
        assert!(err.to_string().contains("[0:122]"));
    }
}
