//! Custom error types for the cost splitter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for cost splitter operations
#[derive(Error, Debug)]
pub enum SplitterError {
    /// The input document could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A category has no participants to share its cost
    #[error("Category '{category}' (id {category_id}) has no participants")]
    ZeroParticipants { category_id: i64, category: String },

    /// A person or expense references a category that is not defined
    #[error("Unknown category id {category_id} referenced by {context}")]
    UnknownCategory { category_id: i64, context: String },

    /// Validation errors for input data and options
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested culture has no currency format
    #[error("Culture '{0}' is not known")]
    UnknownCulture(String),

    /// File I/O errors
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The project has already been run through allocation
    #[error("Costs have already been allocated for this project")]
    AlreadyAllocated,

    /// Decimal arithmetic overflowed
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),
}

impl SplitterError {
    /// Create an I/O error tied to a path
    pub fn io(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a parse error tied to a path
    pub fn parse(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Check if this is a zero participants error
    pub fn is_zero_participants(&self) -> bool {
        matches!(self, Self::ZeroParticipants { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<csv::Error> for SplitterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for cost splitter operations
pub type SplitterResult<T> = Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitterError::Validation("duplicate person 'Alice'".into());
        assert_eq!(
            err.to_string(),
            "Validation error: duplicate person 'Alice'"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_participants_names_category() {
        let err = SplitterError::ZeroParticipants {
            category_id: 3,
            category: "Fuel".into(),
        };
        assert_eq!(err.to_string(), "Category 'Fuel' (id 3) has no participants");
        assert!(err.is_zero_participants());
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = SplitterError::io("/tmp/missing.json", "file not found");
        assert_eq!(
            err.to_string(),
            "I/O error on /tmp/missing.json: file not found"
        );
    }

    #[test]
    fn test_csv_error_is_export_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SplitterError = csv::Error::from(io_err).into();
        assert!(matches!(err, SplitterError::Export(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
