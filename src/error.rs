//! Error types for the decision admission engine

use thiserror::Error;

/// Main error type for admission operations
#[derive(Error, Debug)]
pub enum AdmissionError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Contract parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Embedded schema artifact error
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AdmissionError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        Self::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an internal error
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    /// Check if this error is a user error (vs system error)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AdmissionError::InvalidInput(_)
                | AdmissionError::FileError(_)
                | AdmissionError::ParseError(_)
        )
    }
}

impl From<std::io::Error> for AdmissionError {
    fn from(err: std::io::Error) -> Self {
        AdmissionError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for AdmissionError {
    fn from(err: serde_json::Error) -> Self {
        AdmissionError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for AdmissionError {
    fn from(err: serde_yaml::Error) -> Self {
        AdmissionError::ParseError(format!("YAML error: {}", err))
    }
}

/// Result type alias for admission operations
pub type Result<T> = std::result::Result<T, AdmissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdmissionError::InvalidInput("bad contract".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad contract");

        let err = AdmissionError::FileError("not found".to_string());
        assert_eq!(err.to_string(), "File error: not found");
    }

    #[test]
    fn test_is_user_error() {
        assert!(AdmissionError::invalid_input("x").is_user_error());
        assert!(AdmissionError::file_error("x").is_user_error());
        assert!(AdmissionError::parse_error("x").is_user_error());
        assert!(!AdmissionError::internal_error("x").is_user_error());
        assert!(!AdmissionError::SchemaError("x".to_string()).is_user_error());
    }

    #[test]
    fn test_error_constructors() {
        let err = AdmissionError::parse_error("unexpected token");
        assert!(matches!(err, AdmissionError::ParseError(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AdmissionError = io_err.into();
        assert!(matches!(err, AdmissionError::FileError(_)));
    }
}
