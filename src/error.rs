//! Error types for Cabinet.

use thiserror::Error;

/// Common error type for Cabinet.
#[derive(Error, Debug)]
pub enum CabinetError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Unique constraint violation (duplicate username or folder name).
    #[error("duplicate {0}")]
    Duplicate(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for CabinetError {
    fn from(e: sqlx::Error) -> Self {
        CabinetError::Database(e.to_string())
    }
}

/// Result type alias for Cabinet operations.
pub type Result<T> = std::result::Result<T, CabinetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = CabinetError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_validation_error_display() {
        let err = CabinetError::Validation("username too long".to_string());
        assert_eq!(err.to_string(), "validation error: username too long");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = CabinetError::NotFound("folder".to_string());
        assert_eq!(err.to_string(), "folder not found");
    }

    #[test]
    fn test_duplicate_error_display() {
        let err = CabinetError::Duplicate("folder name".to_string());
        assert_eq!(err.to_string(), "duplicate folder name");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CabinetError = io_err.into();
        assert!(matches!(err, CabinetError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(CabinetError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
