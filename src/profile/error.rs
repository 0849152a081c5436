//! Profile error types

use thiserror::Error;

/// Errors that can occur while loading or saving the profile
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The storage backend refused the operation (quota, permissions, missing)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored content is not a flat string-to-string JSON object
    #[error("Malformed profile data: {0}")]
    Malformed(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the record failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfileError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");

        let err = ProfileError::Malformed("expected an object".to_string());
        assert_eq!(err.to_string(), "Malformed profile data: expected an object");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ProfileError = io_err.into();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}
