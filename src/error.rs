//! Error types for ftag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ftag application
#[derive(Debug, Error)]
pub enum FtagError {
    #[error("No such file: {0}")]
    NotFound(PathBuf),

    #[error("Not an ftag directory: {0}")]
    NotInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FtagError::NotFound(_) => 2,
            FtagError::NotInitialized(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FtagError::NotFound(path) => {
                format!(
                    "No such file: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • ftag tags a file by its content, so the file must exist and be readable",
                    path.display()
                )
            }
            FtagError::NotInitialized(path) => {
                format!(
                    "Not an ftag directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'ftag init' to create a tag database here\n\
                    • Navigate to a directory that contains one\n\
                    • Set FTAG_ROOT environment variable to your database path",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FtagError
pub type Result<T> = std::result::Result<T, FtagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = FtagError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("ftag init"));
        assert!(msg.contains("FTAG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_not_found_suggestion() {
        let err = FtagError::NotFound(PathBuf::from("/tmp/missing.txt"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/missing.txt"));
        assert!(msg.contains("readable"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FtagError::NotFound(PathBuf::from("x")).exit_code(), 2);
        assert_eq!(FtagError::NotInitialized(PathBuf::from("x")).exit_code(), 3);
        assert_eq!(FtagError::Store("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = FtagError::Store("corrupt index".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Store error: corrupt index");
    }
}
