use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    // A required field or identifier is blank, missing or malformed.
    InvalidInput {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Internal {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_input(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn internal(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Internal { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidInput { message, .. } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Internal { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::invalid_input(
            format!("invalid json {}", err).as_str(), Some("json".to_string()))
    }
}

impl<T> From<std::sync::PoisonError<T>> for LibraryError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        LibraryError::internal(
            format!("store lock poisoned {}", err).as_str(), Some("lock".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidInput { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Internal { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the book store and catalog service.
pub type LibraryResult<T> = Result<T, LibraryError>;
