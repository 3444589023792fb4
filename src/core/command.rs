use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
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

impl CommandError {
    pub fn invalid_input(message: &str) -> CommandError {
        CommandError::InvalidInput { message: message.to_string(), reason_code: None }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidInput { message, reason_code } => {
                CommandError::InvalidInput { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Internal { message, reason_code } => {
                CommandError::Internal { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput { message, .. } => { write!(f, "{}", message) }
            CommandError::NotFound { message } => { write!(f, "{}", message) }
            CommandError::Internal { message, .. } => { write!(f, "{}", message) }
        }
    }
}
