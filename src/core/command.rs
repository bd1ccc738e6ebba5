use async_trait::async_trait;
use crate::core::library::BookstoreError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => message,
            CommandError::NotFound { message } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookstoreError> for CommandError {
    fn from(other: BookstoreError) -> Self {
        match other {
            BookstoreError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            BookstoreError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            BookstoreError::EmptyCollection { message } => {
                CommandError::Runtime { message, reason_code: Some("EmptyCollection".to_string()), retryable: false }
            }
            BookstoreError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            BookstoreError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            BookstoreError::Credentials { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            BookstoreError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}
