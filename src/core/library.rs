use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum BookstoreError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    // Raised when an operation needs at least one book, e.g. a random pick.
    EmptyCollection {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Secret store, cluster lookup or role assumption failed at startup.
    Credentials {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookstoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> BookstoreError {
        BookstoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> BookstoreError {
        BookstoreError::NotFound { message: message.to_string() }
    }

    pub fn empty_collection(message: &str) -> BookstoreError {
        BookstoreError::EmptyCollection { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> BookstoreError {
        BookstoreError::Serialization { message: message.to_string() }
    }

    pub fn credentials(message: &str, reason_code: Option<String>, retryable: bool) -> BookstoreError {
        BookstoreError::Credentials { message: message.to_string(), reason_code, retryable }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            BookstoreError::Database { retryable, .. } => { *retryable }
            BookstoreError::NotFound { .. } => { false }
            BookstoreError::EmptyCollection { .. } => { false }
            BookstoreError::Validation { .. } => { false }
            BookstoreError::Serialization { .. } => { false }
            BookstoreError::Credentials { retryable, .. } => { *retryable }
            BookstoreError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for BookstoreError {
    fn from(err: std::io::Error) -> Self {
        BookstoreError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for BookstoreError {
    fn from(err: serde_json::Error) -> Self {
        BookstoreError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for BookstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookstoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookstoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::EmptyCollection { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookstoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Credentials { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookstoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for BookstoreError {}

/// A specialized Result type for the bookstore.
pub type BookstoreResult<T> = Result<T, BookstoreError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "fiction")]
    Fiction,
    #[serde(rename = "non-fiction")]
    NonFiction,
}

impl TryFrom<&str> for Genre {
    type Error = BookstoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "fiction" => Ok(Genre::Fiction),
            "non-fiction" => Ok(Genre::NonFiction),
            other => Err(BookstoreError::validation(
                format!("unknown genre {}", other).as_str(), Some("genre".to_string()))),
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Genre::Fiction => write!(f, "fiction"),
            Genre::NonFiction => write!(f, "non-fiction"),
        }
    }
}
