use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub book_repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            book_repository,
        }
    }
}

// ErrorDetail is the body of every error response
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub type ServerError = (StatusCode, Json<ErrorDetail>);

pub fn server_error(status: StatusCode, detail: &str) -> ServerError {
    (status, Json(ErrorDetail { detail: detail.to_string() }))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        tracing::debug!(error = ?err, "command failed");
        match err {
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::UNPROCESSABLE_ENTITY, err.message())
            }
            CommandError::Database { .. } | CommandError::Serialization { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
            CommandError::Runtime { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
        }
    }
}
