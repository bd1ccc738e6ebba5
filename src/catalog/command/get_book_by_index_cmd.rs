use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::get_book_cmd::GetBookCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookByIndexCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookByIndexCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookByIndexCommandRequest {
    pub index: i64,
}

impl GetBookByIndexCommandRequest {
    pub fn new(index: i64) -> Self {
        Self {
            index,
        }
    }

    // path segments arrive as text, anything that is not an integer is a validation failure
    pub fn parse(index: &str) -> Result<Self, CommandError> {
        index.parse::<i64>().map(Self::new).map_err(|err| CommandError::Validation {
            message: format!("index {} is not an integer: {}", index, err),
            reason_code: Some("index".to_string()),
        })
    }
}

#[async_trait]
impl Command<GetBookByIndexCommandRequest, GetBookCommandResponse> for GetBookByIndexCommand {
    async fn execute(&self, req: GetBookByIndexCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_index(req.index)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
