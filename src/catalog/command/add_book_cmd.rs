use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Genre;

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub name: String,
    pub genre: Genre,
    pub price: f64,
    // accepted but never stored, the server assigns its own id
    #[serde(default)]
    pub book_id: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(name: &str, genre: Genre, price: f64) -> Self {
        Self {
            name: name.to_string(),
            genre,
            price,
            book_id: None,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.name.as_str(), self.genre, self.price)
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookCommandResponse {
    pub book_id: String,
}

impl AddBookCommandResponse {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        let added = self.catalog_service.add_book(&book).await.map_err(CommandError::from)?;
        let book_id = added.book_id.ok_or_else(|| CommandError::Runtime {
            message: "added book has no id".to_string(), reason_code: None, retryable: false })?;
        Ok(AddBookCommandResponse::new(book_id))
    }
}
