pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::BookstoreResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> BookstoreResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> BookstoreResult<BookDto>;
    async fn find_book_by_index(&self, index: i64) -> BookstoreResult<BookDto>;
    async fn random_book(&self) -> BookstoreResult<BookDto>;
    async fn list_books(&self) -> BookstoreResult<Vec<BookDto>>;
}
