use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{new_book_id, BookEntity};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::BookstoreResult;

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    // any client supplied book_id is replaced by a fresh one
    async fn add_book(&self, book: &BookDto) -> BookstoreResult<BookDto> {
        let entity = BookEntity {
            book_id: new_book_id(),
            name: book.name.to_string(),
            genre: book.genre,
            price: book.price,
        };
        let book_id = self.book_repository.create(&entity).await?;
        tracing::info!(book_id = %book_id, name = %entity.name, "book added");
        Ok(BookDto::from(entity))
    }

    async fn find_book_by_id(&self, id: &str) -> BookstoreResult<BookDto> {
        self.book_repository.get(id).await.map(BookDto::from)
    }

    async fn find_book_by_index(&self, index: i64) -> BookstoreResult<BookDto> {
        self.book_repository.find_by_index(index).await.map(BookDto::from)
    }

    async fn random_book(&self) -> BookstoreResult<BookDto> {
        self.book_repository.find_random().await.map(BookDto::from)
    }

    async fn list_books(&self) -> BookstoreResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}
