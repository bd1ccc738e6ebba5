pub mod json_book_repository;
pub mod pg_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::BookstoreResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // book at a 0-based position in insertion order
    async fn find_by_index(&self, index: i64) -> BookstoreResult<BookEntity>;

    // uniformly random book, fails with EmptyCollection when there are none
    async fn find_random(&self) -> BookstoreResult<BookEntity>;
}
