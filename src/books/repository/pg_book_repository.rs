use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookstoreError, BookstoreResult, Genre};
use crate::core::repository::Repository;

const SELECT_BOOKS: &str = "SELECT book_id, genre, name, price FROM books";

#[derive(Debug, Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for PgBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookstoreResult<String> {
        let book_id: String = sqlx::query_scalar(
            "INSERT INTO books (name, genre, price, book_id) VALUES ($1, $2, $3, $4) RETURNING book_id")
            .bind(entity.name.as_str())
            .bind(entity.genre.to_string())
            .bind(entity.price)
            .bind(entity.book_id.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(book_id)
    }

    async fn get(&self, id: &str) -> BookstoreResult<BookEntity> {
        let row = sqlx::query(format!("{} WHERE book_id = $1 LIMIT 1", SELECT_BOOKS).as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => map_to_book(&row),
            None => Err(BookstoreError::not_found(format!("Book ID {} not found in database.", id).as_str())),
        }
    }

    async fn list(&self) -> BookstoreResult<Vec<BookEntity>> {
        let rows = sqlx::query(format!("{} ORDER BY id", SELECT_BOOKS).as_str())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_to_book).collect()
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_by_index(&self, index: i64) -> BookstoreResult<BookEntity> {
        let not_found = || BookstoreError::not_found(format!("Book index {} out of range.", index).as_str());
        if index < 0 {
            return Err(not_found());
        }
        let row = sqlx::query(format!("{} ORDER BY id OFFSET $1 LIMIT 1", SELECT_BOOKS).as_str())
            .bind(index)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => map_to_book(&row),
            None => Err(not_found()),
        }
    }

    async fn find_random(&self) -> BookstoreResult<BookEntity> {
        let row = sqlx::query(format!("{} ORDER BY random() LIMIT 1", SELECT_BOOKS).as_str())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => map_to_book(&row),
            None => Err(BookstoreError::empty_collection("No books available.")),
        }
    }
}

// genre, name and price are nullable in the table; a row missing any of them is a storage fault
fn map_to_book(row: &PgRow) -> BookstoreResult<BookEntity> {
    let book_id: String = row.try_get("book_id")?;
    let genre: String = required(row.try_get("genre")?, "genre", &book_id)?;
    let genre = Genre::try_from(genre.as_str()).map_err(|err| BookstoreError::database(
        format!("book {} has invalid genre: {}", book_id, err).as_str(), Some("InvalidGenre".to_string()), false))?;
    Ok(BookEntity {
        name: required(row.try_get("name")?, "name", &book_id)?,
        genre,
        price: required(row.try_get("price")?, "price", &book_id)?,
        book_id,
    })
}

fn required<T>(value: Option<T>, column: &str, book_id: &str) -> BookstoreResult<T> {
    value.ok_or_else(|| BookstoreError::database(
        format!("book {} has no {}", book_id, column).as_str(), Some("NullColumn".to_string()), false))
}
