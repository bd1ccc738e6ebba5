use std::path::Path;
use sqlx::PgPool;
use crate::books::repository::json_book_repository::read_books_file;
use crate::core::library::BookstoreResult;

// Inserts the sample books of an optional local file, skipping ids already present.
// Returns the number of rows inserted.
pub async fn seed_books(pool: &PgPool, seed_file: &Path) -> BookstoreResult<u64> {
    let Some(books) = read_books_file(seed_file).await? else {
        tracing::info!(seed_file = %seed_file.display(), "no seed file, skipping sample data");
        return Ok(0);
    };

    let mut inserted = 0;
    for book in &books {
        let res = sqlx::query(
            "INSERT INTO books (name, genre, price, book_id) \
             SELECT $1, $2, $3, $4 WHERE NOT EXISTS (SELECT 1 FROM books WHERE book_id = $4)")
            .bind(book.name.as_str())
            .bind(book.genre.to_string())
            .bind(book.price)
            .bind(book.book_id.as_str())
            .execute(pool)
            .await?;
        inserted += res.rows_affected();
    }
    tracing::info!(seed_file = %seed_file.display(), books = books.len(), inserted, "seeded sample data");
    Ok(inserted)
}
