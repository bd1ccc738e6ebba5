use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use crate::core::library::BookstoreError;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn create_pool_with_options(options: PgConnectOptions, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

// Idempotent, the ALTER adds the ordering column to tables created before it existed.
pub async fn create_table(pool: &PgPool) -> Result<(), BookstoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books(book_id varchar(200) NOT NULL, genre varchar(100), name varchar(1000), price float)")
        .execute(pool)
        .await?;
    sqlx::query("ALTER TABLE books ADD COLUMN IF NOT EXISTS id BIGSERIAL")
        .execute(pool)
        .await?;
    tracing::info!(table = "books", "table ready");
    Ok(())
}

impl From<sqlx::Error> for BookstoreError {
    fn from(err: sqlx::Error) -> Self {
        let (retryable, reason) = retryable_sqlx_error(&err);
        match err {
            sqlx::Error::RowNotFound => {
                BookstoreError::not_found("row not found")
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_) => {
                BookstoreError::database(format!("failed to decode row {}", err).as_str(), Some("Decode".to_string()), false)
            }
            _ => {
                BookstoreError::database(format!("postgres error {}", err).as_str(), reason, retryable)
            }
        }
    }
}

fn retryable_sqlx_error(err: &sqlx::Error) -> (bool, Option<String>) {
    match err {
        sqlx::Error::Io(_) => { (true, Some("Io".to_string())) }
        sqlx::Error::PoolTimedOut => { (true, Some("PoolTimedOut".to_string())) }
        sqlx::Error::PoolClosed => { (false, Some("PoolClosed".to_string())) }
        sqlx::Error::Tls(_) => { (false, Some("Tls".to_string())) }
        sqlx::Error::Database(db_err) => {
            (false, db_err.code().map(|c| c.to_string()))
        }
        _ => { (false, None) }
    }
}
