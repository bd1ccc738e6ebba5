use std::path::Path;
use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::pg_book_repository::PgBookRepository;
use crate::books::seed::seed_books;
use crate::core::domain::Configuration;
use crate::core::library::{BookstoreError, BookstoreResult};
use crate::core::repository::RepositoryStore;
use crate::credentials::factory::create_credential_resolver;
use crate::utils::pg::{create_pool_with_options, create_table};

pub async fn create_book_repository(config: &Configuration) -> BookstoreResult<Arc<dyn BookRepository>> {
    match config.store {
        RepositoryStore::JsonFile => {
            Ok(Arc::new(JsonBookRepository::load(config.books_file.as_str()).await?))
        }
        RepositoryStore::Postgres | RepositoryStore::LocalPostgres => {
            let source = config.store.credential_source().ok_or_else(|| BookstoreError::runtime(
                format!("store {:?} has no credential source", config.store).as_str(), None))?;
            let resolver = create_credential_resolver(source, config).await?;
            let options = resolver.resolve().await?;
            let pool = create_pool_with_options(options, config.max_connections).await?;
            create_table(&pool).await?;
            let _ = seed_books(&pool, Path::new(config.seed_file.as_str())).await?;
            Ok(Arc::new(PgBookRepository::new(pool)))
        }
    }
}
