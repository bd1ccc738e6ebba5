use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub fn create_catalog_service(book_repository: Arc<dyn BookRepository>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(book_repository))
}

// json store in a fresh temp dir, one per caller; the dir is removed when the repository is dropped
#[cfg(test)]
pub(crate) async fn create_test_repository(name: &str) -> Arc<dyn BookRepository> {
    use crate::books::repository::json_book_repository::JsonBookRepository;
    let dir = tempfile::Builder::new().prefix(name).tempdir().expect("should create temp dir");
    let repo = JsonBookRepository::load(dir.path().join("books.json")).await.expect("should load test repository");
    Arc::new(test_support::TempBookRepository { repo, _dir: dir })
}

#[cfg(test)]
mod test_support {
    use async_trait::async_trait;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::core::library::BookstoreResult;
    use crate::core::repository::Repository;

    // repo is declared first so it drops before its directory
    pub(crate) struct TempBookRepository {
        pub(crate) repo: JsonBookRepository,
        pub(crate) _dir: TempDir,
    }

    #[async_trait]
    impl Repository<BookEntity> for TempBookRepository {
        async fn create(&self, entity: &BookEntity) -> BookstoreResult<String> {
            self.repo.create(entity).await
        }

        async fn get(&self, id: &str) -> BookstoreResult<BookEntity> {
            self.repo.get(id).await
        }

        async fn list(&self) -> BookstoreResult<Vec<BookEntity>> {
            self.repo.list().await
        }
    }

    #[async_trait]
    impl BookRepository for TempBookRepository {
        async fn find_by_index(&self, index: i64) -> BookstoreResult<BookEntity> {
            self.repo.find_by_index(index).await
        }

        async fn find_random(&self) -> BookstoreResult<BookEntity> {
            self.repo.find_random().await
        }
    }
}
