use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookstoreError, BookstoreResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps all books in memory and mirrors them to a flat JSON array file.
// Every create rewrites the whole file while holding the write lock, so concurrent adds are
// applied one at a time and none is lost.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
    books: RwLock<Vec<BookEntity>>,
}

impl JsonBookRepository {
    // loads the books file, a missing file is an empty store
    pub async fn load(path: impl AsRef<Path>) -> BookstoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let books = read_books_file(&path).await?.unwrap_or_default();
        tracing::info!(path = %path.display(), books = books.len(), "loaded books file");
        Ok(Self {
            path,
            books: RwLock::new(books),
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

// Returns None when the file does not exist.
pub async fn read_books_file(path: &Path) -> BookstoreResult<Option<Vec<BookEntity>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let books = serde_json::from_slice::<Vec<BookEntity>>(&bytes)?;
            Ok(Some(books))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(BookstoreError::from(err)),
    }
}

// Writes into a sibling temp file and renames it over the target, a crash never leaves a partial file.
pub async fn write_books_file(path: &Path, books: &[BookEntity]) -> BookstoreResult<()> {
    let json = serde_json::to_vec_pretty(books)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookstoreResult<String> {
        let mut books = self.books.write().await;
        books.push(entity.clone());
        if let Err(err) = write_books_file(&self.path, &books).await {
            books.pop();
            tracing::error!(path = %self.path.display(), error = %err, "failed to write books file");
            return Err(err);
        }
        tracing::debug!(book_id = %entity.book_id, books = books.len(), "book added");
        Ok(entity.book_id.to_string())
    }

    async fn get(&self, id: &str) -> BookstoreResult<BookEntity> {
        let books = self.books.read().await;
        books.iter()
            .find(|b| b.book_id == id)
            .cloned()
            .ok_or_else(|| BookstoreError::not_found(format!("Book ID {} not found in database.", id).as_str()))
    }

    async fn list(&self) -> BookstoreResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn find_by_index(&self, index: i64) -> BookstoreResult<BookEntity> {
        let books = self.books.read().await;
        usize::try_from(index).ok()
            .and_then(|i| books.get(i))
            .cloned()
            .ok_or_else(|| BookstoreError::not_found(format!("Book index {} out of range.", index).as_str()))
    }

    async fn find_random(&self) -> BookstoreResult<BookEntity> {
        let books = self.books.read().await;
        books.choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| BookstoreError::empty_collection("No books available."))
    }
}
