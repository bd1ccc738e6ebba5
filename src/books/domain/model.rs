use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Genre;

// BookEntity is the persisted form of a book, one element of the books file or one row of the books table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub name: String,
    pub genre: Genre,
    pub price: f64,
}

impl BookEntity {
    pub fn new(name: &str, genre: Genre, price: f64) -> Self {
        Self {
            book_id: new_book_id(),
            name: name.to_string(),
            genre,
            price,
        }
    }
}

// hex form of a v4 uuid, e.g. 1f0c5b0e8f2c4c1d9a7e3b6d2c4f8a90
pub fn new_book_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{new_book_id, BookEntity};
    use crate::core::domain::Identifiable;
    use crate::core::library::Genre;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", Genre::Fiction, 9.99);
        assert_eq!("Dune", book.name.as_str());
        assert_eq!(Genre::Fiction, book.genre);
        assert_eq!(32, book.id().len());
    }

    #[tokio::test]
    async fn test_should_generate_unique_ids() {
        let a = new_book_id();
        let b = new_book_id();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_should_read_books_file_shape() {
        let json = r#"{"name": "Sapiens", "genre": "non-fiction", "price": 12.5, "book_id": "abc"}"#;
        let book: BookEntity = serde_json::from_str(json).expect("should parse book");
        assert_eq!("abc", book.book_id.as_str());
        assert_eq!(Genre::NonFiction, book.genre);
        assert_eq!(12.5, book.price);
    }
}
