use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::Genre;

// BookDto is the data transfer object of the bookstore API, `book_id` is optional on input
// and always replaced by the server when a book is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub name: String,
    pub genre: Genre,
    pub price: f64,
    #[serde(default)]
    pub book_id: Option<String>,
}

impl BookDto {
    pub fn new(name: &str, genre: Genre, price: f64) -> BookDto {
        BookDto {
            name: name.to_string(),
            genre,
            price,
            book_id: None,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            name: other.name.to_string(),
            genre: other.genre,
            price: other.price,
            book_id: Some(other.book_id.to_string()),
        }
    }
}

impl From<BookEntity> for BookDto {
    fn from(other: BookEntity) -> Self {
        Self {
            name: other.name,
            genre: other.genre,
            price: other.price,
            book_id: Some(other.book_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::library::Genre;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", Genre::Fiction, 9.99);
        assert_eq!("Dune", book.name.as_str());
        assert_eq!(None, book.book_id);
    }

    #[tokio::test]
    async fn test_should_accept_body_without_book_id() {
        let book: BookDto = serde_json::from_str(r#"{"name": "Dune", "genre": "fiction", "price": 9.99}"#)
            .expect("should parse book");
        assert_eq!(BookDto::new("Dune", Genre::Fiction, 9.99), book);
    }

    #[tokio::test]
    async fn test_should_reject_unknown_genre() {
        let res = serde_json::from_str::<BookDto>(r#"{"name": "Dune", "genre": "poetry", "price": 9.99}"#);
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let entity = BookEntity::new("Dune", Genre::Fiction, 9.99);
        let dto = BookDto::from(&entity);
        assert_eq!(Some(entity.book_id.clone()), dto.book_id);
        assert_eq!(entity.price, dto.price);
    }
}
