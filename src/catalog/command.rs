pub mod add_book_cmd;
pub mod get_book_by_index_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod random_book_cmd;
