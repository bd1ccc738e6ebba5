pub mod books;
pub mod catalog;
pub mod core;
pub mod credentials;
pub mod utils;
