use crate::domain::{Book, BookId};
use crate::ports::{Result, book_catalog::BookCatalog as BookCatalogTrait};
use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;

/// In-memory catalog
///
/// Listing order is insertion order. The watch list keeps the order in which
/// "notify me" was pressed.
pub struct BookCatalog {
    books: Mutex<Vec<Book>>,
    watched: Mutex<Vec<BookId>>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
            watched: Mutex::new(Vec::new()),
        }
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn list_books(&self) -> Result<Vec<Book>> {
        Ok(lock(&self.books)?.clone())
    }

    async fn get_book(&self, book_id: BookId) -> Result<Option<Book>> {
        Ok(lock(&self.books)?.iter().find(|b| b.id == book_id).cloned())
    }

    async fn add_book(&self, book: Book) -> Result<()> {
        lock(&self.books)?.push(book);
        Ok(())
    }

    async fn watch_availability(&self, book_id: BookId) -> Result<bool> {
        let mut watched = lock(&self.watched)?;
        if watched.contains(&book_id) {
            return Ok(false);
        }
        watched.push(book_id);
        Ok(true)
    }

    async fn watched_books(&self) -> Result<Vec<BookId>> {
        Ok(lock(&self.watched)?.clone())
    }
}
