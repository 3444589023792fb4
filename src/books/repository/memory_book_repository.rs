use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
struct Books {
    records: HashMap<String, BookEntity>,
    // last assigned identifier, never reused after a delete
    last_id: u64,
}

/// Process-local book store. A single lock guards the records and the id
/// counter so that overlapping requests cannot race on either.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Books>,
}

impl InMemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn search<F>(&self, query: &str, field: F) -> LibraryResult<Vec<BookEntity>>
        where F: Fn(&BookEntity) -> &str {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }
        let needle = query.to_lowercase();
        let books = self.books.read()?;
        Ok(books.records.values()
            .filter(|b| BookEntity::matches(field(*b), needle.as_str()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Repository<BookEntity> for InMemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write()?;
        books.last_id += 1;
        let mut stored = entity.clone();
        stored.book_id = books.last_id.to_string();
        books.records.insert(stored.book_id.clone(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write()?;
        match books.records.get_mut(id) {
            Some(existing) => {
                let mut stored = entity.clone();
                stored.book_id = id.to_string();
                *existing = stored.clone();
                Ok(stored)
            }
            None => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read()?;
        books.records.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        books.records.remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read()?;
        Ok(books.records.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        self.search(author, |b| b.author())
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        self.search(title, |b| b.title())
    }
}
