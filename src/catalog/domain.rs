pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
}
