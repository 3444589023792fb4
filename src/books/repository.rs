pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // blank author returns no books
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;

    // blank title returns no books
    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;
}
