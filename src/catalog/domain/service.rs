use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }

    fn require(&self, name: &str, value: &str) -> LibraryResult<()> {
        if value.trim().is_empty() {
            tracing::warn!(branch = %self.branch_id, field = name, "rejected blank input");
            return Err(LibraryError::invalid_input(
                format!("{} is required", name).as_str(), Some(name.to_string())));
        }
        Ok(())
    }

    fn validate(&self, book: &BookDto) -> LibraryResult<()> {
        self.require("title", book.title.as_str())?;
        self.require("author", book.author.as_str())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.get_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.require("id", id)?;
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.validate(book)?;
        let created = self.book_repository.create(&BookEntity::from(book)).await?;
        tracing::info!(branch = %self.branch_id, book_id = %created.id(), "added book");
        Ok(BookDto::from(&created))
    }

    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto> {
        self.require("id", id)?;
        self.validate(book)?;
        let updated = self.book_repository.update(id, &BookEntity::from(book)).await?;
        tracing::info!(branch = %self.branch_id, book_id = %id, "updated book");
        Ok(BookDto::from(&updated))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        self.require("id", id)?;
        let _ = self.book_repository.delete(id).await?;
        tracing::info!(branch = %self.branch_id, book_id = %id, "removed book");
        Ok(())
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        self.require("author", author)?;
        let res = self.book_repository.find_by_author(author).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.require("title", title)?;
        let res = self.book_repository.find_by_title(title).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}
