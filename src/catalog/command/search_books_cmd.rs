use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) author: Option<String>,
    pub(crate) title: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn by_author(author: &str) -> Self {
        Self { author: Some(author.to_string()), title: None }
    }

    pub fn by_title(title: &str) -> Self {
        Self { author: None, title: Some(title.to_string()) }
    }

    // repeated query keys keep their first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut req = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "author" if req.author.is_none() => req.author = Some(value),
                "title" if req.title.is_none() => req.title = Some(value),
                _ => {}
            }
        }
        req
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    // author takes precedence when both parameters are non-empty
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let res = match (req.author.as_deref(), req.title.as_deref()) {
            (Some(author), _) if !author.is_empty() => {
                self.catalog_service.find_books_by_author(author).await
            }
            (_, Some(title)) if !title.is_empty() => {
                self.catalog_service.find_books_by_title(title).await
            }
            _ => return Err(CommandError::invalid_input("no search query")),
        };
        res.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
