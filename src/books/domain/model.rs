use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record owned by the book store; the store hands out copies
// so changes to a returned entity never reach the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub published_year: i64,
    pub isbn: String,
    pub description: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            published_year: 0,
            isbn: String::new(),
            description: String::new(),
        }
    }

    // case-insensitive substring match against a lower-cased needle
    pub(crate) fn matches(field: &str, needle: &str) -> bool {
        field.to_lowercase().contains(needle)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}
