use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service and the json shape on the wire.
// Missing fields default to empty so that required-field checks happen in the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub published_year: i64,
    pub isbn: String,
    pub description: String,
}

// an explicit `null` year reads as unset
fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where D: Deserializer<'de> {
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl BookDto {
    pub fn new(title: &str, author: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            ..BookDto::default()
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            isbn: other.isbn.to_string(),
            description: other.description.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            isbn: other.isbn.to_string(),
            description: other.description.to_string(),
        }
    }
}
