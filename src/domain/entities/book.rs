use serde::{Deserialize, Serialize};

/// A catalog entry. `title` is the catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
        }
    }
}

/// Read-only projection of a [`Book`] handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

impl From<Book> for Recommendation {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            image_url: book.image_url,
        }
    }
}
