use crate::domain::entities::book::Book;
use crate::domain::ports::catalog::Catalog;
use std::collections::HashMap;

/// Catalog held entirely in memory. The first metadata row seen for a title
/// is canonical; later duplicates are dropped.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    books: HashMap<String, Book>,
    titles: Vec<String>,
    duplicates: usize,
}

impl InMemoryCatalog {
    pub fn from_books(rows: impl IntoIterator<Item = Book>) -> Self {
        let mut catalog = Self::default();
        for book in rows {
            if catalog.books.contains_key(&book.title) {
                catalog.duplicates += 1;
                continue;
            }
            catalog.titles.push(book.title.clone());
            catalog.books.insert(book.title.clone(), book);
        }
        if catalog.duplicates > 0 {
            tracing::warn!(
                duplicates = catalog.duplicates,
                "catalog has duplicate metadata rows; keeping the first row per title"
            );
        }
        catalog
    }
}

impl Catalog for InMemoryCatalog {
    fn get(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    fn titles(&self) -> &[String] {
        &self.titles
    }

    fn len(&self) -> usize {
        self.titles.len()
    }

    fn duplicate_rows(&self) -> usize {
        self.duplicates
    }
}
