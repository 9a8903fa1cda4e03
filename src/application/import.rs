use crate::domain::entities::book::Book;
use crate::domain::error::DomainError;
use crate::domain::ports::artifact_store::{ArtifactStore, IndexedVector};
use crate::domain::values::metric::Metric;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub books: usize,
    pub vectors: usize,
    pub dimension: usize,
    pub metric: Metric,
    /// Indexed titles with no metadata row; they are never recommended.
    pub titles_without_metadata: usize,
}

/// Replaces the stored catalog and feature vectors with precomputed ones.
pub struct ImportUseCase {
    store: Arc<dyn ArtifactStore>,
}

impl ImportUseCase {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        books: Vec<Book>,
        vectors: Vec<IndexedVector>,
        metric: Metric,
    ) -> Result<ImportSummary, DomainError> {
        if books.is_empty() {
            return Err(DomainError::InvalidInput("No book metadata rows to import".into()));
        }
        let dimension = validate_vectors(&vectors)?;

        let known: HashSet<&str> = books.iter().map(|b| b.title.as_str()).collect();
        let titles_without_metadata = vectors
            .iter()
            .filter(|v| !known.contains(v.title.as_str()))
            .count();
        if titles_without_metadata > 0 {
            tracing::warn!(count = titles_without_metadata, "indexed titles without catalog metadata");
        }

        let (book_count, vector_count) = self.store.replace_all(&books, &vectors, metric)?;
        tracing::info!(books = book_count, vectors = vector_count, dimension, %metric, "imported artifacts");

        Ok(ImportSummary {
            books: book_count,
            vectors: vector_count,
            dimension,
            metric,
            titles_without_metadata,
        })
    }
}

fn validate_vectors(vectors: &[IndexedVector]) -> Result<usize, DomainError> {
    let Some(first) = vectors.first() else {
        return Err(DomainError::InvalidInput("No feature vectors to import".into()));
    };
    let dimension = first.vector.len();
    if dimension == 0 {
        return Err(DomainError::InvalidInput(format!("Vector for '{}' is empty", first.title)));
    }

    let mut titles = HashSet::new();
    for row in vectors {
        if row.vector.len() != dimension {
            return Err(DomainError::InvalidInput(format!(
                "Vector for '{}' has dimension {}, expected {dimension}",
                row.title,
                row.vector.len()
            )));
        }
        if !titles.insert(row.title.as_str()) {
            return Err(DomainError::InvalidInput(format!("Duplicate vector title '{}'", row.title)));
        }
    }
    Ok(dimension)
}
