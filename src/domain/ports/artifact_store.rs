use crate::domain::entities::book::Book;
use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedVector {
    pub title: String,
    pub vector: Vec<f32>,
}

/// Durable home of the precomputed catalog and feature vectors.
pub trait ArtifactStore: Send + Sync {
    /// Metadata rows in insertion order; titles may repeat.
    fn load_books(&self) -> Result<Vec<Book>, DomainError>;
    /// Feature vectors ordered by index position.
    fn load_vectors(&self) -> Result<Vec<IndexedVector>, DomainError>;
    fn metric(&self) -> Result<Metric, DomainError>;

    /// Replaces the catalog, the vectors and the metric together: either all of them
    /// change or none do. Returns `(books, vectors)` written.
    fn replace_all(
        &self,
        books: &[Book],
        vectors: &[IndexedVector],
        metric: Metric,
    ) -> Result<(usize, usize), DomainError>;
}
