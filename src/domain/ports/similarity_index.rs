use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;

/// Precomputed nearest-neighbor structure over book feature vectors.
///
/// Positions are stable for the lifetime of the index.
pub trait SimilarityIndex: Send + Sync {
    fn position(&self, title: &str) -> Option<usize>;
    fn title_at(&self, position: usize) -> Option<&str>;
    fn vector_at(&self, position: usize) -> Option<&[f32]>;

    /// The `k` closest positions to `vector` as `(position, distance)`,
    /// ascending by distance.
    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<(usize, f64)>, DomainError>;

    fn len(&self) -> usize;
    fn dimension(&self) -> usize;
    fn metric(&self) -> Metric;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
