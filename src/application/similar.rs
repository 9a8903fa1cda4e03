use crate::domain::entities::book::Recommendation;
use crate::domain::error::DomainError;
use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::similarity_index::SimilarityIndex;
use std::sync::Arc;

pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Nearest-neighbor lookup from one title to its closest catalog books.
pub struct SimilarBooksUseCase {
    catalog: Arc<dyn Catalog>,
    index: Arc<dyn SimilarityIndex>,
}

impl SimilarBooksUseCase {
    pub fn new(catalog: Arc<dyn Catalog>, index: Arc<dyn SimilarityIndex>) -> Self {
        Self { catalog, index }
    }

    /// Whether `title` can be used as a similarity query.
    pub fn knows(&self, title: &str) -> bool {
        self.index.position(title).is_some()
    }

    /// Up to `count` books closest to `title`, closest first. Unknown titles
    /// yield an empty list.
    pub fn execute(&self, title: &str, count: usize) -> Result<Vec<Recommendation>, DomainError> {
        let Some(position) = self.index.position(title) else {
            tracing::debug!(title, "title not in similarity index");
            return Ok(vec![]);
        };
        let Some(vector) = self.index.vector_at(position) else {
            return Ok(vec![]);
        };

        // one extra slot for the query title itself
        let neighbors = self.index.query(vector, count.saturating_add(1))?;

        let mut recommendations = Vec::with_capacity(neighbors.len());
        for (neighbor, _distance) in neighbors.into_iter().filter(|(p, _)| *p != position).take(count) {
            let Some(neighbor_title) = self.index.title_at(neighbor) else {
                continue;
            };
            match self.catalog.get(neighbor_title) {
                Some(book) => recommendations.push(Recommendation::from(book.clone())),
                None => tracing::warn!(title = neighbor_title, "indexed title missing from catalog, skipping"),
            }
        }
        Ok(recommendations)
    }
}
