use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::values::metric::Metric;
use std::sync::Arc;

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogStats {
    pub books: usize,
    pub duplicate_metadata_rows: usize,
    pub indexed_titles: usize,
    pub dimension: usize,
    pub metric: Metric,
}

pub struct StatsUseCase {
    catalog: Arc<dyn Catalog>,
    index: Arc<dyn SimilarityIndex>,
}

impl StatsUseCase {
    pub fn new(catalog: Arc<dyn Catalog>, index: Arc<dyn SimilarityIndex>) -> Self {
        Self { catalog, index }
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            books: self.catalog.len(),
            duplicate_metadata_rows: self.catalog.duplicate_rows(),
            indexed_titles: self.index.len(),
            dimension: self.index.dimension(),
            metric: self.index.metric(),
        }
    }
}
