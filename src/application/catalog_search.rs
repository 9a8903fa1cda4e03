use crate::domain::ports::catalog::Catalog;
use std::sync::Arc;

pub struct CatalogSearchUseCase {
    catalog: Arc<dyn Catalog>,
}

impl CatalogSearchUseCase {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Catalog titles containing `text`, ignoring case, in catalog order.
    pub fn search(&self, text: &str, limit: Option<usize>) -> Vec<String> {
        let needle = text.to_lowercase();
        if needle.is_empty() {
            return vec![];
        }
        self.catalog
            .titles()
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
