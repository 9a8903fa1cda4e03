use crate::domain::entities::book::Book;

/// Read-only title -> metadata lookup, loaded once per process.
pub trait Catalog: Send + Sync {
    fn get(&self, title: &str) -> Option<&Book>;
    /// Distinct titles in catalog order.
    fn titles(&self) -> &[String];
    fn len(&self) -> usize;
    /// Metadata rows dropped because their title was already present.
    fn duplicate_rows(&self) -> usize;

    fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
