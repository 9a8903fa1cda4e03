//! Shared test helpers.
#![allow(dead_code)]

use bookrec::domain::entities::book::Book;
use bookrec::domain::error::DomainError;
use bookrec::domain::ports::artifact_store::IndexedVector;
use bookrec::domain::ports::similarity_index::SimilarityIndex;
use bookrec::domain::values::metric::Metric;
use bookrec::infrastructure::flatfile::interaction_log::CsvInteractionLog;
use bookrec::infrastructure::memory::catalog::InMemoryCatalog;
use bookrec::infrastructure::memory::knn_index::BruteForceIndex;
use bookrec::infrastructure::random::shufflers::KeepOrder;
use bookrec::BookRec;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Titles A..E on a line: A=0, B=1, C=2, D=3, E=10.
pub const LINE: [(&str, f32); 5] = [("A", 0.0), ("B", 1.0), ("C", 2.0), ("D", 3.0), ("E", 10.0)];

pub fn books(titles: &[&str]) -> Vec<Book> {
    titles
        .iter()
        .map(|t| Book::new(*t, format!("Author of {t}"), format!("http://img/{t}.jpg")))
        .collect()
}

pub fn line_vectors() -> Vec<IndexedVector> {
    LINE.iter()
        .map(|(t, x)| IndexedVector {
            title: t.to_string(),
            vector: vec![*x],
        })
        .collect()
}

pub fn line_index() -> BruteForceIndex {
    BruteForceIndex::new(Metric::Euclidean, line_vectors()).unwrap()
}

/// Wraps an index and counts how many similarity queries reach it.
pub struct CountingIndex {
    inner: BruteForceIndex,
    queries: AtomicUsize,
}

impl CountingIndex {
    pub fn new(inner: BruteForceIndex) -> Self {
        Self {
            inner,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl SimilarityIndex for CountingIndex {
    fn position(&self, title: &str) -> Option<usize> {
        self.inner.position(title)
    }

    fn title_at(&self, position: usize) -> Option<&str> {
        self.inner.title_at(position)
    }

    fn vector_at(&self, position: usize) -> Option<&[f32]> {
        self.inner.vector_at(position)
    }

    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<(usize, f64)>, DomainError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(vector, k)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn metric(&self) -> Metric {
        self.inner.metric()
    }
}

/// Engine over the A..E line with a CSV log under `dir` and no shuffling.
pub fn setup(dir: &Path) -> (BookRec, Arc<CountingIndex>) {
    setup_with_catalog(dir, &["A", "B", "C", "D", "E"])
}

pub fn setup_with_catalog(dir: &Path, titles: &[&str]) -> (BookRec, Arc<CountingIndex>) {
    let index = Arc::new(CountingIndex::new(line_index()));
    let br = BookRec::with_parts(
        Arc::new(InMemoryCatalog::from_books(books(titles))),
        index.clone(),
        Arc::new(CsvInteractionLog::new(dir.join("user_logs.csv"))),
        Arc::new(KeepOrder),
    );
    (br, index)
}

pub fn titles_of(recs: &[bookrec::domain::entities::book::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.title.as_str()).collect()
}
