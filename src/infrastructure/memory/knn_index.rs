use crate::domain::error::DomainError;
use crate::domain::ports::artifact_store::IndexedVector;
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::values::metric::Metric;
use std::collections::HashMap;

/// Exact nearest-neighbor index: every query scans all stored vectors.
#[derive(Debug)]
pub struct BruteForceIndex {
    metric: Metric,
    dimension: usize,
    titles: Vec<String>,
    vectors: Vec<Vec<f32>>,
    positions: HashMap<String, usize>,
}

impl BruteForceIndex {
    /// Builds the index from vectors in position order. All vectors must share one
    /// non-zero dimension and titles must be unique.
    pub fn new(metric: Metric, rows: Vec<IndexedVector>) -> Result<Self, DomainError> {
        let dimension = rows.first().map(|r| r.vector.len()).unwrap_or(0);
        let mut titles = Vec::with_capacity(rows.len());
        let mut vectors = Vec::with_capacity(rows.len());
        let mut positions = HashMap::with_capacity(rows.len());

        for (position, row) in rows.into_iter().enumerate() {
            if row.vector.is_empty() || row.vector.len() != dimension {
                return Err(DomainError::Artifact(format!(
                    "Vector for '{}' has dimension {}, expected {}",
                    row.title,
                    row.vector.len(),
                    dimension
                )));
            }
            if positions.insert(row.title.clone(), position).is_some() {
                return Err(DomainError::Artifact(format!(
                    "Title '{}' appears twice in the similarity index",
                    row.title
                )));
            }
            titles.push(row.title);
            vectors.push(row.vector);
        }

        Ok(Self {
            metric,
            dimension,
            titles,
            vectors,
            positions,
        })
    }
}

impl SimilarityIndex for BruteForceIndex {
    fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    fn title_at(&self, position: usize) -> Option<&str> {
        self.titles.get(position).map(String::as_str)
    }

    fn vector_at(&self, position: usize) -> Option<&[f32]> {
        self.vectors.get(position).map(Vec::as_slice)
    }

    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<(usize, f64)>, DomainError> {
        if vector.len() != self.dimension {
            return Err(DomainError::InvalidInput(format!(
                "Query vector has dimension {}, index expects {}",
                vector.len(),
                self.dimension
            )));
        }

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, stored)| (position, self.metric.distance(vector, stored)))
            .collect();

        // ties keep position order
        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }

    fn len(&self) -> usize {
        self.titles.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn metric(&self) -> Metric {
        self.metric
    }
}
