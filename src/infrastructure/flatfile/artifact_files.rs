use crate::domain::entities::book::Book;
use crate::domain::error::DomainError;
use crate::domain::ports::artifact_store::IndexedVector;
use std::path::Path;

/// Reads catalog metadata from a CSV with a `title,author,image_url` header.
pub fn read_books(path: &Path) -> Result<Vec<Book>, DomainError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DomainError::NotFound(format!("{}: {e}", path.display())))?;
    reader
        .deserialize::<Book>()
        .enumerate()
        .map(|(i, row)| {
            row.map_err(|e| DomainError::Parse(format!("{} row {}: {e}", path.display(), i + 1)))
        })
        .collect()
}

/// Reads feature vectors from a headerless CSV of `title,f1,f2,...` rows.
/// Row order becomes index position order.
pub fn read_vectors(path: &Path) -> Result<Vec<IndexedVector>, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DomainError::NotFound(format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DomainError::Parse(format!("{} row {}: {e}", path.display(), i + 1)))?;
        let title = record
            .get(0)
            .ok_or_else(|| DomainError::Parse(format!("{} row {}: missing title", path.display(), i + 1)))?
            .to_string();
        let vector = record
            .iter()
            .skip(1)
            .map(|field| {
                field.trim().parse::<f32>().map_err(|e| {
                    DomainError::Parse(format!("{} row {}: bad component '{field}': {e}", path.display(), i + 1))
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;
        rows.push(IndexedVector { title, vector });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_titles_and_components() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.csv");
        std::fs::write(&path, "\"Dune, Book One\",1.0,0.5\nEmma,0, 2\n").unwrap();

        let rows = read_vectors(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Dune, Book One");
        assert_eq!(rows[0].vector, vec![1.0, 0.5]);
        assert_eq!(rows[1].vector, vec![0.0, 2.0]);
    }

    #[test]
    fn non_numeric_component_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.csv");
        std::fs::write(&path, "Dune,1.0,abc\n").unwrap();
        assert!(matches!(read_vectors(&path), Err(DomainError::Parse(_))));
    }
}
