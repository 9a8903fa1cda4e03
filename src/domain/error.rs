use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}
