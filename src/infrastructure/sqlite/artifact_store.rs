use crate::domain::entities::book::Book;
use crate::domain::error::DomainError;
use crate::domain::ports::artifact_store::{ArtifactStore, IndexedVector};
use crate::domain::values::metric::Metric;
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

pub struct SqliteArtifactStore {
    conn: Mutex<Connection>,
}

impl SqliteArtifactStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Mutex::new(conn) }
    }

    /// Opens an existing artifact database for serving. A missing file is fatal.
    pub fn open_read_only(path: &str) -> Result<Self, DomainError> {
        if !Path::new(path).exists() {
            return Err(DomainError::Artifact(format!("Artifact database not found at {path}")));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| DomainError::Artifact(format!("Cannot open {path}: {e}")))?;
        Ok(Self::new(conn))
    }

    /// Opens (creating if needed) an artifact database for import.
    pub fn open_writable(path: &str) -> Result<Self, DomainError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DomainError::Database(format!("Cannot create {}: {e}", parent.display())))?;
            }
        }
        let conn = Connection::open(path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        run_migrations(&conn).map_err(DomainError::Database)?;
        Ok(Self::new(conn))
    }

    /// Fresh in-memory database with the schema applied.
    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn).map_err(DomainError::Database)?;
        Ok(Self::new(conn))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, DomainError> {
        self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))
    }
}

pub(crate) fn serialize_vector(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

pub(crate) fn deserialize_vector(bytes: &[u8]) -> Option<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect(),
    )
}

impl ArtifactStore for SqliteArtifactStore {
    fn load_books(&self) -> Result<Vec<Book>, DomainError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT title, author, image_url FROM books ORDER BY row_id")
            .map_err(|e| DomainError::Artifact(format!("Catalog unreadable: {e}")))?;
        let books = stmt
            .query_map([], |row| {
                Ok(Book {
                    title: row.get(0)?,
                    author: row.get(1)?,
                    image_url: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    fn load_vectors(&self) -> Result<Vec<IndexedVector>, DomainError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT title, vector FROM book_vectors ORDER BY position")
            .map_err(|e| DomainError::Artifact(format!("Similarity index unreadable: {e}")))?;
        let rows = stmt
            .query_map([], |row| {
                let title: String = row.get(0)?;
                let blob: Vec<u8> = row.get(1)?;
                Ok((title, blob))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(title, blob)| match deserialize_vector(&blob) {
                Some(vector) => Ok(IndexedVector { title, vector }),
                None => Err(DomainError::Artifact(format!(
                    "Corrupt vector blob for '{title}' ({} bytes)",
                    blob.len()
                ))),
            })
            .collect()
    }

    fn metric(&self) -> Result<Metric, DomainError> {
        let conn = self.lock()?;
        let stored: Option<String> = conn
            .query_row("SELECT value FROM index_meta WHERE key = 'metric'", [], |r| r.get(0))
            .optional()
            .map_err(|e| DomainError::Artifact(format!("Index metadata unreadable: {e}")))?;
        match stored {
            Some(s) => s.parse().map_err(DomainError::Artifact),
            None => Ok(Metric::default()),
        }
    }

    fn replace_all(
        &self,
        books: &[Book],
        vectors: &[IndexedVector],
        metric: Metric,
    ) -> Result<(usize, usize), DomainError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        write_books(&tx, books)?;
        write_vectors(&tx, vectors, metric)?;
        tx.commit()?;
        Ok((books.len(), vectors.len()))
    }
}

fn write_books(conn: &Connection, books: &[Book]) -> Result<(), DomainError> {
    conn.execute("DELETE FROM books", [])?;
    let mut stmt = conn.prepare("INSERT INTO books (title, author, image_url) VALUES (?1, ?2, ?3)")?;
    for book in books {
        stmt.execute(params![book.title, book.author, book.image_url])?;
    }
    Ok(())
}

fn write_vectors(conn: &Connection, vectors: &[IndexedVector], metric: Metric) -> Result<(), DomainError> {
    conn.execute("DELETE FROM book_vectors", [])?;
    let mut stmt = conn.prepare("INSERT INTO book_vectors (position, title, vector) VALUES (?1, ?2, ?3)")?;
    for (position, row) in vectors.iter().enumerate() {
        stmt.execute(params![position as i64, row.title, serialize_vector(&row.vector)])
            .map_err(|e| DomainError::Database(format!("Failed to store vector for '{}': {e}", row.title)))?;
    }
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES ('metric', ?1)",
        params![metric.to_string()],
    )?;
    Ok(())
}
