use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS books (
            row_id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS book_vectors (
            position INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            vector BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS index_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_books_title ON books(title);
        "
    ).map_err(|e| format!("Migration failed: {e}"))
}
