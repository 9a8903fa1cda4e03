use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::interaction_log::InteractionLog;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const CSV_HEADERS: [&str; 4] = ["user_id", "timestamp", "action", "book_title"];

/// Interaction log kept as a CSV file with one event per row.
pub struct CsvInteractionLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvInteractionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode_row(event: &InteractionEvent, with_header: bool) -> Result<Vec<u8>, DomainError> {
        let mut wtr = csv::WriterBuilder::new().has_headers(with_header).from_writer(vec![]);
        wtr.serialize(event)
            .map_err(|e| DomainError::Persistence(format!("Failed to encode event: {e}")))?;
        wtr.into_inner()
            .map_err(|e| DomainError::Persistence(format!("Failed to encode event: {e}")))
    }
}

impl InteractionLog for CsvInteractionLog {
    fn append(&self, event: &InteractionEvent) -> Result<(), DomainError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::Persistence(format!("Cannot create {}: {e}", parent.display()))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| DomainError::Persistence(format!("Cannot open {}: {e}", self.path.display())))?;
        let is_new = file
            .metadata()
            .map_err(|e| DomainError::Persistence(e.to_string()))?
            .len()
            == 0;

        // one write per call so a row never lands half-written
        let row = Self::encode_row(event, is_new)?;
        file.write_all(&row)
            .and_then(|_| file.flush())
            .map_err(|e| DomainError::Persistence(format!("Failed to append to {}: {e}", self.path.display())))?;

        tracing::debug!(user = %event.user_id, action = %event.action, title = %event.book_title, "logged interaction");
        Ok(())
    }

    fn read_by_user(&self, user_id: &str) -> Result<Vec<InteractionEvent>, DomainError> {
        let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(r) => r,
            Err(e) => {
                if let csv::ErrorKind::Io(io) = e.kind() {
                    if io.kind() == ErrorKind::NotFound {
                        return Ok(vec![]);
                    }
                }
                return Err(DomainError::Persistence(format!(
                    "Cannot read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let headers = reader
            .headers()
            .map_err(|e| DomainError::Persistence(format!("Cannot read {}: {e}", self.path.display())))?
            .clone();
        let user_col = headers.iter().position(|h| h == "user_id").unwrap_or(0);

        // only the requested user's rows are decoded; other users' rows can't fail the read
        let mut events = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| DomainError::Parse(format!("Malformed log row: {e}")))?;
            if record.get(user_col) != Some(user_id) {
                continue;
            }
            let event: InteractionEvent = record
                .deserialize(Some(&headers))
                .map_err(|e| DomainError::Parse(format!("Malformed log row: {e}")))?;
            events.push(event);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::interaction_event::TIMESTAMP_FORMAT;
    use crate::domain::values::action::Action;

    #[test]
    fn first_append_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvInteractionLog::new(dir.path().join("users").join("log.csv"));
        log.append(&InteractionEvent::new("alice", Action::Liked, "Dune")).unwrap();
        log.append(&InteractionEvent::new("alice", Action::Searched, "Emma, Revisited")).unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "user_id,timestamp,action,book_title");
        assert!(lines[1].starts_with("alice,"));
        assert!(lines[1].ends_with(",liked,Dune"));
        assert!(lines[2].ends_with(",searched,\"Emma, Revisited\""));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvInteractionLog::new(dir.path().join("absent.csv"));
        assert!(log.read_by_user("alice").unwrap().is_empty());
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "user_id,timestamp,action,book_title\nalice,yesterday,liked,Dune\n").unwrap();
        let log = CsvInteractionLog::new(path);
        assert!(matches!(log.read_by_user("alice"), Err(DomainError::Parse(_))));
    }

    #[test]
    fn other_users_bad_rows_do_not_block_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(
            &path,
            "user_id,timestamp,action,book_title\n\
             alice,2024-01-01 09:00:00,liked,Dune\n\
             mallory,2024-01-01 09:30:00,viewed,Emma\n\
             eve,not-a-time,liked,Emma\n\
             bob,2024-01-01T10:00:00,searched,Emma\n",
        )
        .unwrap();
        let log = CsvInteractionLog::new(path);

        let alice = log.read_by_user("alice").unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].book_title, "Dune");

        let bob = log.read_by_user("bob").unwrap();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].action, Action::Searched);
        assert_eq!(bob[0].timestamp.format(TIMESTAMP_FORMAT).to_string(), "2024-01-01 10:00:00");

        assert!(matches!(log.read_by_user("mallory"), Err(DomainError::Parse(_))));
    }
}
