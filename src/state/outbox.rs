use rusqlite::{Connection, Result as SqlResult};
use std::path::{Path, PathBuf};
use tracing::info;

use super::contact::Inquiry;
use crate::error::{Result, SiteError};

/// The Outbox keeps every delivered inquiry in a local SQLite database.
/// Each row stores the inquiry as JSON next to the columns the studio
/// searches by.
pub struct Outbox {
    conn: Connection,
    db_path: Option<PathBuf>,
}

/// One stored inquiry
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredInquiry {
    pub id: i64,
    pub inquiry: Inquiry,
}

impl Outbox {
    /// Open (or create) the outbox at `db_path`.
    ///
    /// The default location is in the user's data directory:
    /// - Linux: ~/.local/share/maelstrom-frames/outbox.db
    /// - macOS: ~/Library/Application Support/maelstrom-frames/outbox.db
    /// - Windows: %APPDATA%\maelstrom-frames\outbox.db
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }

        let conn = Connection::open(db_path)?;
        let outbox = Outbox {
            conn,
            db_path: Some(db_path.to_path_buf()),
        };
        outbox.init_schema()?;

        info!("📁 Outbox ready at {}", db_path.display());
        Ok(outbox)
    }

    /// An outbox that lives only as long as this value
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let outbox = Outbox {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        outbox.init_schema()?;
        Ok(outbox)
    }

    /// Default database location
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(SiteError::NoDirectory("data"))?;
        path.push("maelstrom-frames");
        path.push("outbox.db");
        Ok(path)
    }

    /// Create the table and index if they don't exist
    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS inquiries (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                email           TEXT NOT NULL,
                event_type      TEXT NOT NULL,
                submitted_at    INTEGER NOT NULL,
                payload_json    TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_inquiries_submitted_at
             ON inquiries(submitted_at DESC)",
            [],
        )?;

        Ok(())
    }

    #[cfg(test)]
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Store an inquiry, returning its row id
    pub fn record(&self, inquiry: &Inquiry) -> Result<i64> {
        let payload = inquiry.to_json()?;
        let event_type = serde_json::to_value(inquiry.event_type)?;
        self.conn.execute(
            "INSERT INTO inquiries (email, event_type, submitted_at, payload_json)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                &inquiry.email,
                event_type.as_str().unwrap_or_default(),
                inquiry.submitted_at.timestamp(),
                &payload,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM inquiries", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Most recent inquiries first
    #[cfg(test)]
    pub fn recent(&self, limit: usize) -> Result<Vec<StoredInquiry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, payload_json FROM inquiries
             ORDER BY submitted_at DESC, id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map([limit as i64], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut inquiries = Vec::new();
        for row in rows {
            let (id, payload) = row?;
            inquiries.push(StoredInquiry {
                id,
                inquiry: Inquiry::from_json(&payload)?,
            });
        }
        Ok(inquiries)
    }
}

impl std::fmt::Debug for Outbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outbox")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact::EventType;
    use chrono::{TimeZone, Utc};

    fn inquiry(name: &str, secs: i64) -> Inquiry {
        Inquiry {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            event_type: EventType::Festival,
            event_date: None,
            message: "Three-day festival, need photo and video.".to_string(),
            submitted_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_record_and_read_back() {
        let outbox = Outbox::in_memory().unwrap();
        let first = outbox.record(&inquiry("Ana", 1_700_000_000)).unwrap();
        let second = outbox.record(&inquiry("Ben", 1_700_000_500)).unwrap();
        assert_ne!(first, second);
        assert_eq!(outbox.count().unwrap(), 2);

        let recent = outbox.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, second);
        assert_eq!(recent[0].inquiry, inquiry("Ben", 1_700_000_500));
        assert_eq!(recent[1].inquiry.name, "Ana");
    }

    #[test]
    fn test_recent_respects_limit() {
        let outbox = Outbox::in_memory().unwrap();
        for i in 0..5 {
            outbox.record(&inquiry("Guest", 1_700_000_000 + i)).unwrap();
        }
        assert_eq!(outbox.recent(3).unwrap().len(), 3);
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("outbox.db");
        let outbox = Outbox::open(&path).unwrap();
        assert_eq!(outbox.path(), Some(path.as_path()));
        outbox.record(&inquiry("Cleo", 1_700_000_000)).unwrap();
        drop(outbox);

        // Reopening sees the stored row
        assert_eq!(Outbox::open(&path).unwrap().count().unwrap(), 1);
    }
}
