//! SQLite storage for journal entries.
//!
//! [`Database`] is a cheap path handle: the schema runs once at open, and
//! every request gets its own short-lived connection from
//! [`Database::connect`]. There is no pool and no shared connection;
//! concurrent writers are serialized by SQLite's file locking, softened by
//! a busy timeout. [`EntryRepo`] borrows the request's connection
//! explicitly rather than reaching into ambient state.

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};

use dreamlog_core::{Entry, EntryDraft, EntrySummary};

use crate::error::ServerResult;

/// Handle to the on-disk database.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open or create the database at the given path.
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Self { path };

        let conn = db.connect()?;
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch(INDEXES)?;

        Ok(db)
    }

    /// Open a fresh connection for exactly one request.
    ///
    /// Dropping the connection closes it, on every exit path including
    /// early `?` returns.
    pub fn connect(&self) -> ServerResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }
}

// ============================================================================
// Entry repository
// ============================================================================

/// Persistence facade over the single `entries` table.
///
/// Every statement is parameterized and commits immediately (autocommit);
/// there are no multi-statement transactions. Listing order is `date`
/// descending with ties left to SQLite's natural order.
pub struct EntryRepo<'conn> {
    conn: &'conn Connection,
}

impl<'conn> EntryRepo<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Window of the public listing: `limit` entries starting at `offset`,
    /// newest dates first.
    pub fn list_page(&self, offset: i64, limit: i64) -> ServerResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, body, date FROM entries ORDER BY date DESC LIMIT ?2 OFFSET ?1",
        )?;

        let entries = stmt
            .query_map(params![offset, limit], |row| {
                Ok(Entry {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    date: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// All entries as admin-listing rows, same ordering as the public list.
    pub fn list_summaries(&self) -> ServerResult<Vec<EntrySummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, date FROM entries ORDER BY date DESC")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(EntrySummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    date: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    pub fn get(&self, id: i64) -> ServerResult<Option<Entry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT id, title, body, date FROM entries WHERE id = ?",
                [id],
                |row| {
                    Ok(Entry {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        body: row.get(2)?,
                        date: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(entry)
    }

    /// Insert a new entry and return its storage-assigned id.
    pub fn insert(&self, draft: &EntryDraft) -> ServerResult<i64> {
        self.conn.execute(
            "INSERT INTO entries (title, body, date) VALUES (?, ?, ?)",
            params![draft.title, draft.body, draft.date],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Replace all mutable fields of an entry. Returns `false` when no row
    /// matched the id.
    pub fn update(&self, id: i64, draft: &EntryDraft) -> ServerResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE entries SET title = ?, body = ?, date = ? WHERE id = ?",
            params![draft.title, draft.body, draft.date, id],
        )?;

        Ok(rows_affected > 0)
    }

    /// Delete an entry. Deleting a missing id is not an error; the return
    /// value reports whether a row actually went away.
    pub fn delete(&self, id: i64) -> ServerResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", [id])?;

        Ok(rows_affected > 0)
    }

    pub fn count(&self) -> ServerResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;

        Ok(count)
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Journal entries. `date` is ISO-8601 TEXT so SQL ordering equals date
-- ordering.
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    date TEXT NOT NULL
);
"#;

const INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date DESC);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute_batch(INDEXES).unwrap();
        conn
    }

    fn draft(title: &str, day: u32) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            body: format!("body of {title}"),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        let d = EntryDraft {
            title: "falling".to_string(),
            body: "stairs\n\nthen water".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        };
        let id = repo.insert(&d).unwrap();

        let entry = repo.get(id).unwrap().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, d.title);
        assert_eq!(entry.body, d.body);
        assert_eq!(entry.date, d.date);
    }

    #[test]
    fn get_missing_is_none() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);
        assert!(repo.get(999).unwrap().is_none());
    }

    #[test]
    fn listing_is_date_descending_for_any_insertion_order() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        for day in [12, 3, 25, 8, 19] {
            repo.insert(&draft(&format!("day {day}"), day)).unwrap();
        }

        let entries = repo.list_page(0, 10).unwrap();
        let days: Vec<u32> = entries.iter().map(|e| e.date.day()).collect();
        assert_eq!(days, vec![25, 19, 12, 8, 3]);

        let summaries = repo.list_summaries().unwrap();
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].title, "day 25");
        assert_eq!(summaries[4].title, "day 3");
    }

    #[test]
    fn list_page_windows_by_offset_and_limit() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        for day in 1..=7 {
            repo.insert(&draft(&format!("day {day}"), day)).unwrap();
        }

        let first = repo.list_page(0, 3).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].title, "day 7");

        let second = repo.list_page(3, 3).unwrap();
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].title, "day 4");

        let last = repo.list_page(6, 3).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].title, "day 1");
    }

    #[test]
    fn update_replaces_all_mutable_fields() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        let id = repo.insert(&draft("before", 1)).unwrap();
        let changed = repo
            .update(
                id,
                &EntryDraft {
                    title: "after".to_string(),
                    body: "rewritten".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                },
            )
            .unwrap();
        assert!(changed);

        let entry = repo.get(id).unwrap().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, "after");
        assert_eq!(entry.body, "rewritten");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
    }

    #[test]
    fn update_missing_reports_false() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);
        assert!(!repo.update(42, &draft("ghost", 1)).unwrap());
    }

    #[test]
    fn delete_missing_is_not_an_error() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        repo.insert(&draft("keep me", 1)).unwrap();
        let before = repo.count().unwrap();

        assert!(!repo.delete(999).unwrap());
        assert_eq!(repo.count().unwrap(), before);
    }

    #[test]
    fn delete_removes_the_row() {
        let conn = test_conn();
        let repo = EntryRepo::new(&conn);

        let id = repo.insert(&draft("gone soon", 1)).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn open_creates_file_and_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dreams.db");

        let db = Database::open(&path).unwrap();
        assert!(path.exists());

        // Two connections see the same rows.
        let conn_a = db.connect().unwrap();
        EntryRepo::new(&conn_a).insert(&draft("shared", 1)).unwrap();
        drop(conn_a);

        let conn_b = db.connect().unwrap();
        assert_eq!(EntryRepo::new(&conn_b).count().unwrap(), 1);
    }
}
