use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

use crate::app::{Result, SelahError};
use crate::domain::{Bookmark, Highlight, VersionHistoryEntry};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| SelahError::Other(format!("migration failed: {e}")))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| SelahError::Other(format!("store lock poisoned: {e}")))
    }

    fn parse_datetime(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
            .unwrap_or_else(Utc::now)
    }

    fn history_row(row: &Row<'_>) -> rusqlite::Result<VersionHistoryEntry> {
        Ok(VersionHistoryEntry {
            id: row.get(0)?,
            name: row.get(1)?,
            lang: row.get(2)?,
            last_used: row
                .get::<_, String>(3)
                .map(|s| Self::parse_datetime(&s))?,
            usage_count: row.get(4)?,
            favorite: row.get(5)?,
        })
    }
}

impl Store for SqliteStore {
    fn add_bookmark(&self, verse: &str, reference: Option<&str>) -> Result<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO bookmarks (verse, reference, created_at) VALUES (?1, ?2, ?3)",
            params![verse, reference, Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, verse, reference, created_at FROM bookmarks ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Bookmark {
                id: row.get(0)?,
                verse: row.get(1)?,
                reference: row.get(2)?,
                created_at: row
                    .get::<_, String>(3)
                    .map(|s| Self::parse_datetime(&s))?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    fn add_highlight(&self, verse: &str, color: &str) -> Result<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO highlights (verse, color, created_at) VALUES (?1, ?2, ?3)",
            params![verse, color, Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn highlights(&self) -> Result<Vec<Highlight>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, verse, color, created_at FROM highlights ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Highlight {
                id: row.get(0)?,
                verse: row.get(1)?,
                color: row.get(2)?,
                created_at: row
                    .get::<_, String>(3)
                    .map(|s| Self::parse_datetime(&s))?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    fn record_version_use(
        &self,
        id: &str,
        name: &str,
        lang: &str,
    ) -> Result<VersionHistoryEntry> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO version_history (version_id, name, lang, last_used, usage_count, favorite)
             VALUES (?1, ?2, ?3, ?4, 1, 0)
             ON CONFLICT(version_id) DO UPDATE SET
                 name = excluded.name,
                 lang = excluded.lang,
                 last_used = excluded.last_used,
                 usage_count = usage_count + 1",
            params![id, name, lang, Utc::now().to_rfc3339()],
        )?;
        conn.query_row(
            "SELECT version_id, name, lang, last_used, usage_count, favorite
             FROM version_history WHERE version_id = ?1",
            params![id],
            Self::history_row,
        )
        .map_err(Into::into)
    }

    fn version_history(&self) -> Result<Vec<VersionHistoryEntry>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT version_id, name, lang, last_used, usage_count, favorite
             FROM version_history ORDER BY last_used DESC",
        )?;
        let rows = stmt.query_map([], Self::history_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    fn update_version_entry(
        &self,
        id: &str,
        favorite: Option<bool>,
        usage_count: Option<i64>,
    ) -> Result<Option<VersionHistoryEntry>> {
        let conn = self.lock()?;
        let updated = conn.execute(
            "UPDATE version_history SET
                 favorite = COALESCE(?2, favorite),
                 usage_count = COALESCE(?3, usage_count),
                 last_used = ?4
             WHERE version_id = ?1",
            params![id, favorite, usage_count, Utc::now().to_rfc3339()],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        conn.query_row(
            "SELECT version_id, name, lang, last_used, usage_count, favorite
             FROM version_history WHERE version_id = ?1",
            params![id],
            Self::history_row,
        )
        .optional()
        .map_err(Into::into)
    }

    fn remove_version_entry(&self, id: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "DELETE FROM version_history WHERE version_id = ?1",
            params![id],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    #[test]
    fn test_bookmarks_roundtrip() {
        let store = store();
        let id = store.add_bookmark("Juan 3:16", Some("Juan 3:16 RVR1960")).unwrap();
        assert!(id > 0);

        let bookmarks = store.bookmarks().unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].verse, "Juan 3:16");
        assert_eq!(bookmarks[0].reference.as_deref(), Some("Juan 3:16 RVR1960"));
    }

    #[test]
    fn test_bookmark_ids_are_distinct() {
        let store = store();
        let a = store.add_bookmark("Salmos 23:1", None).unwrap();
        let b = store.add_bookmark("Salmos 23:2", None).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.bookmarks().unwrap().len(), 2);
    }

    #[test]
    fn test_highlights_roundtrip() {
        let store = store();
        store.add_highlight("Romanos 8:28", "yellow").unwrap();
        let highlights = store.highlights().unwrap();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].color, "yellow");
    }

    #[test]
    fn test_version_use_upserts() {
        let store = store();
        let first = store
            .record_version_use("en-kjv", "King James Version", "en")
            .unwrap();
        assert_eq!(first.usage_count, 1);
        assert!(!first.favorite);

        let second = store
            .record_version_use("en-kjv", "King James Version", "en")
            .unwrap();
        assert_eq!(second.usage_count, 2);
        assert_eq!(store.version_history().unwrap().len(), 1);
    }

    #[test]
    fn test_version_update_and_remove() {
        let store = store();
        store
            .record_version_use("es-rvr1960", "Reina-Valera 1960", "es")
            .unwrap();

        let updated = store
            .update_version_entry("es-rvr1960", Some(true), None)
            .unwrap()
            .unwrap();
        assert!(updated.favorite);
        assert_eq!(updated.usage_count, 1);

        assert!(store
            .update_version_entry("pt-acf", Some(true), None)
            .unwrap()
            .is_none());

        store.remove_version_entry("es-rvr1960").unwrap();
        assert!(store.version_history().unwrap().is_empty());
        // removing a missing entry is a no-op
        store.remove_version_entry("es-rvr1960").unwrap();
    }

    #[test]
    fn test_history_ordered_by_recency() {
        let store = store();
        store.record_version_use("en-kjv", "KJV", "en").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.record_version_use("es-rvr1960", "RVR1960", "es").unwrap();

        let history = store.version_history().unwrap();
        assert_eq!(history[0].id, "es-rvr1960");
        assert_eq!(history[1].id, "en-kjv");
    }

    #[test]
    fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selah.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store.add_bookmark("Genesis 1:1", None).unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        assert_eq!(store.bookmarks().unwrap().len(), 1);
    }
}
