pub mod sqlite;

use crate::app::Result;
use crate::domain::{Bookmark, Highlight, VersionHistoryEntry};

pub use sqlite::SqliteStore;

pub trait Store {
    // Bookmark operations
    fn add_bookmark(&self, verse: &str, reference: Option<&str>) -> Result<i64>;
    fn bookmarks(&self) -> Result<Vec<Bookmark>>;

    // Highlight operations
    fn add_highlight(&self, verse: &str, color: &str) -> Result<i64>;
    fn highlights(&self) -> Result<Vec<Highlight>>;

    // Version history operations
    fn record_version_use(&self, id: &str, name: &str, lang: &str)
        -> Result<VersionHistoryEntry>;
    fn version_history(&self) -> Result<Vec<VersionHistoryEntry>>;
    fn update_version_entry(
        &self,
        id: &str,
        favorite: Option<bool>,
        usage_count: Option<i64>,
    ) -> Result<Option<VersionHistoryEntry>>;
    fn remove_version_entry(&self, id: &str) -> Result<()>;
}
