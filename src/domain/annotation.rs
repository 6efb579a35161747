use chrono::{DateTime, Utc};
use serde::Serialize;

/// A saved verse reference, device-scoped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub verse: String,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A colored verse marker, device-scoped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: i64,
    pub verse: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Record of a translation the device has opened, with usage bookkeeping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistoryEntry {
    pub id: String,
    pub name: String,
    pub lang: String,
    pub last_used: DateTime<Utc>,
    pub usage_count: i64,
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadingPlan {
    pub id: u8,
    pub name: &'static str,
    pub duration: u16,
    pub description: &'static str,
}
