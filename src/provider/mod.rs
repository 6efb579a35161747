//! Upstream scripture providers.
//!
//! Each provider speaks its own URL scheme and JSON shape; the adapters
//! here parse those shapes into the one normalized [`ChapterContent`] the
//! rest of the crate works with, so upstream schema drift stays contained
//! in one file per provider.

pub mod bible_api;
pub mod bolls;
pub mod cdn;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::app::Result;
use crate::domain::ChapterContent;

pub use bible_api::BibleApiSource;
pub use bolls::BollsSource;
pub use cdn::CdnSource;

/// One chapter request, already normalized: the provider-facing version
/// identifier, the canonical book key, and (for numeric providers) the
/// canonical book number.
#[derive(Debug, Clone)]
pub struct ChapterRequest<'a> {
    pub api_id: &'a str,
    pub book: &'a str,
    pub book_number: Option<u8>,
    pub chapter: u32,
}

/// A single upstream scripture source.
///
/// Any upstream problem (non-2xx status, malformed body, empty chapter) is
/// an `Err`; callers treat that as "try the next source", never as fatal.
#[async_trait]
pub trait ChapterSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, req: &ChapterRequest<'_>) -> Result<ChapterContent>;
}

/// Providers are inconsistent about verse numbers: some emit integers,
/// some decimal strings. Accept both.
pub(crate) fn verse_number<'de, D>(de: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
    }

    match Raw::deserialize(de)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Strip markup tags and decode HTML entities from upstream verse text.
pub(crate) fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    html_escape::decode_html_entities(out.trim()).into_owned()
}
