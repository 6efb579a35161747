use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::app::{Result, SelahError};
use crate::domain::{ChapterContent, Verse};
use crate::provider::{verse_number, ChapterRequest, ChapterSource};

/// CDN-hosted per-version JSON files, one file per chapter.
///
/// Widest version coverage of the three sources, so the resolver always
/// tries it first. The URL is fully deterministic from
/// (version, book, chapter); a missing combination is just a 404.
pub struct CdnSource {
    client: Client,
    base_url: String,
}

impl CdnSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chapter_url(&self, req: &ChapterRequest<'_>) -> String {
        format!(
            "{}/bibles/{}/books/{}/chapters/{}.json",
            self.base_url, req.api_id, req.book, req.chapter
        )
    }

    fn parse(body: &[u8]) -> Result<ChapterContent> {
        let data: CdnChapter =
            serde_json::from_slice(body).map_err(|e| SelahError::UpstreamShape(e.to_string()))?;
        let verses = data
            .verses
            .into_iter()
            .map(|v| Verse {
                verse: v.verse,
                text: v.text,
            })
            .collect();
        Ok(ChapterContent {
            verses,
            source: "wldeh-api",
        })
    }
}

#[derive(Deserialize)]
struct CdnChapter {
    verses: Vec<CdnVerse>,
}

#[derive(Deserialize)]
struct CdnVerse {
    #[serde(deserialize_with = "verse_number")]
    verse: u32,
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ChapterSource for CdnSource {
    fn name(&self) -> &'static str {
        "wldeh-api"
    }

    async fn fetch(&self, req: &ChapterRequest<'_>) -> Result<ChapterContent> {
        let url = self.chapter_url(req);
        debug!(%url, "fetching chapter from CDN");
        let response = self.client.get(&url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;
        Self::parse(&body)
    }
}
