use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::app::{Result, SelahError};
use crate::domain::{ChapterContent, Verse};
use crate::provider::{verse_number, ChapterRequest, ChapterSource};

/// bible-api.com. Serves exactly one English translation (KJV), addressed
/// by book name and chapter; the resolver only consults it for
/// English-prefixed version ids.
pub struct BibleApiSource {
    client: Client,
    base_url: String,
}

impl BibleApiSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chapter_url(&self, req: &ChapterRequest<'_>) -> String {
        format!("{}/{}+{}", self.base_url, req.book, req.chapter)
    }

    fn parse(body: &[u8]) -> Result<ChapterContent> {
        let data: BibleApiChapter =
            serde_json::from_slice(body).map_err(|e| SelahError::UpstreamShape(e.to_string()))?;
        let verses = data
            .verses
            .into_iter()
            .map(|v| Verse {
                verse: v.verse,
                text: v.text.trim().to_string(),
            })
            .collect();
        Ok(ChapterContent {
            verses,
            source: "bible-api",
        })
    }
}

#[derive(Deserialize)]
struct BibleApiChapter {
    verses: Vec<BibleApiVerse>,
}

#[derive(Deserialize)]
struct BibleApiVerse {
    #[serde(deserialize_with = "verse_number")]
    verse: u32,
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ChapterSource for BibleApiSource {
    fn name(&self) -> &'static str {
        "bible-api"
    }

    async fn fetch(&self, req: &ChapterRequest<'_>) -> Result<ChapterContent> {
        let url = self.chapter_url(req);
        debug!(%url, "fetching chapter from bible-api");
        let response = self.client.get(&url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;
        Self::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_verse_text() {
        let body = r#"{
            "reference": "John 3",
            "verses": [
                {"book_id": "JHN", "chapter": 3, "verse": 16, "text": "For God so loved the world\n"}
            ],
            "translation_id": "kjv"
        }"#;
        let content = BibleApiSource::parse(body.as_bytes()).unwrap();
        assert_eq!(content.source, "bible-api");
        assert_eq!(content.verses[0].verse, 16);
        assert_eq!(content.verses[0].text, "For God so loved the world");
    }

    #[test]
    fn test_parse_rejects_error_body() {
        let body = r#"{"error": "not found"}"#;
        assert!(BibleApiSource::parse(body.as_bytes()).is_err());
    }

    #[test]
    fn test_chapter_url() {
        let source = BibleApiSource::new(Client::new(), "https://bible-api.example.com");
        let req = ChapterRequest {
            api_id: "KJV",
            book: "john",
            book_number: None,
            chapter: 3,
        };
        assert_eq!(
            source.chapter_url(&req),
            "https://bible-api.example.com/john+3"
        );
    }
}
