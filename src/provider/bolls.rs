use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::app::{Result, SelahError};
use crate::domain::{ChapterContent, Verse};
use crate::provider::{clean_text, verse_number, ChapterRequest, ChapterSource};

/// bolls.life. Addresses books by numeric id (1-66) and returns a bare
/// JSON array of verse objects, verse text with embedded markup. Verses
/// without text are dropped rather than served empty.
pub struct BollsSource {
    client: Client,
    base_url: String,
}

impl BollsSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chapter_url(&self, req: &ChapterRequest<'_>, book_number: u8) -> String {
        format!(
            "{}/get-text/{}/{}/{}/",
            self.base_url, req.api_id, book_number, req.chapter
        )
    }

    fn parse(body: &[u8]) -> Result<ChapterContent> {
        let data: Vec<BollsVerse> =
            serde_json::from_slice(body).map_err(|e| SelahError::UpstreamShape(e.to_string()))?;
        if data.is_empty() {
            return Err(SelahError::UpstreamShape("empty chapter".into()));
        }
        let verses = data
            .into_iter()
            .filter_map(|v| {
                let text = clean_text(&v.text);
                if text.is_empty() {
                    return None;
                }
                Some(Verse { verse: v.pk, text })
            })
            .collect();
        Ok(ChapterContent {
            verses,
            source: "bolls-api",
        })
    }
}

#[derive(Deserialize)]
struct BollsVerse {
    #[serde(alias = "verse", alias = "vs", deserialize_with = "verse_number")]
    pk: u32,
    #[serde(default, alias = "verse_text")]
    text: String,
}

#[async_trait]
impl ChapterSource for BollsSource {
    fn name(&self) -> &'static str {
        "bolls-api"
    }

    async fn fetch(&self, req: &ChapterRequest<'_>) -> Result<ChapterContent> {
        let book_number = req.book_number.ok_or_else(|| {
            SelahError::UpstreamShape(format!("no numeric id for book \"{}\"", req.book))
        })?;
        let url = self.chapter_url(req, book_number);
        debug!(%url, "fetching chapter from bolls");
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
    fn test_parse_cleans_markup() {
        let body = r#"[
            {"pk": 1, "text": "En el principio <br/>creó Dios los cielos y la tierra."},
            {"pk": 2, "text": "Y la tierra estaba desordenada y vacía"}
        ]"#;
        let content = BollsSource::parse(body.as_bytes()).unwrap();
        assert_eq!(content.source, "bolls-api");
        assert_eq!(content.verses.len(), 2);
        assert_eq!(
            content.verses[0].text,
            "En el principio creó Dios los cielos y la tierra."
        );
    }

    #[test]
    fn test_parse_drops_textless_verses() {
        let body = r#"[
            {"pk": 1, "text": "Texto real"},
            {"pk": 2},
            {"pk": 3, "text": "<br/>"}
        ]"#;
        let content = BollsSource::parse(body.as_bytes()).unwrap();
        assert_eq!(content.verses.len(), 1);
        assert_eq!(content.verses[0].verse, 1);
    }

    #[test]
    fn test_parse_accepts_alternate_field_names() {
        let body = r#"[{"verse": 5, "verse_text": "Alt shape"}]"#;
        let content = BollsSource::parse(body.as_bytes()).unwrap();
        assert_eq!(content.verses[0].verse, 5);
        assert_eq!(content.verses[0].text, "Alt shape");
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        assert!(BollsSource::parse(b"[]").is_err());
    }

    #[test]
    fn test_fetch_requires_book_number() {
        let source = BollsSource::new(Client::new(), "https://bolls.example.com");
        let req = ChapterRequest {
            api_id: "RVR60",
            book: "atlantis",
            book_number: None,
            chapter: 1,
        };
        let err = tokio_test::block_on(source.fetch(&req)).unwrap_err();
        assert!(err.to_string().contains("atlantis"));
    }
}
