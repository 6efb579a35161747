//! Verse of the day.
//!
//! Selection is deterministic: the day of the year indexes a curated list
//! of Reina-Valera verses, so every client sees the same verse on the same
//! date without any stored state. Fetching the text walks a three-tier
//! fallback: a full-Bible Spanish JSON dataset, then the single-translation
//! REST API, then the baked-in text. The last tier cannot fail, so the
//! selector always returns a verse.

use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::provider::verse_number;

const VERSION: &str = "es-rvr1960";

/// How many leading characters of the canonical book key are matched
/// against the dataset's book titles.
const BOOK_MATCH_PREFIX: usize = 4;

pub struct CuratedVerse {
    pub book: &'static str,
    pub book_display: &'static str,
    pub chapter: u32,
    pub verse: u32,
    pub text: &'static str,
}

pub static CURATED: [CuratedVerse; 8] = [
    CuratedVerse {
        book: "john",
        book_display: "Juan",
        chapter: 3,
        verse: 16,
        text: "Porque de tal manera amó Dios al mundo, que ha dado a su Hijo unigénito, para que todo aquel que en él cree, no se pierda, mas tenga vida eterna.",
    },
    CuratedVerse {
        book: "philippians",
        book_display: "Filipenses",
        chapter: 4,
        verse: 13,
        text: "Todo lo puedo en Cristo que me fortalece.",
    },
    CuratedVerse {
        book: "psalms",
        book_display: "Salmos",
        chapter: 23,
        verse: 1,
        text: "Jehová es mi pastor; nada me faltará.",
    },
    CuratedVerse {
        book: "proverbs",
        book_display: "Proverbios",
        chapter: 3,
        verse: 5,
        text: "Fíate de Jehová de todo tu corazón, y no te apoyes en tu propia prudencia.",
    },
    CuratedVerse {
        book: "jeremiah",
        book_display: "Jeremías",
        chapter: 29,
        verse: 11,
        text: "Porque yo sé los pensamientos que tengo acerca de vosotros, dice Jehová, pensamientos de paz, y no de mal, para daros el fin que esperáis.",
    },
    CuratedVerse {
        book: "isaiah",
        book_display: "Isaías",
        chapter: 40,
        verse: 31,
        text: "Pero los que esperan a Jehová tendrán nuevas fuerzas; levantarán alas como las águilas; correrán, y no se cansarán; caminarán, y no se fatigarán.",
    },
    CuratedVerse {
        book: "matthew",
        book_display: "Mateo",
        chapter: 11,
        verse: 28,
        text: "Venid a mí todos los que estáis trabajados y cargados, y yo os haré descansar.",
    },
    CuratedVerse {
        book: "romans",
        book_display: "Romanos",
        chapter: 8,
        verse: 28,
        text: "Y sabemos que a los que aman a Dios, todas las cosas les ayudan a bien, esto es, a los que conforme a su propósito son llamados.",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct VerseOfDay {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub version: String,
    pub reference: String,
    pub source: &'static str,
}

pub struct VotdSelector {
    client: Client,
    dataset_url: String,
    bible_api_base: String,
}

impl VotdSelector {
    pub fn new(client: Client, dataset_url: &str, bible_api_base: &str) -> Self {
        Self {
            client,
            dataset_url: dataset_url.to_string(),
            bible_api_base: bible_api_base.trim_end_matches('/').to_string(),
        }
    }

    /// The curated verse for a given date.
    pub fn pick(date: NaiveDate) -> &'static CuratedVerse {
        &CURATED[date.ordinal() as usize % CURATED.len()]
    }

    pub async fn select(&self, date: NaiveDate) -> VerseOfDay {
        let pick = Self::pick(date);

        if let Some(text) = self.from_dataset(pick).await {
            return Self::assemble(pick, text, VERSION, "github-api");
        }
        if let Some(text) = self.from_bible_api(pick).await {
            return Self::assemble(pick, text, "en-kjv", "bible-api");
        }
        Self::assemble(pick, pick.text.to_string(), VERSION, "local-fallback")
    }

    async fn from_dataset(&self, pick: &CuratedVerse) -> Option<String> {
        let response = self.client.get(&self.dataset_url).send().await.ok()?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "verse dataset unavailable");
            return None;
        }
        let books: Vec<DatasetBook> = response.json().await.ok()?;
        find_in_dataset(&books, pick)
    }

    async fn from_bible_api(&self, pick: &CuratedVerse) -> Option<String> {
        let url = format!(
            "{}/{}+{}:{}",
            self.bible_api_base, pick.book_display, pick.chapter, pick.verse
        );
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "bible-api verse unavailable");
            return None;
        }
        let data: SingleVerse = response.json().await.ok()?;
        data.text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn assemble(
        pick: &CuratedVerse,
        text: String,
        version: &str,
        source: &'static str,
    ) -> VerseOfDay {
        VerseOfDay {
            book: pick.book_display.to_string(),
            chapter: pick.chapter,
            verse: pick.verse,
            text,
            version: version.to_string(),
            reference: format!("{} {}:{}", pick.book_display, pick.chapter, pick.verse),
            source,
        }
    }
}

#[derive(Deserialize)]
struct SingleVerse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct DatasetBook {
    book: String,
    #[serde(default)]
    chapters: Vec<Vec<DatasetVerse>>,
}

#[derive(Deserialize)]
struct DatasetVerse {
    #[serde(deserialize_with = "verse_number")]
    verse: u32,
    text: String,
}

fn find_in_dataset(books: &[DatasetBook], pick: &CuratedVerse) -> Option<String> {
    let prefix = &pick.book[..pick.book.len().min(BOOK_MATCH_PREFIX)];
    let book = books.iter().find(|b| b.book.to_lowercase().contains(prefix))?;
    let chapter = book.chapters.get(pick.chapter as usize - 1)?;
    chapter
        .iter()
        .find(|v| v.verse == pick.verse)
        .map(|v| v.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_deterministic_mod_len() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // ordinal 1
        let b = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(); // ordinal 9
        assert_eq!(
            VotdSelector::pick(a).book,
            VotdSelector::pick(b).book,
            "ordinals 1 and 9 collide mod 8"
        );

        let c = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_ne!(VotdSelector::pick(a).book, VotdSelector::pick(c).book);
    }

    #[test]
    fn test_curated_list_is_complete() {
        assert_eq!(CURATED.len(), 8);
        for v in &CURATED {
            assert!(!v.text.is_empty());
            assert!(v.chapter >= 1 && v.verse >= 1);
        }
    }

    #[test]
    fn test_find_in_dataset() {
        let body = r#"[
            {"book": "John", "chapters": [
                [{"verse": 1, "text": "En el principio era el Verbo"}],
                [{"verse": 1, "text": "capítulo dos"}],
                [
                    {"verse": 15, "text": "otro versículo"},
                    {"verse": 16, "text": "Porque de tal manera amó Dios al mundo"}
                ]
            ]}
        ]"#;
        let books: Vec<DatasetBook> = serde_json::from_str(body).unwrap();
        let text = find_in_dataset(&books, &CURATED[0]).unwrap();
        assert!(text.starts_with("Porque de tal manera"));
    }

    #[test]
    fn test_find_in_dataset_misses() {
        let body = r#"[{"book": "Génesis", "chapters": [[{"verse": 1, "text": "x"}]]}]"#;
        let books: Vec<DatasetBook> = serde_json::from_str(body).unwrap();
        assert!(find_in_dataset(&books, &CURATED[0]).is_none());
    }

    #[tokio::test]
    async fn test_select_falls_back_to_local_text() {
        // Both upstream tiers point at a closed local port.
        let selector = VotdSelector::new(
            Client::new(),
            "http://127.0.0.1:9/dataset.json",
            "http://127.0.0.1:9",
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let verse = selector.select(date).await;
        assert_eq!(verse.source, "local-fallback");
        assert_eq!(verse.version, VERSION);
        assert_eq!(verse.text, VotdSelector::pick(date).text);
        assert!(verse.reference.contains(':'));
    }
}
