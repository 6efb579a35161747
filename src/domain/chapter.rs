use serde::{Deserialize, Serialize};

/// A single verse as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub verse: u32,
    pub text: String,
}

/// Verses plus the label of the provider they came from.
///
/// A chapter is attributed to exactly one provider; verses are never merged
/// across sources.
#[derive(Debug, Clone)]
pub struct ChapterContent {
    pub verses: Vec<Verse>,
    pub source: &'static str,
}

/// A fully resolved chapter, echoing the request parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub book: String,
    pub chapter: u32,
    pub version: String,
    pub verses: Vec<Verse>,
    #[serde(rename = "totalVerses")]
    pub total_verses: usize,
    #[serde(rename = "apiSource")]
    pub source: &'static str,
}

impl Chapter {
    pub fn new(book: &str, chapter: u32, version: &str, content: ChapterContent) -> Self {
        Self {
            book: book.to_string(),
            chapter,
            version: version.to_string(),
            total_verses: content.verses.len(),
            verses: content.verses,
            source: content.source,
        }
    }
}
