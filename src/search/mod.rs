//! Verse search across the catalog.
//!
//! There is no upstream search endpoint to call, so this walks chapters
//! book by book through the same provider adapters the resolver uses and
//! scans verse text for a case-insensitive substring match. Each chapter is
//! a separate network round-trip, so the walk is bounded per provider: a
//! chapter limit per book and a hard result cap. A failed chapter is
//! skipped, never fatal.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::app::{Result, SelahError};
use crate::catalog::Catalog;
use crate::domain::ProviderKind;
use crate::normalizer::Normalizer;
use crate::provider::{ChapterRequest, ChapterSource};

pub const MIN_QUERY_LEN: usize = 2;

const CDN_CHAPTER_LIMIT: u16 = 10;
const CDN_RESULT_CAP: usize = 50;
const BIBLE_API_CHAPTER_LIMIT: u16 = 5;
const BIBLE_API_RESULT_CAP: usize = 30;
const BOLLS_CHAPTER_LIMIT: u16 = 3;
const BOLLS_RESULT_CAP: usize = 15;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub version: String,
}

pub struct SearchAggregator {
    catalog: Arc<Catalog>,
    normalizer: Normalizer,
    cdn: Arc<dyn ChapterSource>,
    bible_api: Arc<dyn ChapterSource>,
    bolls: Arc<dyn ChapterSource>,
}

impl SearchAggregator {
    pub fn new(
        catalog: Arc<Catalog>,
        normalizer: Normalizer,
        cdn: Arc<dyn ChapterSource>,
        bible_api: Arc<dyn ChapterSource>,
        bolls: Arc<dyn ChapterSource>,
    ) -> Self {
        Self {
            catalog,
            normalizer,
            cdn,
            bible_api,
            bolls,
        }
    }

    pub async fn search(
        &self,
        query: &str,
        version: &str,
        book: Option<&str>,
    ) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Err(SelahError::InvalidInput(
                "Query must be at least 2 characters".into(),
            ));
        }
        let needle = query.to_lowercase();

        let route = self.catalog.route(version);
        let (source, chapter_limit, result_cap) = match route.kind {
            ProviderKind::Cdn => (&self.cdn, CDN_CHAPTER_LIMIT, CDN_RESULT_CAP),
            ProviderKind::BibleApi => (&self.bible_api, BIBLE_API_CHAPTER_LIMIT, BIBLE_API_RESULT_CAP),
            ProviderKind::Bolls => (&self.bolls, BOLLS_CHAPTER_LIMIT, BOLLS_RESULT_CAP),
        };
        let display_version = self.catalog.version_name(version).to_string();

        let keys: Vec<String> = match book {
            Some(b) => vec![self.normalizer.normalize(b)],
            None => self.catalog.books().iter().map(|b| b.key.to_string()).collect(),
        };
        debug!(
            query,
            version,
            books = keys.len(),
            provider = source.name(),
            "starting search"
        );

        let mut results = Vec::new();
        'books: for key in &keys {
            let book_number = self.catalog.book_number(key);
            if route.kind == ProviderKind::Bolls && book_number.is_none() {
                continue;
            }
            let last_chapter = self.catalog.max_chapters(key).min(chapter_limit);
            for chapter in 1..=u32::from(last_chapter) {
                let req = ChapterRequest {
                    api_id: match route.kind {
                        ProviderKind::Cdn => version,
                        _ => route.api_id.as_str(),
                    },
                    book: key,
                    book_number,
                    chapter,
                };
                let content = match source.fetch(&req).await {
                    Ok(c) => c,
                    Err(e) => {
                        debug!(book = key.as_str(), chapter, error = %e, "chapter skipped");
                        continue;
                    }
                };
                for v in content.verses {
                    if v.text.to_lowercase().contains(&needle) {
                        results.push(SearchResult {
                            book: key.clone(),
                            chapter,
                            verse: v.verse,
                            text: v.text,
                            version: display_version.clone(),
                        });
                        if results.len() >= result_cap {
                            debug!(count = results.len(), "result cap reached");
                            break 'books;
                        }
                    }
                }
            }
        }

        debug!(count = results.len(), "search finished");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChapterContent, Verse};
    use async_trait::async_trait;

    /// Serves the same verses for every requested chapter.
    struct RepeatSource {
        verses: Vec<Verse>,
    }

    impl RepeatSource {
        fn up(texts: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                verses: texts
                    .iter()
                    .enumerate()
                    .map(|(i, t)| Verse {
                        verse: i as u32 + 1,
                        text: (*t).to_string(),
                    })
                    .collect(),
            })
        }

        fn down() -> Arc<Self> {
            Arc::new(Self { verses: Vec::new() })
        }
    }

    #[async_trait]
    impl ChapterSource for RepeatSource {
        fn name(&self) -> &'static str {
            "repeat"
        }

        async fn fetch(&self, _req: &ChapterRequest<'_>) -> Result<ChapterContent> {
            if self.verses.is_empty() {
                return Err(SelahError::UpstreamShape("source down".into()));
            }
            Ok(ChapterContent {
                verses: self.verses.clone(),
                source: "repeat",
            })
        }
    }

    fn aggregator(
        cdn: Arc<RepeatSource>,
        bible_api: Arc<RepeatSource>,
        bolls: Arc<RepeatSource>,
    ) -> SearchAggregator {
        let catalog = Arc::new(Catalog::new());
        let normalizer = Normalizer::new(&catalog);
        SearchAggregator::new(catalog, normalizer, cdn, bible_api, bolls)
    }

    #[tokio::test]
    async fn test_short_query_rejected() {
        let agg = aggregator(RepeatSource::down(), RepeatSource::down(), RepeatSource::down());
        let err = agg.search(" a ", "en-kjv", None).await.unwrap_err();
        assert!(matches!(err, SelahError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_case_insensitive_match_and_cap() {
        let bible_api = RepeatSource::up(&["For God so LOVED the world", "unrelated verse"]);
        let agg = aggregator(RepeatSource::down(), bible_api, RepeatSource::down());

        let results = agg.search("love", "en-kjv", None).await.unwrap();
        assert_eq!(results.len(), BIBLE_API_RESULT_CAP);
        assert!(results
            .iter()
            .all(|r| r.text.to_lowercase().contains("love")));
        assert_eq!(results[0].version, "King James Version");
    }

    #[tokio::test]
    async fn test_scoped_to_one_book() {
        let bolls = RepeatSource::up(&["la fe viene por el oír"]);
        let agg = aggregator(RepeatSource::down(), RepeatSource::down(), bolls);

        let results = agg.search("fe", "es-rvr1960", Some("Romanos")).await.unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.book == "romans"));
        // romans has 16 chapters but bolls only scans 3 per book
        assert!(results.iter().all(|r| r.chapter <= 3));
    }

    #[tokio::test]
    async fn test_all_failures_swallowed() {
        let agg = aggregator(RepeatSource::down(), RepeatSource::down(), RepeatSource::down());
        let results = agg.search("fe", "es-rvr1960", None).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let cdn = RepeatSource::up(&["completely unrelated text"]);
        let agg = aggregator(cdn, RepeatSource::down(), RepeatSource::down());
        let results = agg.search("xyzzyqqq", "en-asv-custom", None).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_encounter_order() {
        let cdn = RepeatSource::up(&["alpha match", "beta match"]);
        let agg = aggregator(cdn, RepeatSource::down(), RepeatSource::down());
        let results = agg.search("match", "xx-custom", Some("jude")).await.unwrap();
        // jude has a single chapter; verses come back in encounter order
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].verse, 1);
        assert_eq!(results[1].verse, 2);
    }
}
