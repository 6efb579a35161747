//! Chapter resolution: the ordered provider fallback chain.
//!
//! One request walks a short plan of provider attempts; the first success
//! wins and its verses are returned untouched. When every attempt fails the
//! outcome depends on the language: Spanish versions surface a typed
//! unavailability error, anything else gets a clearly labeled synthetic
//! placeholder chapter.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::app::{Result, SelahError};
use crate::catalog::Catalog;
use crate::domain::{Chapter, ChapterContent, ProviderKind, Verse};
use crate::normalizer::Normalizer;
use crate::provider::{ChapterRequest, ChapterSource};

pub const SYNTHETIC_MIN_VERSES: u32 = 5;
pub const SYNTHETIC_MAX_VERSES: u32 = 34;

pub struct ChapterResolver {
    catalog: Arc<Catalog>,
    normalizer: Normalizer,
    cdn: Arc<dyn ChapterSource>,
    bible_api: Arc<dyn ChapterSource>,
    bolls: Arc<dyn ChapterSource>,
}

/// One planned provider attempt.
#[derive(Debug)]
enum Step {
    Cdn,
    BibleApi,
    Bolls { book_number: u8 },
}

/// Outcome of walking the plan.
enum Resolution {
    Resolved(ChapterContent),
    Exhausted,
}

impl ChapterResolver {
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

    pub async fn resolve(&self, book: &str, chapter: u32, version: &str) -> Result<Chapter> {
        let book_key = self.normalizer.normalize(book);
        let plan = self.plan(&book_key, version);

        match self.run(&plan, &book_key, chapter, version).await {
            Resolution::Resolved(content) => Ok(Chapter::new(book, chapter, version, content)),
            Resolution::Exhausted if version.starts_with("es-") => {
                // A Spanish version id with English placeholder text would
                // mislabel content; fail instead.
                Err(SelahError::SpanishUnavailable)
            }
            Resolution::Exhausted => Ok(Chapter::new(
                book,
                chapter,
                version,
                synthetic_chapter(book, chapter, version),
            )),
        }
    }

    /// Build the ordered list of sources worth trying for this version.
    /// The CDN is always first; bible-api only understands English;
    /// bolls needs a numeric book id and is skipped without one.
    fn plan(&self, book_key: &str, version: &str) -> Vec<Step> {
        let mut steps = vec![Step::Cdn];
        if version.starts_with("en-") || version == "kjv-fallback" {
            steps.push(Step::BibleApi);
        }
        if self.catalog.route(version).kind == ProviderKind::Bolls {
            match self.catalog.book_number(book_key) {
                Some(book_number) => steps.push(Step::Bolls { book_number }),
                None => debug!(book = book_key, "no numeric book id, skipping bolls"),
            }
        }
        steps
    }

    async fn run(
        &self,
        plan: &[Step],
        book_key: &str,
        chapter: u32,
        version: &str,
    ) -> Resolution {
        let route = self.catalog.route(version);
        for (attempt, step) in plan.iter().enumerate() {
            let (source, req) = match step {
                Step::Cdn => (
                    &self.cdn,
                    ChapterRequest {
                        api_id: version,
                        book: book_key,
                        book_number: None,
                        chapter,
                    },
                ),
                Step::BibleApi => (
                    &self.bible_api,
                    ChapterRequest {
                        api_id: route.api_id.as_str(),
                        book: book_key,
                        book_number: None,
                        chapter,
                    },
                ),
                Step::Bolls { book_number } => (
                    &self.bolls,
                    ChapterRequest {
                        api_id: route.api_id.as_str(),
                        book: book_key,
                        book_number: Some(*book_number),
                        chapter,
                    },
                ),
            };
            match source.fetch(&req).await {
                Ok(content) => {
                    debug!(
                        provider = source.name(),
                        attempt,
                        verses = content.verses.len(),
                        "chapter resolved"
                    );
                    return Resolution::Resolved(content);
                }
                Err(e) => {
                    warn!(
                        provider = source.name(),
                        attempt,
                        error = %e,
                        "provider attempt failed, continuing"
                    );
                }
            }
        }
        Resolution::Exhausted
    }
}

/// Placeholder chapter used when every provider failed for a non-Spanish
/// version. The text states what it is rather than passing off fabricated
/// content as scripture.
pub fn synthetic_chapter(book: &str, chapter: u32, version: &str) -> ChapterContent {
    let count = rand::thread_rng().gen_range(SYNTHETIC_MIN_VERSES..=SYNTHETIC_MAX_VERSES);
    let verses = (1..=count)
        .map(|i| Verse {
            verse: i,
            text: format!(
                "⚠️ CONTENIDO DE RESPALDO: Versículo {i} del capítulo {chapter} de {book} \
                 ({version}). El texto real no está disponible en este momento."
            ),
        })
        .collect();
    ChapterContent {
        verses,
        source: "fallback-synthetic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        name: &'static str,
        content: Option<ChapterContent>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn up(name: &'static str, verses: Vec<Verse>) -> Arc<Self> {
            Arc::new(Self {
                name,
                content: Some(ChapterContent {
                    verses,
                    source: name,
                }),
                calls: AtomicUsize::new(0),
            })
        }

        fn down(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                content: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChapterSource for FakeSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(&self, _req: &ChapterRequest<'_>) -> Result<ChapterContent> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.content {
                Some(c) => Ok(c.clone()),
                None => Err(SelahError::UpstreamShape("source down".into())),
            }
        }
    }

    fn verse(n: u32, text: &str) -> Verse {
        Verse {
            verse: n,
            text: text.to_string(),
        }
    }

    fn resolver(
        cdn: Arc<FakeSource>,
        bible_api: Arc<FakeSource>,
        bolls: Arc<FakeSource>,
    ) -> ChapterResolver {
        let catalog = Arc::new(Catalog::new());
        let normalizer = Normalizer::new(&catalog);
        ChapterResolver::new(catalog, normalizer, cdn, bible_api, bolls)
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let cdn = FakeSource::up("cdn", vec![verse(16, "For God so loved the world")]);
        let bible_api = FakeSource::up("bible-api", vec![verse(1, "other")]);
        let bolls = FakeSource::up("bolls", vec![verse(1, "other")]);
        let r = resolver(cdn.clone(), bible_api.clone(), bolls.clone());

        let chapter = r.resolve("john", 3, "en-kjv").await.unwrap();
        assert_eq!(chapter.total_verses, 1);
        assert_eq!(chapter.verses[0].verse, 16);
        assert_eq!(chapter.source, "cdn");
        assert_eq!(cdn.calls(), 1);
        assert_eq!(bible_api.calls(), 0);
        assert_eq!(bolls.calls(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_bible_api_for_english() {
        let cdn = FakeSource::down("cdn");
        let bible_api = FakeSource::up("bible-api", vec![verse(1, "kjv text")]);
        let bolls = FakeSource::down("bolls");
        let r = resolver(cdn.clone(), bible_api.clone(), bolls.clone());

        let chapter = r.resolve("john", 3, "en-kjv").await.unwrap();
        assert_eq!(chapter.source, "bible-api");
        assert_eq!(cdn.calls(), 1);
        assert_eq!(bible_api.calls(), 1);
        // en-kjv routes to bible-api, so bolls is never in the plan
        assert_eq!(bolls.calls(), 0);
    }

    #[tokio::test]
    async fn test_bolls_reached_for_routed_versions() {
        let cdn = FakeSource::down("cdn");
        let bible_api = FakeSource::down("bible-api");
        let bolls = FakeSource::up("bolls", vec![verse(1, "Jehová es mi pastor")]);
        let r = resolver(cdn.clone(), bible_api.clone(), bolls.clone());

        let chapter = r.resolve("Salmos", 23, "es-rvr1960").await.unwrap();
        assert_eq!(chapter.source, "bolls");
        assert_eq!(cdn.calls(), 1);
        // Spanish version, so bible-api is never in the plan
        assert_eq!(bible_api.calls(), 0);
        assert_eq!(bolls.calls(), 1);
    }

    #[tokio::test]
    async fn test_bolls_skipped_for_unknown_book() {
        let cdn = FakeSource::down("cdn");
        let bible_api = FakeSource::down("bible-api");
        let bolls = FakeSource::up("bolls", vec![verse(1, "text")]);
        let r = resolver(cdn.clone(), bible_api.clone(), bolls.clone());

        let result = r.resolve("Atlantis", 1, "es-rvr1960").await;
        assert!(matches!(result, Err(SelahError::SpanishUnavailable)));
        assert_eq!(bolls.calls(), 0);
    }

    #[tokio::test]
    async fn test_spanish_exhaustion_is_an_error() {
        let cdn = FakeSource::down("cdn");
        let bible_api = FakeSource::down("bible-api");
        let bolls = FakeSource::down("bolls");
        let r = resolver(cdn, bible_api, bolls);

        let result = r.resolve("juan", 3, "es-rvr1960").await;
        assert!(matches!(result, Err(SelahError::SpanishUnavailable)));
    }

    #[tokio::test]
    async fn test_english_exhaustion_synthesizes() {
        let cdn = FakeSource::down("cdn");
        let bible_api = FakeSource::down("bible-api");
        let bolls = FakeSource::down("bolls");
        let r = resolver(cdn, bible_api, bolls);

        let chapter = r.resolve("john", 3, "en-kjv").await.unwrap();
        assert_eq!(chapter.source, "fallback-synthetic");
        let count = chapter.total_verses as u32;
        assert!((SYNTHETIC_MIN_VERSES..=SYNTHETIC_MAX_VERSES).contains(&count));
        assert!(chapter.verses[0].text.contains("CONTENIDO DE RESPALDO"));
    }

    #[tokio::test]
    async fn test_unknown_version_still_resolves_via_cdn() {
        let cdn = FakeSource::up("cdn", vec![verse(1, "text")]);
        let bible_api = FakeSource::down("bible-api");
        let bolls = FakeSource::down("bolls");
        let r = resolver(cdn.clone(), bible_api.clone(), bolls.clone());

        let chapter = r.resolve("genesis", 1, "xx-obscure").await.unwrap();
        assert_eq!(chapter.source, "cdn");
        assert_eq!(bible_api.calls(), 0);
        assert_eq!(bolls.calls(), 0);
    }

    #[test]
    fn test_synthetic_verse_count_bounds() {
        for _ in 0..50 {
            let content = synthetic_chapter("john", 3, "en-web");
            let count = content.verses.len() as u32;
            assert!((SYNTHETIC_MIN_VERSES..=SYNTHETIC_MAX_VERSES).contains(&count));
        }
        let content = synthetic_chapter("john", 3, "en-web");
        assert_eq!(content.source, "fallback-synthetic");
        assert_eq!(content.verses[0].verse, 1);
    }
}
