//! Static reference data: the 66-book canon, the version catalog, and the
//! version-to-provider routing table.
//!
//! Everything here is immutable and built once at startup; components hold
//! the [`Catalog`] behind an `Arc` and never mutate it.

mod books;
mod versions;

use std::collections::HashMap;

use crate::domain::{Book, ProviderKind, ProviderRoute, ReadingPlan, VersionInfo};

/// Chapter count assumed for books the catalog does not know about, so a
/// search over an unrecognized key still terminates.
pub const DEFAULT_MAX_CHAPTERS: u16 = 25;

static READING_PLANS: [ReadingPlan; 5] = [
    ReadingPlan { id: 1, name: "Biblia en un año", duration: 365, description: "Lee toda la Biblia en 365 días" },
    ReadingPlan { id: 2, name: "Nuevo Testamento en 3 meses", duration: 90, description: "Completa el Nuevo Testamento" },
    ReadingPlan { id: 3, name: "Salmos y Proverbios", duration: 60, description: "Sabiduría diaria" },
    ReadingPlan { id: 4, name: "Evangelios", duration: 30, description: "Los cuatro evangelios en un mes" },
    ReadingPlan { id: 5, name: "Epistolas de Pablo", duration: 45, description: "Las cartas del apóstol Pablo" },
];

pub struct Catalog {
    by_key: HashMap<&'static str, &'static Book>,
    routes: HashMap<&'static str, ProviderRoute>,
}

impl Catalog {
    pub fn new() -> Self {
        let by_key = books::BOOKS.iter().map(|b| (b.key, b)).collect();
        let routes = versions::ROUTES
            .iter()
            .map(|(id, api_id, kind)| {
                (
                    *id,
                    ProviderRoute {
                        api_id: (*api_id).to_string(),
                        kind: *kind,
                    },
                )
            })
            .collect();
        Self { by_key, routes }
    }

    pub fn books(&self) -> &'static [Book] {
        &books::BOOKS
    }

    pub fn versions(&self) -> &'static [VersionInfo] {
        &versions::VERSIONS
    }

    pub fn reading_plans(&self) -> &'static [ReadingPlan] {
        &READING_PLANS
    }

    /// Look up a book by its canonical key.
    pub fn book(&self, key: &str) -> Option<&'static Book> {
        self.by_key.get(key).copied()
    }

    /// Numeric book id (1-66) for providers that address books by number.
    pub fn book_number(&self, key: &str) -> Option<u8> {
        self.book(key).map(|b| b.id)
    }

    pub fn max_chapters(&self, key: &str) -> u16 {
        self.book(key).map_or(DEFAULT_MAX_CHAPTERS, |b| b.chapters)
    }

    /// Resolve a version id to its upstream route. Unknown ids are assumed
    /// to be fetchable from the CDN provider under their own name; there is
    /// no validation that such a version actually exists upstream.
    pub fn route(&self, version_id: &str) -> ProviderRoute {
        self.routes.get(version_id).cloned().unwrap_or(ProviderRoute {
            api_id: version_id.to_string(),
            kind: ProviderKind::Cdn,
        })
    }

    pub fn version(&self, id: &str) -> Option<&'static VersionInfo> {
        versions::VERSIONS.iter().find(|v| v.id == id)
    }

    /// Display name for a version id, falling back to the id itself.
    pub fn version_name<'a>(&self, id: &'a str) -> &'a str {
        match self.version(id) {
            Some(v) => v.name,
            None => id,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
