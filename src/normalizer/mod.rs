//! Book-name normalization.
//!
//! Clients send book names in whatever language and casing their UI uses
//! ("Génesis", "1 Samuel", "apocalipsis"). Providers want canonical
//! lowercase keys ("genesis", "1samuel", "revelation"). The alias table is
//! built from the catalog itself: every book's Spanish and English display
//! names map onto its key.

use std::collections::HashMap;

use crate::catalog::Catalog;

/// Display-name variants that are neither the catalog's Spanish nor English
/// name but show up in the wild.
const EXTRA_ALIASES: &[(&str, &str)] = &[
    ("song of solomon", "songofsolomon"),
    ("canticles", "songofsolomon"),
    ("psalm", "psalms"),
];

#[derive(Clone)]
pub struct Normalizer {
    aliases: HashMap<String, &'static str>,
}

impl Normalizer {
    pub fn new(catalog: &Catalog) -> Self {
        let mut aliases = HashMap::new();
        for book in catalog.books() {
            aliases.insert(book.name.to_lowercase(), book.key);
            aliases.insert(book.name_en.to_lowercase(), book.key);
        }
        for (alias, key) in EXTRA_ALIASES {
            aliases.insert((*alias).to_string(), *key);
        }
        Self { aliases }
    }

    /// Canonical key for a raw book name. Names not in the alias table pass
    /// through lower-cased unchanged; an unrecognized key fails later at
    /// fetch time, not here.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.trim().to_lowercase();
        match self.aliases.get(&lowered) {
            Some(key) => (*key).to_string(),
            None => lowered,
        }
    }
}
