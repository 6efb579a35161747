use crate::domain::{ProviderKind, VersionInfo};

const fn version(
    id: &'static str,
    api_id: &'static str,
    name: &'static str,
    lang: &'static str,
    description: &'static str,
    api_source: ProviderKind,
    scope: &'static str,
    popular: bool,
) -> VersionInfo {
    VersionInfo {
        id,
        api_id,
        name,
        lang,
        description,
        api_source,
        scope,
        popular,
    }
}

use crate::domain::ProviderKind::{BibleApi, Bolls, Cdn};

const FULL: &str = "Complete Bible";

/// The public version catalog served by `/api/versions`.
pub(super) static VERSIONS: [VersionInfo; 38] = [
    version("es-rvr1960", "es-rvr1960", "Reina-Valera 1960", "es", "Versión tradicional en español más popular", Cdn, FULL, true),
    version("es-pddpt", "es-pddpt", "La Palabra de Dios para Todos", "es", "Traducción moderna y clara en español", Cdn, FULL, true),
    version("es-valera", "es-valera", "Sagradas Escrituras (1569)", "es", "Traducción histórica de Casiodoro de Reina", Cdn, FULL, false),
    version("en-kjv", "en-kjv", "King James Version", "en", "Classic English translation (1611)", Cdn, FULL, true),
    version("en-niv2011", "NIV2011", "NIV 2011 Updated", "en", "Updated New International Version", Cdn, FULL, true),
    version("en-asv", "en-asv", "American Standard Version", "en", "Accurate English translation (1901)", Cdn, FULL, true),
    version("en-web", "en-web", "World English Bible", "en", "Modern public domain English translation", Cdn, FULL, true),
    version("en-ylt", "en-ylt", "Young's Literal Translation", "en", "Literal word-for-word translation", Cdn, FULL, false),
    version("es-rvr1909", "RVR1909", "Reina-Valera 1909", "es", "Versión histórica Reina-Valera", Bolls, FULL, false),
    version("es-rvr1995", "RVR1995", "Reina-Valera 1995", "es", "Versión actualizada Reina-Valera", Bolls, FULL, true),
    version("es-rvr2000", "RVR2000", "Reina-Valera 2000", "es", "Versión contemporánea Reina-Valera", Bolls, FULL, true),
    version("es-ntv", "NTV", "Nueva Traducción Viviente", "es", "Traducción moderna y clara en español contemporáneo", Bolls, FULL, true),
    version("es-lbla", "LBLA", "La Biblia de las Américas", "es", "Traducción fiel y exacta en español", Bolls, FULL, true),
    version("es-dra", "DRA", "Dios Habla Hoy", "es", "Versión Popular en español sencillo", Bolls, FULL, true),
    version("es-btx", "BTX", "Biblia Textual", "es", "Traducción basada en textos originales", Bolls, FULL, true),
    version("es-nvi", "NVI", "Nueva Versión Internacional", "es", "Traducción moderna en español", Bolls, FULL, true),
    version("en-niv", "NIV", "New International Version", "en", "Popular modern English translation", Bolls, FULL, true),
    version("en-esv", "ESV", "English Standard Version", "en", "Contemporary English translation", Bolls, FULL, true),
    version("en-nlt", "NLT", "New Living Translation", "en", "Easy-to-read modern English", Bolls, FULL, true),
    version("en-nasb", "NASB", "New American Standard Bible", "en", "Accurate literal translation", Bolls, FULL, true),
    version("en-amp", "AMP", "Amplified Bible", "en", "Expanded translation with detailed meanings", Bolls, FULL, true),
    version("en-msg", "MSG", "The Message", "en", "Contemporary paraphrase by Eugene Peterson", Bolls, FULL, true),
    version("en-nkjv", "NKJV", "New King James Version", "en", "Modern update of the King James Version", Bolls, FULL, true),
    version("en-csb", "CSB", "Christian Standard Bible", "en", "Balance of accuracy and readability", Bolls, FULL, true),
    version("pt-acf", "pt-acf", "Almeida Corrigida Fiel", "pt", "Tradução tradicional em português", Cdn, FULL, true),
    version("pt-ara", "ARA", "Almeida Revista e Atualizada", "pt", "Versão atualizada em português", Bolls, FULL, true),
    version("pt-nvi", "NVI-PT", "Nova Versão Internacional", "pt", "Tradução moderna em português", Bolls, FULL, true),
    version("fr-bdm", "fr-bdm", "Bible de David Martin", "fr", "Traduction française classique", Cdn, FULL, true),
    version("fr-lsg", "LSG", "Louis Segond 1910", "fr", "Traduction française traditionnelle", Bolls, FULL, true),
    version("fr-bds", "BDS", "Bible du Semeur", "fr", "Traduction française contemporaine", Bolls, FULL, true),
    version("de-schlachter", "de-schlachter", "Schlachter Bibel", "de", "Deutsche Bibelübersetzung", Cdn, FULL, true),
    version("de-luther", "LUTHER", "Luther Bibel 1984", "de", "Deutsche Lutherübersetzung", Bolls, FULL, true),
    version("it-cei", "CEI", "Conferenza Episcopale Italiana", "it", "Traduzione italiana cattolica", Bolls, FULL, true),
    version("it-riveduta", "RIVEDUTA", "Bibbia della Riveduta", "it", "Traduzione italiana classica", Bolls, FULL, true),
    version("ru-synodal", "SYNODAL", "Синодальный перевод", "ru", "Традиционный русский перевод", Bolls, FULL, true),
    version("he-wlc", "he-wlc", "Westminster Leningrad Codex", "he", "Texto hebreo del Antiguo Testamento", Cdn, "Old Testament", false),
    version("grc-srgnt", "grc-srgnt", "SBL Greek New Testament", "grc", "Texto griego del Nuevo Testamento", Cdn, "New Testament", false),
    version("kjv-fallback", "kjv", "King James Version (Fallback)", "en", "KJV from bible-api.com", BibleApi, FULL, false),
];

/// Version id to upstream routing. The fetch path can differ from the
/// public catalog's `apiSource`: a few popular ids are pinned to providers
/// with better chapter coverage than the one they are advertised under.
pub(super) const ROUTES: &[(&str, &str, ProviderKind)] = &[
    ("es-rvr1960", "RVR60", Bolls),
    ("es-pddpt", "PDDPT", Bolls),
    ("es-valera", "RVR1569", Bolls),
    ("es-rvr1909", "RVR1909", Bolls),
    ("es-btx", "BTX", Bolls),
    ("es-nvi", "NVI", Bolls),
    ("en-niv", "NIV", Bolls),
    ("en-esv", "ESV", Bolls),
    ("en-nlt", "NLT", Bolls),
    ("en-nasb", "NASB", Bolls),
    ("pt-ara", "ARA", Bolls),
    ("pt-nvi", "NVI-PT", Bolls),
    ("fr-lsg", "LSG", Bolls),
    ("fr-bds", "BDS", Bolls),
    ("de-luther", "LUTHER", Bolls),
    ("it-cei", "CEI", Bolls),
    ("it-riveduta", "RIVEDUTA", Bolls),
    ("ru-synodal", "SYNODAL", Bolls),
    ("en-kjv", "KJV", BibleApi),
    ("en-asv", "KJV", BibleApi),
    ("en-web", "KJV", BibleApi),
    ("en-ylt", "KJV", BibleApi),
    ("kjv-fallback", "KJV", BibleApi),
];
