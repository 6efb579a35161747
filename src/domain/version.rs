use serde::Serialize;

/// Which upstream API serves a given translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProviderKind {
    /// CDN-hosted per-version JSON files. Widest version coverage.
    #[serde(rename = "github")]
    Cdn,
    /// bible-api.com. Serves exactly one English translation (KJV).
    #[serde(rename = "bible-api")]
    BibleApi,
    /// bolls.life. Addresses books by numeric id.
    #[serde(rename = "bolls")]
    Bolls,
}

/// One Bible translation in the public catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub id: &'static str,
    pub api_id: &'static str,
    pub name: &'static str,
    pub lang: &'static str,
    pub description: &'static str,
    pub api_source: ProviderKind,
    pub scope: &'static str,
    pub popular: bool,
}

/// Resolver-facing view of a version id: the identifier to send upstream
/// and the provider that understands it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRoute {
    pub api_id: String,
    pub kind: ProviderKind,
}
