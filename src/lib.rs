//! # Selah
//!
//! A Bible reading backend: one HTTP JSON API in front of several
//! third-party scripture providers.
//!
//! ## Architecture
//!
//! ```text
//! Normalizer → Catalog routing → Provider chain → HTTP
//! ```
//!
//! No single upstream source covers every translation, so chapter requests
//! walk an ordered provider chain: the CDN-hosted JSON files first, then
//! the single-translation REST API for English versions, then the
//! numeric-book-id API for versions routed there. The first source that
//! answers wins; a chapter always comes from exactly one source.
//!
//! - [`catalog`]: static book/version tables and provider routing
//! - [`normalizer`]: Spanish/English book names to canonical keys
//! - [`provider`]: one parsing adapter per upstream source
//! - [`resolver`]: the fallback chain itself
//! - [`search`]: bounded chapter-walking substring search
//! - [`votd`]: deterministic verse of the day
//! - [`store`]: SQLite persistence for annotations
//!
//! ## Quick start
//!
//! ```bash
//! # Run the API server
//! selah serve --bind 0.0.0.0:5000
//!
//! # Resolve a chapter from the terminal
//! selah chapter juan 3 --version es-rvr1960
//!
//! # Search
//! selah search "fe" --version es-rvr1960 --book romanos
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together the catalog, the shared
/// HTTP client, the provider adapters, and the store.
pub mod app;

/// Static reference data: books, versions, routing, reading plans.
pub mod catalog;

/// Command-line interface using clap.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/selah/config.toml`: bind address, database path,
/// provider base URLs, and the upstream timeout.
pub mod config;

/// Core domain models.
///
/// - [`Book`](domain::Book), [`VersionInfo`](domain::VersionInfo): catalog rows
/// - [`Chapter`](domain::Chapter), [`Verse`](domain::Verse): resolved content
/// - [`Bookmark`](domain::Bookmark), [`Highlight`](domain::Highlight),
///   [`VersionHistoryEntry`](domain::VersionHistoryEntry): annotations
pub mod domain;

/// The public JSON API: axum router, handlers, error mapping.
pub mod http;

/// Book-name normalization.
pub mod normalizer;

/// Upstream provider adapters behind the
/// [`ChapterSource`](provider::ChapterSource) trait.
pub mod provider;

/// Chapter resolution: the ordered provider fallback chain, with a
/// synthetic placeholder as the last resort for non-Spanish versions.
pub mod resolver;

/// Verse search across the catalog, bounded per provider.
pub mod search;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;

/// Deterministic verse of the day with a three-tier text fallback.
pub mod votd;
