use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::app::error::{Result, SelahError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::normalizer::Normalizer;
use crate::provider::{BibleApiSource, BollsSource, CdnSource, ChapterSource};
use crate::resolver::ChapterResolver;
use crate::search::SearchAggregator;
use crate::store::sqlite::SqliteStore;
use crate::votd::VotdSelector;

/// Wires every component together: the static catalog, the shared HTTP
/// client, the provider adapters, and the annotation store.
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub resolver: ChapterResolver,
    pub search: SearchAggregator,
    pub votd: VotdSelector,
    pub store: Arc<SqliteStore>,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let store = match &config.database.path {
            Some(path) => SqliteStore::new(path)?,
            None => SqliteStore::new(Self::default_db_path()?)?,
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Context with a throwaway in-memory store; used by the read-only CLI
    /// commands and by tests.
    pub fn in_memory(config: &Config) -> Result<Self> {
        Self::with_store(config, Arc::new(SqliteStore::in_memory()?))
    }

    fn with_store(config: &Config, store: Arc<SqliteStore>) -> Result<Self> {
        let providers = &config.providers;
        for base in [
            &providers.cdn_base_url,
            &providers.bible_api_base_url,
            &providers.bolls_base_url,
            &providers.votd_dataset_url,
        ] {
            url::Url::parse(base)?;
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(providers.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(providers.user_agent.clone())
            .build()?;

        let catalog = Arc::new(Catalog::new());
        let normalizer = Normalizer::new(&catalog);

        let cdn: Arc<dyn ChapterSource> =
            Arc::new(CdnSource::new(client.clone(), &providers.cdn_base_url));
        let bible_api: Arc<dyn ChapterSource> = Arc::new(BibleApiSource::new(
            client.clone(),
            &providers.bible_api_base_url,
        ));
        let bolls: Arc<dyn ChapterSource> =
            Arc::new(BollsSource::new(client.clone(), &providers.bolls_base_url));

        let resolver = ChapterResolver::new(
            catalog.clone(),
            normalizer.clone(),
            cdn.clone(),
            bible_api.clone(),
            bolls.clone(),
        );
        let search = SearchAggregator::new(catalog.clone(), normalizer, cdn, bible_api, bolls);
        let votd = VotdSelector::new(
            client,
            &providers.votd_dataset_url,
            &providers.bible_api_base_url,
        );

        Ok(Self {
            catalog,
            resolver,
            search,
            votd,
            store,
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| SelahError::Config("Could not find data directory".into()))?;
        let selah_dir = data_dir.join("selah");
        std::fs::create_dir_all(&selah_dir)?;
        Ok(selah_dir.join("selah.db"))
    }
}
