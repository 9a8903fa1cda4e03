pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::catalog_search::CatalogSearchUseCase;
use crate::application::import::{ImportSummary, ImportUseCase};
use crate::application::interactions::InteractionUseCase;
use crate::application::personalize::PersonalizedUseCase;
use crate::application::similar::SimilarBooksUseCase;
use crate::application::stats::{CatalogStats, StatsUseCase};
use crate::config::Config;
use crate::domain::entities::book::Recommendation;
use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::artifact_store::ArtifactStore;
use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::interaction_log::InteractionLog;
use crate::domain::ports::seed_shuffler::SeedShuffler;
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::values::action::Action;
use crate::domain::values::metric::Metric;
use crate::infrastructure::flatfile::artifact_files::{read_books, read_vectors};
use crate::infrastructure::flatfile::interaction_log::CsvInteractionLog;
use crate::infrastructure::memory::catalog::InMemoryCatalog;
use crate::infrastructure::memory::knn_index::BruteForceIndex;
use crate::infrastructure::random::shufflers::{SeededShuffler, ThreadRngShuffler};
use crate::infrastructure::sqlite::artifact_store::SqliteArtifactStore;
use std::path::Path;
use std::sync::Arc;

pub use crate::application::personalize::DEFAULT_PERSONAL_COUNT;
pub use crate::application::similar::DEFAULT_SIMILAR_COUNT;

pub struct BookRec {
    similar_uc: Arc<SimilarBooksUseCase>,
    personal_uc: PersonalizedUseCase,
    interactions_uc: InteractionUseCase,
    search_uc: CatalogSearchUseCase,
    stats_uc: StatsUseCase,
}

impl BookRec {
    /// Loads artifacts and opens the interaction log named by `config`.
    pub fn open(config: &Config) -> Result<Self, DomainError> {
        let store = SqliteArtifactStore::open_read_only(&config.artifacts_path)?;
        let log: Arc<dyn InteractionLog> = Arc::new(CsvInteractionLog::new(&config.user_log_path));
        let shuffler: Arc<dyn SeedShuffler> = match config.shuffle_seed {
            Some(seed) => Arc::new(SeededShuffler::new(seed)),
            None => Arc::new(ThreadRngShuffler),
        };
        Self::from_store(&store, log, shuffler)
    }

    /// Builds the in-memory catalog and index from `store`. Empty or inconsistent
    /// artifacts are fatal.
    pub fn from_store(
        store: &dyn ArtifactStore,
        log: Arc<dyn InteractionLog>,
        shuffler: Arc<dyn SeedShuffler>,
    ) -> Result<Self, DomainError> {
        let catalog = InMemoryCatalog::from_books(store.load_books()?);
        if catalog.is_empty() {
            return Err(DomainError::Artifact("Catalog is empty".into()));
        }
        let index = BruteForceIndex::new(store.metric()?, store.load_vectors()?)?;
        if index.is_empty() {
            return Err(DomainError::Artifact("Similarity index is empty".into()));
        }
        tracing::info!(
            books = catalog.len(),
            indexed = index.len(),
            dimension = index.dimension(),
            metric = %index.metric(),
            "loaded artifacts"
        );

        Ok(Self::with_parts(Arc::new(catalog), Arc::new(index), log, shuffler))
    }

    pub fn with_parts(
        catalog: Arc<dyn Catalog>,
        index: Arc<dyn SimilarityIndex>,
        log: Arc<dyn InteractionLog>,
        shuffler: Arc<dyn SeedShuffler>,
    ) -> Self {
        let similar_uc = Arc::new(SimilarBooksUseCase::new(catalog.clone(), index.clone()));
        Self {
            personal_uc: PersonalizedUseCase::new(log.clone(), similar_uc.clone(), shuffler),
            interactions_uc: InteractionUseCase::new(log),
            search_uc: CatalogSearchUseCase::new(catalog.clone()),
            stats_uc: StatsUseCase::new(catalog, index),
            similar_uc,
        }
    }

    /// Replaces the artifacts at `artifacts_path` with the given CSV inputs.
    pub fn import(
        artifacts_path: &str,
        books_csv: &Path,
        vectors_csv: &Path,
        metric: Metric,
    ) -> Result<ImportSummary, DomainError> {
        let store = Arc::new(SqliteArtifactStore::open_writable(artifacts_path)?);
        ImportUseCase::new(store).execute(read_books(books_csv)?, read_vectors(vectors_csv)?, metric)
    }

    // Delegating methods
    pub fn recommend_similar(&self, title: &str, count: usize) -> Result<Vec<Recommendation>, DomainError> {
        self.similar_uc.execute(title, count)
    }

    pub fn recommend_for_user(&self, user_id: &str, count: usize) -> Result<Vec<Recommendation>, DomainError> {
        self.personal_uc.execute(user_id, count)
    }

    /// Logs a `searched` event for `title`, then looks up its neighbors.
    pub fn search_and_recommend(
        &self,
        user_id: &str,
        title: &str,
        count: usize,
    ) -> Result<Vec<Recommendation>, DomainError> {
        self.interactions_uc.record(user_id, Action::Searched, title)?;
        self.similar_uc.execute(title, count)
    }

    pub fn like(&self, user_id: &str, title: &str) -> Result<InteractionEvent, DomainError> {
        self.interactions_uc.record(user_id, Action::Liked, title)
    }

    pub fn record(&self, user_id: &str, action: Action, title: &str) -> Result<InteractionEvent, DomainError> {
        self.interactions_uc.record(user_id, action, title)
    }

    pub fn history(&self, user_id: &str) -> Result<Vec<InteractionEvent>, DomainError> {
        self.interactions_uc.history(user_id)
    }

    pub fn search_titles(&self, text: &str, limit: Option<usize>) -> Vec<String> {
        self.search_uc.search(text, limit)
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats_uc.stats()
    }
}
