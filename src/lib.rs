pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod store;

use crate::application::ingest::IngestUseCase;
use crate::application::recall::RecallUseCase;
use crate::application::stats::{StatsUseCase, StoreStats};
use crate::domain::entities::screenshot::ScreenshotDocument;
use crate::domain::error::StoreError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::store::DocumentStore;
use std::path::Path;
use std::sync::Arc;

pub struct ScreenRecall {
    store: Arc<DocumentStore<ScreenshotDocument>>,
    ingest_uc: IngestUseCase,
    recall_uc: RecallUseCase,
    stats_uc: StatsUseCase,
}

impl ScreenRecall {
    /// Builds a recall instance with an OpenAI-compatible embedding provider
    /// configured from the environment. Setting
    /// `SCREENRECALL_EMBEDDING_BASE_URL` to a local LM Studio endpoint works
    /// with the same adapter.
    pub fn new() -> Self {
        let api_key = std::env::var("SCREENRECALL_EMBEDDING_API_KEY").unwrap_or_default();
        let model = std::env::var("SCREENRECALL_EMBEDDING_MODEL").ok();
        let base_url = std::env::var("SCREENRECALL_EMBEDDING_BASE_URL").ok();

        let embedder: Arc<dyn EmbeddingProvider> =
            Arc::new(OpenAiProvider::new(api_key, model, base_url));
        Self::with_provider(embedder)
    }

    pub fn with_provider(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        let store = Arc::new(DocumentStore::new(embedder.clone()));
        Self {
            ingest_uc: IngestUseCase::new(store.clone()),
            recall_uc: RecallUseCase::new(store.clone()),
            stats_uc: StatsUseCase::new(store.clone(), embedder),
            store,
        }
    }

    pub async fn ingest(
        &self,
        description: String,
        image_bytes: Option<&[u8]>,
    ) -> Result<ScreenshotDocument, StoreError> {
        self.ingest_uc.execute(description, image_bytes).await
    }

    pub async fn recall(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<ScreenshotDocument>, StoreError> {
        self.recall_uc.execute(query, top_k).await
    }

    pub fn stats(&self) -> StoreStats {
        self.stats_uc.execute()
    }

    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        self.store.save(dir)
    }

    pub fn load(&self, dir: &Path) -> Result<(), StoreError> {
        self.store.load(dir)
    }

    pub fn store(&self) -> &DocumentStore<ScreenshotDocument> {
        &self.store
    }
}

impl Default for ScreenRecall {
    fn default() -> Self {
        Self::new()
    }
}
