use crate::domain::entities::screenshot::ScreenshotDocument;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::store::DocumentStore;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub documents: usize,
    /// Dimensionality of the stored embeddings, absent while the store is
    /// empty.
    pub dimension: Option<usize>,
    /// Dimensionality the current provider advertises, 0 when unknown.
    pub provider_dimension: usize,
    /// Stored and provider dimensionalities disagree; recall against this
    /// store will fail until it is rebuilt with the current provider.
    pub dimension_drift: bool,
}

pub struct StatsUseCase {
    store: Arc<DocumentStore<ScreenshotDocument>>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl StatsUseCase {
    pub fn new(
        store: Arc<DocumentStore<ScreenshotDocument>>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self { store, embedder }
    }

    pub fn execute(&self) -> StoreStats {
        let dimension = self.store.dimension();
        let provider_dimension = self.embedder.dimension();
        let dimension_drift = match dimension {
            Some(d) => provider_dimension != 0 && provider_dimension != d,
            None => false,
        };
        StoreStats {
            documents: self.store.len(),
            dimension,
            provider_dimension,
            dimension_drift,
        }
    }
}
