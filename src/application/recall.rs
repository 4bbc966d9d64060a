use crate::domain::entities::screenshot::ScreenshotDocument;
use crate::domain::error::StoreError;
use crate::store::DocumentStore;
use std::sync::Arc;

pub struct RecallUseCase {
    store: Arc<DocumentStore<ScreenshotDocument>>,
}

impl RecallUseCase {
    pub fn new(store: Arc<DocumentStore<ScreenshotDocument>>) -> Self {
        Self { store }
    }

    /// Top-k captures most similar to the query, best first.
    pub async fn execute(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<ScreenshotDocument>, StoreError> {
        self.store.search(query, top_k).await
    }
}
