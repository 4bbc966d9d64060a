use crate::domain::entities::screenshot::ScreenshotDocument;
use crate::domain::error::StoreError;
use crate::store::DocumentStore;
use base64::prelude::*;
use std::sync::Arc;
use tracing::info;

pub struct IngestUseCase {
    store: Arc<DocumentStore<ScreenshotDocument>>,
}

impl IngestUseCase {
    pub fn new(store: Arc<DocumentStore<ScreenshotDocument>>) -> Self {
        Self { store }
    }

    /// Stores one capture: the description is the indexing text, the raw
    /// image bytes (when present) ride along base64-encoded as part of the
    /// payload.
    pub async fn execute(
        &self,
        description: String,
        image_bytes: Option<&[u8]>,
    ) -> Result<ScreenshotDocument, StoreError> {
        let encoded_image = image_bytes
            .map(|b| BASE64_STANDARD.encode(b))
            .unwrap_or_default();

        let document = ScreenshotDocument::new(description, encoded_image);
        self.store
            .add(document.clone(), &document.description)
            .await?;
        info!(size = self.store.len(), "capture ingested");
        Ok(document)
    }
}
