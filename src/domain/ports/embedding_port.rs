use crate::domain::error::StoreError;

/// Capability the store consumes to turn text into a vector. The store never
/// selects or configures the model; it only requires that one provider
/// instance returns a consistent dimensionality.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, StoreError>;

    /// Advertised model dimensionality, 0 when unknown. Informational only;
    /// the store derives its actual dimensionality from the first accepted
    /// embedding.
    fn dimension(&self) -> usize;
}
