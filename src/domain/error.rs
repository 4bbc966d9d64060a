use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dimension mismatch: store holds {expected}-dimensional embeddings, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding provider error: {0}")]
    EmbeddingProvider(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Corrupt store: {0}")]
    CorruptStore(String),
}
