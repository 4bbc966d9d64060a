//! Shared test helpers.
#![allow(dead_code)]

use screenrecall::domain::error::StoreError;
use screenrecall::domain::ports::embedding_port::EmbeddingProvider;
use std::collections::HashMap;

/// Provider returning pre-programmed embeddings per input text. Unknown
/// texts fail the way a provider outage would.
pub struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubProvider {
    pub fn new(pairs: &[(&str, &[f32])]) -> Self {
        Self {
            vectors: pairs
                .iter()
                .map(|(text, v)| (text.to_string(), v.to_vec()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, StoreError> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| StoreError::EmbeddingProvider(format!("no stub embedding for {text:?}")))
    }

    fn dimension(&self) -> usize {
        self.vectors.values().next().map(Vec::len).unwrap_or(0)
    }
}

/// Provider that always fails.
pub struct FailingProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, StoreError> {
        Err(StoreError::EmbeddingProvider("provider unavailable".into()))
    }

    fn dimension(&self) -> usize {
        0
    }
}

/// Provider that returns an empty vector, as a misbehaving backend might.
pub struct EmptyProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for EmptyProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, StoreError> {
        Ok(Vec::new())
    }

    fn dimension(&self) -> usize {
        0
    }
}
