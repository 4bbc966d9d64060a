use crate::domain::error::StoreError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible `/v1/embeddings` client. Pointing `base_url` at a local
/// LM Studio server works unchanged; only the model name differs.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct EmbeddingsRequest {
    input: String,
    model: String,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "text-embedding-3-small".to_string()),
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".to_string()),
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "text-embedding-3-small" | "text-embedding-ada-002" => 1536,
            "text-embedding-3-large" => 3072,
            _ => 0,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, StoreError> {
        let url = format!("{}/v1/embeddings", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                input: text.to_string(),
                model: self.model.clone(),
            })
            .send()
            .await
            .map_err(|e| StoreError::EmbeddingProvider(format!("embeddings API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::EmbeddingProvider(format!(
                "embeddings API {status}: {body}"
            )));
        }

        let result: EmbeddingsResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::EmbeddingProvider(format!("parse error: {e}")))?;

        result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| StoreError::EmbeddingProvider("response carried no embedding".into()))
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }
}
