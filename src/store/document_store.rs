use crate::domain::error::StoreError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::store::{similarity, snapshot};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// In-process vector store: two parallel, insertion-ordered collections of
/// opaque documents and their embeddings, joined by index. Append-only;
/// `load` replaces the whole state. Search is a brute-force O(n·d) cosine
/// scan — fine at screenshot-collection scale, an ANN index would be the
/// extension point if that ever stops being true.
pub struct DocumentStore<D> {
    embedder: Arc<dyn EmbeddingProvider>,
    inner: RwLock<Inner<D>>,
}

struct Inner<D> {
    documents: Vec<D>,
    embeddings: Vec<Vec<f32>>,
    /// Established by the first accepted embedding; every later insert must
    /// match it.
    dimension: Option<usize>,
}

impl<D> DocumentStore<D> {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedder,
            inner: RwLock::new(Inner {
                documents: Vec::new(),
                embeddings: Vec::new(),
                dimension: None,
            }),
        }
    }

    // Mutation under the write lock is append-only and cannot panic between
    // the two pushes, so a poisoned lock still guards a consistent pair.
    fn read(&self) -> RwLockReadGuard<'_, Inner<D>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<D>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().documents.is_empty()
    }

    /// Dimensionality of the stored embeddings, `None` while the store is
    /// empty and none has been established.
    pub fn dimension(&self) -> Option<usize> {
        self.read().dimension
    }

    /// Embeds `indexing_text` and appends the document with its embedding.
    /// The provider call happens outside the lock; the two appends happen
    /// under the write lock as one step, so a concurrent search never sees
    /// the collections at different lengths. On any failure the store is
    /// left exactly as it was.
    pub async fn add(&self, document: D, indexing_text: &str) -> Result<(), StoreError> {
        let embedding = self.embedder.embed(indexing_text).await?;
        if embedding.is_empty() {
            return Err(StoreError::EmbeddingProvider(
                "provider returned an empty embedding".into(),
            ));
        }

        let mut inner = self.write();
        if let Some(expected) = inner.dimension {
            if embedding.len() != expected {
                return Err(StoreError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                });
            }
        } else {
            inner.dimension = Some(embedding.len());
        }

        inner.documents.push(document);
        inner.embeddings.push(embedding);
        debug!(size = inner.documents.len(), "document added");
        Ok(())
    }

    /// Embeds the query and returns up to `top_k` documents ranked by cosine
    /// similarity, highest first. Equal scores keep insertion order (stable
    /// sort), so repeated identical queries return identical rankings.
    pub async fn search(&self, query_text: &str, top_k: usize) -> Result<Vec<D>, StoreError>
    where
        D: Clone,
    {
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query = self.embedder.embed(query_text).await?;

        let inner = self.read();
        if inner.documents.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(expected) = inner.dimension {
            if query.len() != expected {
                return Err(StoreError::InvalidQuery(format!(
                    "query embedding has dimension {}, store holds {expected}",
                    query.len()
                )));
            }
        }

        let query_norm = similarity::l2_norm(&query);
        if query_norm == 0.0 {
            return Err(StoreError::InvalidQuery(
                "query embedding has zero norm, similarity is undefined".into(),
            ));
        }

        let mut ranked: Vec<(usize, f64)> = inner
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, e)| (i, similarity::cosine(&query, query_norm, e)))
            .collect();

        // Stable sort: ties resolve to the earlier-inserted document.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let results: Vec<D> = ranked
            .iter()
            .take(top_k)
            .map(|(i, _)| inner.documents[*i].clone())
            .collect();
        debug!(candidates = ranked.len(), returned = results.len(), "search ranked");
        Ok(results)
    }

    /// Ordered snapshot of the stored payloads.
    pub fn documents(&self) -> Vec<D>
    where
        D: Clone,
    {
        self.read().documents.clone()
    }

    /// Serializes the current state as a matched artifact pair under `dir`.
    /// Never mutates the in-memory store; a mid-write failure leaves any
    /// prior snapshot in place.
    pub fn save(&self, dir: &Path) -> Result<(), StoreError>
    where
        D: Serialize,
    {
        let inner = self.read();
        snapshot::save(dir, &inner.documents, &inner.embeddings)?;
        debug!(size = inner.documents.len(), dir = %dir.display(), "snapshot saved");
        Ok(())
    }

    /// Replaces the whole in-memory state with the snapshot at `dir`. A
    /// missing snapshot is not an error — the store is left as it was. A
    /// corrupt snapshot is rejected without touching the current state.
    pub fn load(&self, dir: &Path) -> Result<(), StoreError>
    where
        D: DeserializeOwned,
    {
        let Some((documents, embeddings)) = snapshot::load(dir)? else {
            debug!(dir = %dir.display(), "no snapshot found, store unchanged");
            return Ok(());
        };

        let mut inner = self.write();
        inner.dimension = embeddings.first().map(Vec::len);
        inner.documents = documents;
        inner.embeddings = embeddings;
        debug!(size = inner.documents.len(), dir = %dir.display(), "snapshot loaded");
        Ok(())
    }
}
