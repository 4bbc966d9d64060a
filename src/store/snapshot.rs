//! On-disk snapshot format: a matched pair of JSON artifacts inside a
//! snapshot directory, `documents.json` and `embeddings.json`, with
//! `items[i]` of one corresponding to `items[i]` of the other.

use crate::domain::error::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DOCUMENTS_FILE: &str = "documents.json";
const EMBEDDINGS_FILE: &str = "embeddings.json";
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Artifact<T> {
    version: u32,
    items: Vec<T>,
}

/// Writes both artifacts, all-or-nothing: serialize fully in memory first,
/// then write each to a `.tmp` sibling and rename into place. A failure
/// before the renames leaves any prior snapshot intact.
pub(crate) fn save<D: Serialize>(
    dir: &Path,
    documents: &[D],
    embeddings: &[Vec<f32>],
) -> Result<(), StoreError> {
    fs::create_dir_all(dir)
        .map_err(|e| StoreError::Persistence(format!("create {}: {e}", dir.display())))?;

    let doc_bytes = serde_json::to_vec_pretty(&Artifact {
        version: SNAPSHOT_VERSION,
        items: documents.iter().collect::<Vec<_>>(),
    })
    .map_err(|e| StoreError::Persistence(format!("serialize documents: {e}")))?;

    let vec_bytes = serde_json::to_vec_pretty(&Artifact {
        version: SNAPSHOT_VERSION,
        items: embeddings.to_vec(),
    })
    .map_err(|e| StoreError::Persistence(format!("serialize embeddings: {e}")))?;

    let doc_path = dir.join(DOCUMENTS_FILE);
    let vec_path = dir.join(EMBEDDINGS_FILE);
    let doc_tmp = tmp_sibling(&doc_path);
    let vec_tmp = tmp_sibling(&vec_path);

    let result = write_pair(&doc_tmp, &doc_bytes, &vec_tmp, &vec_bytes, &doc_path, &vec_path);
    if result.is_err() {
        let _ = fs::remove_file(&doc_tmp);
        let _ = fs::remove_file(&vec_tmp);
    }
    result
}

fn write_pair(
    doc_tmp: &Path,
    doc_bytes: &[u8],
    vec_tmp: &Path,
    vec_bytes: &[u8],
    doc_path: &Path,
    vec_path: &Path,
) -> Result<(), StoreError> {
    fs::write(doc_tmp, doc_bytes)
        .map_err(|e| StoreError::Persistence(format!("write {}: {e}", doc_tmp.display())))?;
    fs::write(vec_tmp, vec_bytes)
        .map_err(|e| StoreError::Persistence(format!("write {}: {e}", vec_tmp.display())))?;
    fs::rename(doc_tmp, doc_path)
        .map_err(|e| StoreError::Persistence(format!("rename {}: {e}", doc_path.display())))?;
    fs::rename(vec_tmp, vec_path)
        .map_err(|e| StoreError::Persistence(format!("rename {}: {e}", vec_path.display())))?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Reads back the artifact pair. `Ok(None)` when no snapshot exists at the
/// location; `CorruptStore` when the pair is incomplete, unparseable, of an
/// unknown version, length-mismatched, or holds non-uniform embedding
/// dimensions.
pub(crate) fn load<D: DeserializeOwned>(
    dir: &Path,
) -> Result<Option<(Vec<D>, Vec<Vec<f32>>)>, StoreError> {
    let doc_path = dir.join(DOCUMENTS_FILE);
    let vec_path = dir.join(EMBEDDINGS_FILE);

    match (doc_path.exists(), vec_path.exists()) {
        (false, false) => return Ok(None),
        (true, true) => {}
        (true, false) => {
            return Err(StoreError::CorruptStore(format!(
                "snapshot at {} has documents but no embeddings artifact",
                dir.display()
            )));
        }
        (false, true) => {
            return Err(StoreError::CorruptStore(format!(
                "snapshot at {} has embeddings but no documents artifact",
                dir.display()
            )));
        }
    }

    let documents: Artifact<D> = read_artifact(&doc_path)?;
    let embeddings: Artifact<Vec<f32>> = read_artifact(&vec_path)?;

    if documents.items.len() != embeddings.items.len() {
        return Err(StoreError::CorruptStore(format!(
            "artifact pair is mismatched: {} documents vs {} embeddings",
            documents.items.len(),
            embeddings.items.len()
        )));
    }

    if let Some(first) = embeddings.items.first() {
        let dim = first.len();
        if dim == 0 || embeddings.items.iter().any(|e| e.len() != dim) {
            return Err(StoreError::CorruptStore(
                "embeddings artifact holds vectors of inconsistent dimensionality".into(),
            ));
        }
    }

    Ok(Some((documents.items, embeddings.items)))
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<Artifact<T>, StoreError> {
    let bytes = fs::read(path)
        .map_err(|e| StoreError::Persistence(format!("read {}: {e}", path.display())))?;
    let artifact: Artifact<T> = serde_json::from_slice(&bytes).map_err(|e| {
        StoreError::CorruptStore(format!("malformed artifact {}: {e}", path.display()))
    })?;
    if artifact.version != SNAPSHOT_VERSION {
        return Err(StoreError::CorruptStore(format!(
            "unsupported snapshot version {} in {}",
            artifact.version,
            path.display()
        )));
    }
    Ok(artifact)
}
