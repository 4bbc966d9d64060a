mod common;

use common::StubProvider;
use screenrecall::domain::error::StoreError;
use screenrecall::store::DocumentStore;
use std::sync::Arc;

fn ranking_store() -> DocumentStore<String> {
    DocumentStore::new(Arc::new(StubProvider::new(&[
        ("doc1", &[1.0, 0.0]),
        ("doc2", &[0.0, 1.0]),
        ("doc3", &[1.0, 1.0]),
        ("query", &[1.0, 0.0]),
    ])))
}

#[tokio::test]
async fn test_ranking_by_cosine_similarity() {
    let store = ranking_store();
    store.add("doc1".into(), "doc1").await.unwrap();
    store.add("doc2".into(), "doc2").await.unwrap();
    store.add("doc3".into(), "doc3").await.unwrap();

    let results = store.search("query", 3).await.unwrap();
    assert_eq!(results, vec!["doc1", "doc3", "doc2"]);
}

#[tokio::test]
async fn test_tie_break_keeps_insertion_order() {
    // Same direction, different magnitude: both score exactly 1.0.
    let store: DocumentStore<String> = DocumentStore::new(Arc::new(StubProvider::new(&[
        ("first", &[1.0, 0.0]),
        ("second", &[2.0, 0.0]),
        ("query", &[1.0, 0.0]),
    ])));
    store.add("first".into(), "first").await.unwrap();
    store.add("second".into(), "second").await.unwrap();

    let results = store.search("query", 2).await.unwrap();
    assert_eq!(results, vec!["first", "second"]);
}

#[tokio::test]
async fn test_top_k_larger_than_store_returns_all() {
    let store = ranking_store();
    store.add("doc1".into(), "doc1").await.unwrap();
    store.add("doc2".into(), "doc2").await.unwrap();

    let results = store.search("query", 10).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_top_k_truncates() {
    let store = ranking_store();
    store.add("doc1".into(), "doc1").await.unwrap();
    store.add("doc2".into(), "doc2").await.unwrap();
    store.add("doc3".into(), "doc3").await.unwrap();

    let results = store.search("query", 1).await.unwrap();
    assert_eq!(results, vec!["doc1"]);
}

#[tokio::test]
async fn test_top_k_zero_returns_empty() {
    let store = ranking_store();
    store.add("doc1".into(), "doc1").await.unwrap();

    let results = store.search("query", 0).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_empty_store_returns_empty() {
    let store = ranking_store();
    let results = store.search("query", 5).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_zero_norm_document_ranks_last() {
    let store: DocumentStore<String> = DocumentStore::new(Arc::new(StubProvider::new(&[
        ("zero", &[0.0, 0.0]),
        ("opposite", &[-1.0, 0.0]),
        ("aligned", &[1.0, 0.0]),
        ("query", &[1.0, 0.0]),
    ])));
    store.add("zero".into(), "zero").await.unwrap();
    store.add("opposite".into(), "opposite").await.unwrap();
    store.add("aligned".into(), "aligned").await.unwrap();

    // Even a similarity of -1.0 outranks the undefined zero-norm entry.
    let results = store.search("query", 3).await.unwrap();
    assert_eq!(results, vec!["aligned", "opposite", "zero"]);
}

#[tokio::test]
async fn test_zero_norm_query_is_invalid() {
    let store: DocumentStore<String> = DocumentStore::new(Arc::new(StubProvider::new(&[
        ("doc", &[1.0, 0.0]),
        ("query", &[0.0, 0.0]),
    ])));
    store.add("doc".into(), "doc").await.unwrap();

    let err = store.search("query", 3).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_wrong_dimension_query_is_invalid() {
    let store: DocumentStore<String> = DocumentStore::new(Arc::new(StubProvider::new(&[
        ("doc", &[1.0, 0.0, 0.0]),
        ("query", &[1.0, 0.0]),
    ])));
    store.add("doc".into(), "doc").await.unwrap();

    let err = store.search("query", 3).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_repeated_search_is_deterministic() {
    let store = ranking_store();
    store.add("doc1".into(), "doc1").await.unwrap();
    store.add("doc2".into(), "doc2").await.unwrap();
    store.add("doc3".into(), "doc3").await.unwrap();

    let first = store.search("query", 3).await.unwrap();
    for _ in 0..5 {
        assert_eq!(store.search("query", 3).await.unwrap(), first);
    }
}
