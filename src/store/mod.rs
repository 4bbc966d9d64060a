pub mod document_store;
mod similarity;
mod snapshot;

pub use document_store::DocumentStore;
