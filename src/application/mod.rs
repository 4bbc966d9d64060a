pub mod ingest;
pub mod recall;
pub mod stats;
