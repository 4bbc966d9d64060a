use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screenrecall", about = "Screenshot memory with semantic recall")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a capture description (and optionally the image it describes)
    Ingest {
        /// Description of what was on screen
        description: String,
        /// Path to the screenshot file, stored base64-encoded
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Find the captures most similar to a query
    Recall {
        query: String,
        #[arg(long, default_value = "3")]
        top_k: usize,
        /// Include the base64 image payloads in the output
        #[arg(long)]
        with_images: bool,
    },
    /// Show store statistics
    Stats,
}
