use clap::Parser;
use screenrecall::cli::commands::{Cli, Commands};
use screenrecall::ScreenRecall;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store_dir: PathBuf = std::env::var("SCREENRECALL_STORE")
        .unwrap_or_else(|_| "./stores".into())
        .into();

    let sr = ScreenRecall::new();
    if let Err(e) = sr.load(&store_dir) {
        eprintln!("Error loading store: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run_command(&sr, &store_dir, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    sr: &ScreenRecall,
    store_dir: &PathBuf,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Ingest { description, image } => {
            let image_bytes = match &image {
                Some(path) => Some(std::fs::read(path)?),
                None => None,
            };
            let document = sr.ingest(description, image_bytes.as_deref()).await?;
            sr.save(store_dir)?;
            println!(
                "Stored capture from {} ({} documents total)",
                document.captured_at.to_rfc3339(),
                sr.store().len()
            );
        }
        Commands::Recall {
            query,
            top_k,
            with_images,
        } => {
            let documents = sr.recall(&query, top_k).await?;
            if documents.is_empty() {
                println!("No captures stored yet.");
                return Ok(());
            }
            if with_images {
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else {
                for (i, doc) in documents.iter().enumerate() {
                    println!("{}. [{}] {}", i + 1, doc.captured_at.to_rfc3339(), doc.description);
                }
            }
        }
        Commands::Stats => {
            let stats = sr.stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
