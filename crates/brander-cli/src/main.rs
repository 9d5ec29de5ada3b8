//! Brander CLI: command-line client for the branding service.
//!
//! `submit` talks to a running API (BRANDER_API_URL or API_URL); `local` runs the
//! pipeline in-process against a storage directory.

use anyhow::Context;
use brander_cli::api_client::ApiClient;
use brander_cli::init_tracing;
use brander_cli::offline::{self, OfflineJob};
use brander_core::{BrandRequest, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brander", about = "Brand images with the company watermark")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file through the API and brand it
    Submit {
        /// Image or zip archive to brand
        file: PathBuf,
        /// Address that receives the results email
        #[arg(long)]
        email: String,
        /// API base URL (overrides BRANDER_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Brand a file offline against a local storage directory
    Local {
        /// Image or zip archive to brand
        file: PathBuf,
        /// Directory used as the bucket
        #[arg(long)]
        storage_dir: PathBuf,
        /// Directory containing the overlays under their configured key names
        #[arg(long)]
        watermarks: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            file,
            email,
            api_url,
        } => {
            let client = match api_url {
                Some(url) => ApiClient::new(url)?,
                None => ApiClient::from_env()?,
            };

            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .with_context(|| format!("Not a file path: {}", file.display()))?;
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let upload_url = client.presign(&filename).await?;
            client.upload(&upload_url, data).await?;
            tracing::info!(key = %filename, "File uploaded");

            let html = client
                .brand(&BrandRequest::new(filename, email))
                .await?;
            println!("{}", html);
        }
        Commands::Local {
            file,
            storage_dir,
            watermarks,
        } => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let html = offline::run(
                &config,
                OfflineJob {
                    file,
                    storage_dir,
                    watermarks,
                },
            )
            .await?;
            println!("{}", html);
        }
    }

    Ok(())
}
