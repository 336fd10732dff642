//! Boomerang CLI: drive the media vendor directly, without the proxy server.
//!
//! Reads CLOUD_NAME, API_KEY and API_SECRET from the environment (or `.env`).

use anyhow::Context;
use boomerang_cli::{init_tracing, plan_download, print_json};
use boomerang_core::MediaConfig;
use boomerang_media::{CloudinaryClient, MediaApi};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boomerang", about = "Turn short clips into looping boomerangs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List processed clips
    List,
    /// Upload a clip and apply the boomerang recipe
    Upload {
        /// Path to an .mp4 file
        file: PathBuf,
    },
    /// Delete one or more clips in a single batch
    Delete {
        /// Vendor public ids, e.g. boomerang-videos/abc123
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Download a processed clip as {asset_id}.{format}
    Download {
        /// Vendor public id
        public_id: String,
        /// Destination directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = MediaConfig::from_lookup(|key| std::env::var(key).ok())
        .context("Failed to load media configuration. Set CLOUD_NAME, API_KEY and API_SECRET")?;
    let client = CloudinaryClient::new(config).context("Failed to create media client")?;

    match cli.command {
        Commands::List => {
            let list = client.list_uploads().await?;
            print_json(&list)?;
        }
        Commands::Upload { file } => {
            let resource = client.upload_and_transform(&file).await?;
            print_json(&resource)?;
        }
        Commands::Delete { ids } => {
            let result = client.delete_uploads(&ids).await?;
            print_json(&result)?;
        }
        Commands::Download { public_id, out } => {
            let list = client.list_uploads().await?;
            let plan = plan_download(&list, &public_id, &out)?;
            let data = client.download(&plan.url).await?;
            tokio::fs::create_dir_all(&out)
                .await
                .with_context(|| format!("Create {}", out.display()))?;
            tokio::fs::write(&plan.destination, &data)
                .await
                .with_context(|| format!("Write {}", plan.destination.display()))?;
            tracing::info!(
                path = %plan.destination.display(),
                bytes = data.len(),
                "Clip downloaded"
            );
        }
    }

    Ok(())
}
