mod update;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::update::{run_update, UpdateOptions};

#[derive(Debug, Parser)]
#[command(name = "clearance-cli")]
#[command(about = "Export the clearance stock sheet as JSON for the storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the clearance tab and write the JSON feed (the default)
    Update {
        /// Write the feed here instead of `CLEARANCE_OUTPUT_PATH`
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the feed to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    fn into_options(self) -> UpdateOptions {
        match self {
            Commands::Update { output, dry_run } => UpdateOptions { output, dry_run },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = clearance_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let options = cli
        .command
        .map(Commands::into_options)
        .unwrap_or_default();

    let summary = run_update(&config, &options).await?;
    if !summary.header_found {
        tracing::warn!("clearance header row missing; feed has no products");
    }
    match &summary.written_to {
        Some(path) => tracing::info!(
            count = summary.product_count,
            path = %path.display(),
            "update complete"
        ),
        None => tracing::info!(count = summary.product_count, "dry run complete"),
    }
    Ok(())
}
