use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use title_card_bot::storage::{public_url, random_key, ObjectStore, PNG_CONTENT_TYPE};
use title_card_bot::{CardRenderer, Config, S3Store};

#[derive(Parser, Debug)]
#[command(name = "cardctl", about = "CLI for the title card bot", version)]
struct Cli {
    /// Override FONT_PATH
    #[arg(global = true, long, value_name = "PATH")]
    font: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a title card to a local PNG file
    Render {
        /// Card text
        text: String,
        /// Output path
        #[arg(long, value_name = "PATH", default_value = "card.png")]
        out: PathBuf,
    },
    /// List buckets on the configured object store
    Buckets,
    /// Render a title card, upload it and print its public URL
    Upload {
        /// Card text
        text: String,
        /// Override STORAGE_BUCKET
        #[arg(long)]
        bucket: Option<String>,
    },
}

const DEFAULT_FONT: &str = "./assets/fonts/DejaVuSans.ttf";

/// `--font` wins over `FONT_PATH`, which wins over the bundled font.
fn font_path(cli_font: Option<PathBuf>, env_font: Option<String>) -> PathBuf {
    cli_font
        .or_else(|| env_font.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { text, out } => {
            let font = font_path(cli.font, std::env::var("FONT_PATH").ok());
            let renderer = CardRenderer::from_file(font)?;
            let png = renderer.render(&text)?;
            tokio::fs::write(&out, &png).await?;
            println!("Wrote {} ({} bytes)", out.display(), png.len());
        }
        Commands::Buckets => {
            let conf = Config::new()?;
            let store = S3Store::from_config(&conf);
            let buckets = store.list_buckets().await?;
            if buckets.is_empty() {
                eprintln!("No buckets found");
            }
            for name in buckets {
                println!("{}", name);
            }
        }
        Commands::Upload { text, bucket } => {
            let conf = Config::new()?;
            let bucket = bucket.unwrap_or_else(|| conf.storage_bucket.clone());
            let font = font_path(cli.font, Some(conf.font_path.clone()));
            let renderer = CardRenderer::from_file(font)?;
            let png = renderer.render(&text)?;
            let key = random_key();
            let store = S3Store::from_config(&conf);
            store.put_object(&bucket, &key, png, PNG_CONTENT_TYPE, true).await?;
            println!("{}", public_url(&conf.storage_url, &bucket, &key));
        }
    }

    Ok(())
}
