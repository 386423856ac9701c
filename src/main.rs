use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use songprint::config::Config;
use songprint::dictionary::{download, Dictionary};

/// songprint: find the words that belong to exactly one song on an album.
///
/// Run with no arguments inside a folder of "<Artist> - <Album>" directories
/// to write one JSON summary per album into ./JSON.
#[derive(Parser)]
#[command(name = "songprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every album directory (the default when no command is given)
    Run {
        /// Directory containing "<Artist> - <Album>" subdirectories (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Where to write album records (default: JSON under the albums directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Download the reference word list
    DownloadDictionary {
        /// Re-download even if a cached copy exists
        #[arg(long)]
        force: bool,
    },

    /// Show the normalized word set of a single lyric file
    Inspect {
        /// The lyric file to inspect
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("songprint=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command.unwrap_or(Commands::Run {
        dir: None,
        output: None,
    }) {
        Commands::Run { dir, output } => {
            let root = match dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("Failed to read current directory")?,
            };
            let output_dir = match output {
                Some(output) => output,
                None => config.output_dir_for(&root),
            };

            let dictionary = load_dictionary(&config).await?;

            info!(root = %root.display(), output = %output_dir.display(), "Starting batch");
            let report = songprint::pipeline::batch::run(&root, &output_dir, &dictionary)?;

            songprint::output::terminal::display_batch_report(&report);
            if report.is_clean() && !report.written.is_empty() {
                println!(
                    "\n{}",
                    format!("JSON results written to: {}", output_dir.display()).bold()
                );
            }
        }

        Commands::DownloadDictionary { force } => {
            println!("Downloading reference word list...");
            println!("  Destination: {}", config.data_dir.display());

            let path =
                download::download_dictionary(&config.dictionary_url, &config.data_dir, force)
                    .await?;
            let dictionary = Dictionary::load(&path)?;

            println!(
                "\n{}",
                format!("Word list ready ({} words).", dictionary.len()).bold()
            );
        }

        Commands::Inspect { file } => {
            let dictionary = load_dictionary(&config).await?;
            let song = songprint::album::aggregate::load_song(&file, &dictionary)?;
            songprint::output::terminal::display_word_set(&song.title, &song.words);
        }
    }

    Ok(())
}

/// Load the reference dictionary once for the whole run.
///
/// A configured local word list wins; otherwise the cached download is used,
/// fetching it first if this is the first run.
async fn load_dictionary(config: &Config) -> Result<Dictionary> {
    config.require_dictionary()?;

    let path = match &config.dictionary_path {
        Some(path) => path.clone(),
        None => {
            if !download::dictionary_present(&config.data_dir) {
                println!("Reference word list not cached yet, fetching it once...");
            }
            download::ensure_dictionary(&config.dictionary_url, &config.data_dir).await?
        }
    };

    Dictionary::load(&path)
        .with_context(|| format!("Failed to load reference dictionary from {}", path.display()))
}
