use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::dictionary::download;

/// Default output directory, relative to the albums root.
pub const DEFAULT_OUTPUT_DIR: &str = "JSON";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// options override these values in main.rs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local word list to use instead of the downloaded corpus
    pub dictionary_path: Option<PathBuf>,
    /// Directory holding the cached word list
    pub data_dir: PathBuf,
    /// Where the word list is fetched from when not cached
    pub dictionary_url: String,
    /// Where album records are written. Relative paths resolve against the
    /// albums root.
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Everything has a default.
    pub fn load() -> Result<Self> {
        let dictionary_path = env::var("SONGPRINT_DICTIONARY")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let data_dir = env::var("SONGPRINT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| download::default_dictionary_dir());

        Ok(Self {
            dictionary_path,
            data_dir,
            dictionary_url: env::var("SONGPRINT_DICTIONARY_URL")
                .unwrap_or_else(|_| download::DEFAULT_DICTIONARY_URL.to_string()),
            output_dir: env::var("SONGPRINT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }

    /// Check that an explicitly configured word list actually exists.
    pub fn require_dictionary(&self) -> Result<()> {
        if let Some(path) = &self.dictionary_path {
            if !path.exists() {
                anyhow::bail!(
                    "SONGPRINT_DICTIONARY points to {}, which does not exist.\n\
                     Unset it to use the downloaded word list instead.",
                    path.display()
                );
            }
        }
        Ok(())
    }

    /// Resolve the output directory against the albums root.
    pub fn output_dir_for(&self, root: &std::path::Path) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            root.join(&self.output_dir)
        }
    }
}
