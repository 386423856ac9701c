// Reference word list download helper.
//
// Fetches the NLTK `words` corpus (a zip archive holding the plain English
// lists `words/en` and `words/en-basic`), extracts both, and caches their
// union as a one-word-per-line file
// in a platform-appropriate directory
// (~/.local/share/songprint/dictionary/ on Linux) so it persists across runs.

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// NLTK data mirror for the English word corpus.
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/words.zip";

/// Entries inside the corpus archive; the dictionary is their union.
const ARCHIVE_ENTRIES: &[&str] = &["words/en", "words/en-basic"];

/// Cached word list file name.
const WORD_LIST_FILE: &str = "words.txt";

/// Local file header magic of a zip archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Returns the default directory for the cached word list.
/// Uses the platform data directory: ~/.local/share/songprint/dictionary/ on Linux.
pub fn default_dictionary_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("songprint")
        .join("dictionary")
}

/// Path of the cached word list inside `dir`.
pub fn dictionary_path(dir: &Path) -> PathBuf {
    dir.join(WORD_LIST_FILE)
}

/// Check whether the cached word list exists.
pub fn dictionary_present(dir: &Path) -> bool {
    dictionary_path(dir).exists()
}

/// Return the cached word list path, downloading it first if it's missing.
pub async fn ensure_dictionary(url: &str, dir: &Path) -> Result<PathBuf> {
    let path = dictionary_path(dir);
    if path.exists() {
        info!(path = %path.display(), "Dictionary already cached, skipping download");
        return Ok(path);
    }
    download_dictionary(url, dir, false).await
}

/// Download the word list into `dir`.
///
/// Skips the download when the file already exists unless `force` is set.
/// Creates directories as needed. Returns the path of the cached list.
pub async fn download_dictionary(url: &str, dir: &Path, force: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create dictionary directory: {}", dir.display()))?;

    let path = dictionary_path(dir);
    if path.exists() && !force {
        println!("  {} (already exists)", WORD_LIST_FILE);
        return Ok(path);
    }

    println!("  Downloading reference word list...");
    let bytes = download_bytes(url).await?;
    let words = extract_word_list(&bytes)?;

    std::fs::write(&path, words).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Cached word list from {} at {}", url, path.display());
    Ok(path)
}

/// Turn a downloaded body into a plain word list.
///
/// The NLTK corpus arrives zipped; a body that isn't a zip archive is taken
/// to already be a plain word list, which lets the URL point at a `.txt`.
pub fn extract_word_list(bytes: &[u8]) -> Result<String> {
    if !bytes.starts_with(ZIP_MAGIC) {
        return String::from_utf8(bytes.to_vec()).context("Word list is not valid UTF-8");
    }

    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("Failed to open word list archive")?;

    let mut words = String::new();
    for name in ARCHIVE_ENTRIES {
        let mut entry = archive
            .by_name(name)
            .with_context(|| format!("Archive has no `{name}` entry"))?;
        entry
            .read_to_string(&mut words)
            .with_context(|| format!("Failed to read `{name}` from archive"))?;
        if !words.ends_with('\n') {
            words.push('\n');
        }
    }
    Ok(words)
}

/// Download a URL into memory, showing a progress bar.
async fn download_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::new();
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        }
    };

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read response body")?
    {
        body.extend_from_slice(&chunk);
        pb.set_position(body.len() as u64);
    }
    pb.finish_and_clear();

    Ok(body)
}
