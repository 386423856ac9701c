// Batch pipeline: process every "<Artist> - <Album>" directory under a root.
//
// Each album is independent. A failure in one album is logged and recorded in
// the report, and the batch moves on to the next directory. Only failing to
// create the output directory stops the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info, warn};

use crate::album::aggregate;
use crate::dictionary::traits::Vocabulary;
use crate::output;

/// Separator between artist and album in a directory name.
pub const ALBUM_SEPARATOR: &str = " - ";

/// An album that was processed and written.
#[derive(Debug, Clone)]
pub struct WrittenAlbum {
    pub directory: String,
    pub path: PathBuf,
    pub song_count: usize,
    pub unique_word_count: usize,
}

/// An album directory that failed, with the error that stopped it.
#[derive(Debug)]
pub struct AlbumFailure {
    pub directory: String,
    pub error: anyhow::Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<WrittenAlbum>,
    pub failures: Vec<AlbumFailure>,
    /// Subdirectories whose names don't look like "<Artist> - <Album>"
    pub skipped: usize,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Split a directory name into (artist, album) at the first separator.
///
/// Returns `None` for names without a separator; both halves are trimmed.
pub fn parse_album_dir_name(name: &str) -> Option<(String, String)> {
    let (artist, album) = name.split_once(ALBUM_SEPARATOR)?;
    Some((artist.trim().to_string(), album.trim().to_string()))
}

/// Run the batch over `root`, writing one JSON record per album into `output_dir`.
pub fn run(root: &Path, output_dir: &Path, vocabulary: &dyn Vocabulary) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;
    let output_canonical = std::fs::canonicalize(output_dir).ok();

    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to list directory: {}", root.display()))?;

    let mut dirs: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if output_canonical.is_some() && std::fs::canonicalize(&path).ok() == output_canonical {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => dirs.push((name, path)),
            Err(name) => debug!(name = ?name, "Skipping directory with non-UTF-8 name"),
        }
    }
    dirs.sort();

    let mut report = BatchReport::default();

    for (name, path) in dirs {
        let Some((artist, album)) = parse_album_dir_name(&name) else {
            debug!(directory = %name, "Not an album directory, skipping");
            report.skipped += 1;
            continue;
        };

        println!("\nProcessing album: {artist} - {album}");

        match process_and_write(&name, &path, &artist, &album, output_dir, vocabulary) {
            Ok(written) => {
                info!(
                    directory = %name,
                    songs = written.song_count,
                    unique_words = written.unique_word_count,
                    "Album written"
                );
                println!("  Written to: {}", written.path.display());
                report.written.push(written);
            }
            Err(e) => {
                let message = format!("{e:#}");
                warn!(directory = %name, error = %message, "Album failed");
                println!("  {} processing '{}': {}", "Error".red(), name, message);
                report.failures.push(AlbumFailure {
                    directory: name,
                    error: e,
                });
            }
        }
    }

    Ok(report)
}

/// Aggregate one album and write its record.
fn process_and_write(
    name: &str,
    dir: &Path,
    artist: &str,
    album: &str,
    output_dir: &Path,
    vocabulary: &dyn Vocabulary,
) -> Result<WrittenAlbum> {
    let record = aggregate::process_album(dir, artist, album, vocabulary)?;
    let path = output::write_record(&record, output_dir)?;

    Ok(WrittenAlbum {
        directory: name.to_string(),
        path,
        song_count: record.songs.len(),
        unique_word_count: record.unique_word_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_album_dir_name() {
        assert_eq!(
            parse_album_dir_name("Artist - Album"),
            Some(("Artist".to_string(), "Album".to_string()))
        );
    }

    #[test]
    fn test_parse_splits_at_first_separator() {
        assert_eq!(
            parse_album_dir_name("Sufjan Stevens - Illinois - Deluxe"),
            Some(("Sufjan Stevens".to_string(), "Illinois - Deluxe".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_names_without_separator() {
        assert_eq!(parse_album_dir_name("JSON"), None);
        assert_eq!(parse_album_dir_name("Artist-Album"), None);
    }

    #[test]
    fn test_report_is_clean_without_failures() {
        let report = BatchReport::default();
        assert!(report.is_clean());
    }
}
