// Track discovery and naming.
//
// Lyric files are named like "03 Song Title.txt". The leading number is the
// track position and is stripped from the song title; files without one are
// placed after every numbered track.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File extensions recognized as lyric files (compared case-insensitively).
pub const LYRIC_EXTENSIONS: &[&str] = &["txt"];

/// Whether `path` has a recognized lyric extension.
///
/// Matches on the file name suffix, so a file called just ".txt" counts, and
/// a name that isn't valid UTF-8 is still recognized by its extension.
pub fn is_lyric_file(path: &Path) -> bool {
    let name = file_name_lossy(path).to_ascii_lowercase();
    LYRIC_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(*ext).is_some_and(|rest| rest.ends_with('.')))
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse the leading track number of a file name.
///
/// Numbers too large for a `u64` saturate rather than falling to the back.
pub fn track_number(file_name: &str) -> Option<u64> {
    let digits_end = file_name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(file_name.len());
    if digits_end == 0 {
        return None;
    }
    Some(file_name[..digits_end].parse().unwrap_or(u64::MAX))
}

/// Derive a song title: drop the extension, then any "<digits><whitespace>" prefix.
pub fn song_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let after_digits = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    let has_prefix = after_digits.len() < stem.len()
        && after_digits.starts_with(char::is_whitespace);

    if has_prefix {
        after_digits.trim().to_string()
    } else {
        stem.trim().to_string()
    }
}

/// Sort file names into track order: numbered tracks ascending, then the rest
/// in their existing relative order.
pub fn sort_by_track_number<T: AsRef<str>>(names: &mut [T]) {
    names.sort_by_key(|name| track_order(name.as_ref()));
}

/// Sort key putting numbered tracks first, ascending.
fn track_order(file_name: &str) -> (u8, u64) {
    match track_number(file_name) {
        Some(n) => (0, n),
        None => (1, 0),
    }
}

/// List the lyric files of an album directory in track order.
///
/// Files are first ordered by name so unnumbered tracks come out the same way
/// on every platform. Names that aren't valid UTF-8 are kept (ordered by their
/// lossy form) so reading them can fail the album instead of dropping a song.
pub fn list_tracks(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list album directory: {}", dir.display()))?;

    let mut tracks = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_lyric_file(&path) {
            tracks.push((file_name_lossy(&path), path));
        }
    }

    tracks.sort();
    tracks.sort_by_key(|(name, _)| track_order(name));

    Ok(tracks.into_iter().map(|(_, path)| path).collect())
}
