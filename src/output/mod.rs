// Output — JSON album records on disk and terminal display.

pub mod terminal;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::album::record::AlbumRecord;

/// Write `record` as pretty-printed JSON into `dir`, returning the file path.
///
/// The file is named "<Artist> - <Album>.json"; an existing file is replaced.
pub fn write_record(record: &AlbumRecord, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(record.file_name());
    let json = serde_json::to_string_pretty(record).context("Failed to serialize album record")?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so accented titles never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
