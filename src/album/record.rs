// AlbumRecord — the per-album summary written to disk.
//
// Field names are part of the output format consumed downstream, so they stay
// snake_case exactly as serialized.

use serde::{Deserialize, Serialize};

/// Unique-word summary for one album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub artist: String,
    pub album_title: String,
    /// Songs in track order
    pub songs: Vec<SongEntry>,
}

/// One song and the words that appear in no other song on its album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub song_title: String,
    /// Sorted ascending
    pub unique_words: Vec<String>,
}

impl AlbumRecord {
    /// Output file name: "<Artist> - <Album>.json".
    pub fn file_name(&self) -> String {
        format!("{} - {}.json", self.artist, self.album_title)
    }

    /// Total unique words across all songs.
    pub fn unique_word_count(&self) -> usize {
        self.songs.iter().map(|s| s.unique_words.len()).sum()
    }

    /// Look up a song by title.
    pub fn song(&self, title: &str) -> Option<&SongEntry> {
        self.songs.iter().find(|s| s.song_title == title)
    }
}
