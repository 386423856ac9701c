// Album aggregation — which words belong to exactly one song.
//
// Every song's lyrics are expanded and normalized into a word set. A word
// index then maps each word to the songs that use it; a word is unique to a
// song when the index lists that song alone.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::record::{AlbumRecord, SongEntry};
use super::tracks;
use crate::dictionary::traits::Vocabulary;
use crate::lyrics::{normalize, repetition};

/// A song's title and normalized word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub words: BTreeSet<String>,
}

impl Song {
    /// Build a song from raw lyrics: expand repetitions, then normalize.
    pub fn from_lyrics(title: impl Into<String>, lyrics: &str, vocabulary: &dyn Vocabulary) -> Self {
        let expanded = repetition::expand_repetitions(lyrics);
        Self {
            title: title.into(),
            words: normalize::normalize(&expanded, vocabulary),
        }
    }
}

/// Word -> titles of the songs (within one album) that contain it.
#[derive(Debug, Default)]
pub struct WordIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl WordIndex {
    pub fn build(songs: &[Song]) -> Self {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for song in songs {
            for word in &song.words {
                entries
                    .entry(word.clone())
                    .or_default()
                    .insert(song.title.clone());
            }
        }
        Self { entries }
    }

    /// Titles of the songs containing `word`.
    pub fn songs_for(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(word)
    }

    /// Whether exactly one song contains `word`.
    pub fn is_unique(&self, word: &str) -> bool {
        self.songs_for(word).is_some_and(|songs| songs.len() == 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Words of `song` that no other song in the index uses, sorted ascending.
pub fn unique_words(song: &Song, index: &WordIndex) -> Vec<String> {
    // BTreeSet iteration is already in ascending order.
    song.words
        .iter()
        .filter(|word| index.is_unique(word))
        .cloned()
        .collect()
}

/// Add a song in track order. A repeated title replaces the earlier song's
/// words but keeps its position.
fn push_song(songs: &mut Vec<Song>, song: Song) {
    match songs.iter_mut().find(|s| s.title == song.title) {
        Some(existing) => {
            debug!(title = %song.title, "Duplicate song title, replacing earlier track");
            existing.words = song.words;
        }
        None => songs.push(song),
    }
}

/// Build the output record from songs already in track order.
pub fn build_record(artist: &str, album: &str, songs: &[Song]) -> AlbumRecord {
    let index = WordIndex::build(songs);

    AlbumRecord {
        artist: artist.to_string(),
        album_title: album.to_string(),
        songs: songs
            .iter()
            .map(|song| SongEntry {
                song_title: song.title.clone(),
                unique_words: unique_words(song, &index),
            })
            .collect(),
    }
}

/// Read one lyric file into a `Song`.
pub fn load_song(path: &Path, vocabulary: &dyn Vocabulary) -> Result<Song> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Lyric file name is not valid UTF-8: {}", path.display()))?;

    let lyrics = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lyrics: {}", path.display()))?;

    Ok(Song::from_lyrics(tracks::song_title(file_name), &lyrics, vocabulary))
}

/// Process one album directory into its record.
///
/// Any unreadable track fails the whole album.
pub fn process_album(
    dir: &Path,
    artist: &str,
    album: &str,
    vocabulary: &dyn Vocabulary,
) -> Result<AlbumRecord> {
    let mut songs = Vec::new();
    for path in tracks::list_tracks(dir)? {
        let song = load_song(&path, vocabulary)?;
        debug!(title = %song.title, words = song.words.len(), "Normalized track");
        push_song(&mut songs, song);
    }

    Ok(build_record(artist, album, &songs))
}
