// songprint: unique words per song across album lyric collections
//
// This is the library root. Each module corresponds to a stage of the
// pipeline, from raw lyric text to the per-album JSON record.

pub mod album;
pub mod config;
pub mod dictionary;
pub mod lyrics;
pub mod output;
pub mod pipeline;
