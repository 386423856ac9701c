// Lyric text processing — repetition expansion and word normalization.

pub mod normalize;
pub mod repetition;
