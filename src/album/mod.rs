// Per-album aggregation — track discovery, word indexing, and output records.

pub mod aggregate;
pub mod record;
pub mod tracks;
