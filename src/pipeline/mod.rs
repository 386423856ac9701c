// Batch processing over a directory of albums.

pub mod batch;
