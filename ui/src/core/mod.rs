pub mod format;
pub mod ingest;
pub mod series;
pub mod theme;
