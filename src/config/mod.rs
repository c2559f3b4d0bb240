//! Assembled configuration types (nouns)
//!
//! The tree the assembler builds and the renderer serializes. Built once,
//! never mutated afterward. Every mapping preserves insertion order because
//! the renderer reproduces that order verbatim.

mod dataset;
mod filter;
mod root;
mod table;

pub use dataset::{OutputDatasetConfig, SourceDatasetConfig};
pub use filter::FilterColumn;
pub use root::Config;
pub use table::TableConfig;
