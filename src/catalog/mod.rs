//! Catalog types (nouns)
//!
//! The catalog is the predefined, read-only description of where filtered
//! views come from: which source datasets exist, which tables they contain,
//! and which filter columns apply to each table. It ships with a built-in
//! default and can also be loaded from YAML.

mod builtin;
mod schema;

pub use schema::{Catalog, SourceDataset};
