//! tfvarsgen - Generate terraform.tfvars documents for BigQuery filtered views
//!
//! This library provides:
//! - Catalog types (source datasets, tables, table-to-filter-column mapping)
//! - Catalog parsing from YAML (plus a built-in default catalog)
//! - Filter resolution (global filter values -> per-table WHERE fragments)
//! - Config assembly (user input + catalog -> configuration tree)
//! - tfvars rendering (configuration tree -> variables file text)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `catalog/` - predefined dataset/table/filter-column relationships
//! - `input/` - user-supplied values (UserInputRecord, FilterValues)
//! - `config/` - the assembled tree (Config, dataset and table configs)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Catalog
//! - `resolver/` - Catalog + table + FilterValues → filter columns
//! - `assembler/` - Catalog + UserInputRecord + FilterValues → Config
//! - `renderer/` - Config → tfvars text
//!
//! # Example
//!
//! ```ignore
//! use tfvarsgen::{assemble, render, Catalog, FilterValues, UserInputRecord};
//!
//! let catalog = Catalog::builtin();
//! let mut filters = FilterValues::new();
//! filters.insert("status", vec!["active".into(), "done".into()]);
//! let config = assemble(&catalog, &input, &filters);
//! let text = render(&config)?;
//! ```

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod parser;
pub mod renderer;
pub mod resolver;

// Re-export commonly used types
pub use assembler::{assemble, derive_dataset_key, DEFAULT_MONTHS_BACK};
pub use catalog::{Catalog, SourceDataset};
pub use config::{Config, FilterColumn, OutputDatasetConfig, SourceDatasetConfig, TableConfig};
pub use error::ParseError;
pub use input::{FilterValues, OutputDatasetSpec, UserInputRecord, RECOGNIZED_FILTER_COLUMNS};
pub use renderer::{render, RenderError};
pub use resolver::resolve_filters;
