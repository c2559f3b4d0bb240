//! Root configuration record

use indexmap::IndexMap;

use super::dataset::{OutputDatasetConfig, SourceDatasetConfig};

/// The complete configuration, the sole object handed to the renderer.
///
/// Both mappings render in insertion order; given the same tree the
/// rendered text is byte-identical.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub region: String,
    pub view_prefix: String,
    pub output_datasets_config: IndexMap<String, OutputDatasetConfig>,
    pub source_datasets_config: IndexMap<String, SourceDatasetConfig>,
}
