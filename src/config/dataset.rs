//! Output and source dataset configurations

use indexmap::IndexMap;

use super::table::TableConfig;

/// A destination dataset for generated filtered views.
#[derive(Debug, Clone)]
pub struct OutputDatasetConfig {
    pub dataset_id: String,
    pub description: String,
    /// Months of history the views cover; must be positive.
    pub months_back: u32,
    /// Always carries exactly `environment`, `client`, and `team`.
    pub labels: IndexMap<String, String>,
}

/// An origin dataset of raw tables, with per-table view configs.
#[derive(Debug, Clone)]
pub struct SourceDatasetConfig {
    /// Key of the output dataset the views land in. A foreign key into
    /// `Config::output_datasets_config`, not validated against it.
    pub target_dataset_key: String,
    /// Omitted from output when absent.
    pub source_project_id: Option<String>,
    pub description: String,
    pub tables: IndexMap<String, TableConfig>,
}
