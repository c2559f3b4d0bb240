//! Root catalog definition

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::ParseError;

/// The predefined dataset/table/filter-column relationships.
///
/// Both mappings preserve their declaration order; that order is reproduced
/// verbatim in the rendered output, so iteration must be deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Table name → filter columns applicable to that table, in the order
    /// conditions should appear in the generated WHERE clause.
    #[serde(rename = "filterColumns", default)]
    pub filter_columns: IndexMap<String, Vec<String>>,
    /// Source dataset name → dataset contents.
    #[serde(rename = "sourceDatasets", default)]
    pub source_datasets: IndexMap<String, SourceDataset>,
}

/// A predefined source dataset: an origin collection of raw tables from
/// which filtered views are derived.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDataset {
    pub description: String,
    /// Project to read the tables from, when it differs from the target
    /// project. Omitted from the rendered output when absent.
    #[serde(rename = "sourceProjectId", default)]
    pub source_project_id: Option<String>,
    pub tables: Vec<String>,
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        crate::parser::parse_file(path)
    }

    /// Get the filter columns applicable to a table.
    ///
    /// Tables outside the catalog get no filters: the returned slice is
    /// empty, not an error, so the catalog can drift without breaking
    /// generation.
    pub fn applicable_columns(&self, table_name: &str) -> &[String] {
        self.filter_columns
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get a source dataset by name
    pub fn get_source_dataset(&self, name: &str) -> Option<&SourceDataset> {
        self.source_datasets.get(name)
    }

    /// All table names across all source datasets, in catalog order
    pub fn all_tables(&self) -> Vec<&str> {
        self.source_datasets
            .values()
            .flat_map(|d| d.tables.iter().map(String::as_str))
            .collect()
    }
}
