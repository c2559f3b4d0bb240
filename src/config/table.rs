//! Per-table view configuration

use super::filter::FilterColumn;

/// Configuration for one filtered view over a source table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub source_table_id: String,
    /// Defaults to the source table id.
    pub view_name: String,
    pub filter_columns: Vec<FilterColumn>,
    /// Raw extra WHERE clause; omitted from output when absent.
    pub additional_where: Option<String>,
    /// Omitted from output when absent.
    pub description: Option<String>,
}

impl TableConfig {
    pub fn new(source_table_id: impl Into<String>) -> Self {
        let source_table_id = source_table_id.into();
        TableConfig {
            view_name: source_table_id.clone(),
            source_table_id,
            filter_columns: Vec::new(),
            additional_where: None,
            description: None,
        }
    }
}
