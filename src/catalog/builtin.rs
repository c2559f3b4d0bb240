//! Built-in default catalog

use indexmap::IndexMap;

use super::schema::{Catalog, SourceDataset};

impl Catalog {
    /// The built-in catalog: three source datasets and the fixed
    /// table-to-filter-column mapping.
    ///
    /// Declaration order matters and is carried through to the rendered
    /// output unchanged.
    pub fn builtin() -> Self {
        let filter_columns = IndexMap::from([
            (
                "users".to_string(),
                columns(&["account_name", "user_id", "status"]),
            ),
            (
                "transactions".to_string(),
                columns(&["client_id", "status", "region"]),
            ),
            ("events".to_string(), columns(&["account_name", "user_id"])),
            ("orders".to_string(), columns(&["client_id", "status"])),
            ("logs".to_string(), columns(&["account_name", "region"])),
        ]);

        let source_datasets = IndexMap::from([
            (
                "raw_lake".to_string(),
                dataset(
                    "Raw data lake",
                    &["users", "transactions", "events", "orders", "logs"],
                ),
            ),
            (
                "analytics_raw".to_string(),
                dataset(
                    "Raw analytics data",
                    &["user_behavior", "conversion_events", "page_tracking"],
                ),
            ),
            (
                "transaction_raw".to_string(),
                dataset("Raw transaction data", &["payments", "refunds", "invoices"]),
            ),
        ]);

        Catalog {
            filter_columns,
            source_datasets,
        }
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn dataset(description: &str, tables: &[&str]) -> SourceDataset {
    SourceDataset {
        description: description.to_string(),
        source_project_id: None,
        tables: tables.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.source_datasets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["raw_lake", "analytics_raw", "transaction_raw"]);
    }

    #[test]
    fn test_builtin_filter_mapping() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.applicable_columns("orders"),
            &["client_id".to_string(), "status".to_string()]
        );
        assert!(catalog.applicable_columns("user_behavior").is_empty());
    }

    #[test]
    fn test_builtin_table_counts() {
        let catalog = Catalog::builtin();
        let raw_lake = catalog.get_source_dataset("raw_lake").unwrap();
        assert_eq!(raw_lake.tables.len(), 5);
        assert_eq!(catalog.all_tables().len(), 11);
    }
}
