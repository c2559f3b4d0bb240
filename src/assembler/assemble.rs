use indexmap::IndexMap;

use crate::catalog::Catalog;
use crate::config::{Config, OutputDatasetConfig, SourceDatasetConfig, TableConfig};
use crate::input::{FilterValues, UserInputRecord};
use crate::resolver::resolve_filters;

/// Default months of history when an output dataset spec leaves it unset
pub const DEFAULT_MONTHS_BACK: u32 = 18;

/// Assemble the configuration tree from user input and the catalog.
///
/// Output datasets come from the user's specs in order; source datasets
/// come entirely from the catalog, with every table run through the filter
/// resolver against the same global filter values. Every source dataset
/// targets the primary output dataset key derived from the client name.
///
/// Infallible by contract: the input record arrives complete from the
/// input layer, and catalog lookups that miss fall back to empty filter
/// lists. For fixed inputs the result is identical on every call.
pub fn assemble(catalog: &Catalog, input: &UserInputRecord, filters: &FilterValues) -> Config {
    let primary_key = derive_dataset_key(&input.client_name);
    let client_label = input.client_name.to_lowercase().replace(' ', "_");

    let mut output_datasets_config = IndexMap::new();
    for spec in &input.output_datasets {
        let labels = IndexMap::from([
            ("environment".to_string(), "production".to_string()),
            ("client".to_string(), client_label.clone()),
            ("team".to_string(), spec.key.clone()),
        ]);
        output_datasets_config.insert(
            spec.key.clone(),
            OutputDatasetConfig {
                dataset_id: format!("{}_filtered", spec.key),
                description: format!(
                    "{} filtered views for {}",
                    title_case(&spec.key),
                    input.client_name
                ),
                months_back: spec.months_back.unwrap_or(DEFAULT_MONTHS_BACK),
                labels,
            },
        );
    }

    let mut source_datasets_config = IndexMap::new();
    for (dataset_name, dataset) in &catalog.source_datasets {
        let mut tables = IndexMap::new();
        for table_name in &dataset.tables {
            let mut table = TableConfig::new(table_name.clone());
            table.filter_columns = resolve_filters(catalog, table_name, filters);
            table.description = Some(format!("{} filtered view", table_name));
            tables.insert(table_name.clone(), table);
        }
        source_datasets_config.insert(
            dataset_name.clone(),
            SourceDatasetConfig {
                target_dataset_key: primary_key.clone(),
                source_project_id: dataset.source_project_id.clone(),
                description: dataset.description.clone(),
                tables,
            },
        );
    }

    Config {
        project_id: input.project_id.clone(),
        region: input.region.clone(),
        view_prefix: input.view_prefix.clone(),
        output_datasets_config,
        source_datasets_config,
    }
}

/// Derive the primary dataset key from a client name: lowercased, with
/// spaces and hyphens turned into underscores.
pub fn derive_dataset_key(client_name: &str) -> String {
    client_name.to_lowercase().replace(' ', "_").replace('-', "_")
}

/// Title-case a dataset key for its description: an alphabetic character
/// that follows a non-alphabetic one is uppercased, every other alphabetic
/// character is lowercased ("acme_co" → "Acme_Co").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
