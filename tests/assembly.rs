//! Integration tests for config assembly
//!
//! Tests the merge of user input with the catalog: derived keys, defaults,
//! labels, and the catalog-driven source dataset tree.

mod common;

use common::{acme_input, filter_values, run_assemble};
use tfvarsgen::{Catalog, FilterValues, OutputDatasetSpec, DEFAULT_MONTHS_BACK};

#[test]
fn test_primary_output_dataset_shape() {
    let config = run_assemble(&Catalog::builtin(), &acme_input(), &FilterValues::new());

    assert_eq!(config.project_id, "acme-prod");
    assert_eq!(config.output_datasets_config.len(), 1);

    let dataset = &config.output_datasets_config["acme_co"];
    assert_eq!(dataset.dataset_id, "acme_co_filtered");
    assert_eq!(dataset.description, "Acme_Co filtered views for Acme Co");
    assert_eq!(dataset.months_back, DEFAULT_MONTHS_BACK);
}

#[test]
fn test_labels_always_exactly_three_keys() {
    let mut input = acme_input();
    input.output_datasets.push(OutputDatasetSpec {
        key: "finance".to_string(),
        months_back: Some(24),
    });

    let config = run_assemble(&Catalog::builtin(), &input, &FilterValues::new());
    for dataset in config.output_datasets_config.values() {
        let keys: Vec<&str> = dataset.labels.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["environment", "client", "team"]);
    }
    assert_eq!(
        config.output_datasets_config["finance"].labels["team"],
        "finance"
    );
}

#[test]
fn test_client_label_keeps_hyphens() {
    // spaces become underscores in the client label, hyphens do not;
    // the derived dataset key replaces both
    let mut input = acme_input();
    input.client_name = "North-West Retail".to_string();
    input.output_datasets = vec![OutputDatasetSpec::new("north_west_retail")];

    let config = run_assemble(&Catalog::builtin(), &input, &FilterValues::new());
    let dataset = &config.output_datasets_config["north_west_retail"];
    assert_eq!(dataset.labels["client"], "north-west_retail");

    for source in config.source_datasets_config.values() {
        assert_eq!(source.target_dataset_key, "north_west_retail");
    }
}

#[test]
fn test_every_catalog_table_assembled() {
    let catalog = Catalog::builtin();
    let filters = filter_values(&[("status", &["active"])]);
    let config = run_assemble(&catalog, &acme_input(), &filters);

    let assembled: usize = config
        .source_datasets_config
        .values()
        .map(|d| d.tables.len())
        .sum();
    assert_eq!(assembled, catalog.all_tables().len());

    // every table carries the generated description and mirrors its name
    for dataset in config.source_datasets_config.values() {
        for (key, table) in &dataset.tables {
            assert_eq!(&table.source_table_id, key);
            assert_eq!(&table.view_name, key);
            assert_eq!(
                table.description.as_deref(),
                Some(format!("{} filtered view", key).as_str())
            );
            assert_eq!(table.additional_where, None);
        }
    }
}

#[test]
fn test_source_project_id_passes_through() {
    let catalog = common::load_fixture("catalog.yaml");
    let config = run_assemble(&catalog, &acme_input(), &FilterValues::new());

    let partner = &config.source_datasets_config["partner_raw"];
    assert_eq!(partner.source_project_id.as_deref(), Some("partner-project"));
    assert_eq!(
        config.source_datasets_config["app_raw"].source_project_id,
        None
    );
}

#[test]
fn test_same_filters_applied_to_every_dataset() {
    let catalog = common::load_fixture("catalog.yaml");
    let filters = filter_values(&[("user_id", &["u1"])]);
    let config = run_assemble(&catalog, &acme_input(), &filters);

    let users = &config.source_datasets_config["app_raw"].tables["users"];
    let sessions = &config.source_datasets_config["app_raw"].tables["sessions"];
    assert_eq!(users.filter_columns.len(), 1);
    assert_eq!(sessions.filter_columns.len(), 1);
    assert_eq!(users.filter_columns[0].condition, "= 'u1'");

    // shipments has no filter mapping at all
    let shipments = &config.source_datasets_config["partner_raw"].tables["shipments"];
    assert!(shipments.filter_columns.is_empty());
}
