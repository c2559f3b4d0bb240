//! Shared test utilities for integration tests
//!
//! Each integration binary uses its own subset of these helpers.
#![allow(dead_code)]

use tfvarsgen::{
    assemble, parser, render, Catalog, Config, FilterValues, OutputDatasetSpec, UserInputRecord,
};

/// Load a catalog fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Catalog {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// A standard input record for the "Acme Co" scenario
pub fn acme_input() -> UserInputRecord {
    UserInputRecord {
        project_id: "acme-prod".to_string(),
        region: "asia-northeast1".to_string(),
        view_prefix: "filtered_".to_string(),
        client_name: "Acme Co".to_string(),
        output_datasets: vec![OutputDatasetSpec::new("acme_co")],
    }
}

/// Build a FilterValues from (column, values) pairs
pub fn filter_values(entries: &[(&str, &[&str])]) -> FilterValues {
    let mut filters = FilterValues::new();
    for (column, values) in entries {
        filters.insert(*column, values.iter().map(|v| v.to_string()).collect());
    }
    filters
}

/// Run the full pipeline: catalog + input + filters → tfvars text
pub fn run_pipeline(
    catalog: &Catalog,
    input: &UserInputRecord,
    filters: &FilterValues,
) -> String {
    let config = assemble(catalog, input, filters);
    render(&config).expect("rendering an assembled config should succeed")
}

/// Assemble only, for tests that inspect the tree
pub fn run_assemble(
    catalog: &Catalog,
    input: &UserInputRecord,
    filters: &FilterValues,
) -> Config {
    assemble(catalog, input, filters)
}
