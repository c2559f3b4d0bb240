//! tfvars renderer
//!
//! Transforms a Config tree into terraform.tfvars text. The layout is
//! consumed by golden-file comparisons downstream, so every space, header
//! comment, and blank line is deliberate.

use crate::config::{Config, FilterColumn, OutputDatasetConfig, SourceDatasetConfig, TableConfig};

use super::error::RenderError;

/// Render a Config as terraform.tfvars text.
///
/// Pure serialization: the config is not mutated, and for the same tree the
/// output is byte-identical. Either the complete document is returned or an
/// error; never a truncated string. The returned text carries no trailing
/// newline.
pub fn render(config: &Config) -> Result<String, RenderError> {
    validate(config)?;

    let mut lines: Vec<String> = vec![
        "# GCP Configuration".to_string(),
        format!("project_id = \"{}\"", config.project_id),
        format!("region     = \"{}\"", config.region),
        String::new(),
        "# View Configuration".to_string(),
        format!("view_prefix = \"{}\"", config.view_prefix),
        String::new(),
        "# Output Datasets Configuration".to_string(),
        "output_datasets_config = {".to_string(),
    ];

    for (key, dataset) in &config.output_datasets_config {
        emit_output_dataset(&mut lines, key, dataset);
    }

    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("# Source Datasets and Tables Configuration".to_string());
    lines.push("source_datasets_config = {".to_string());

    for (name, dataset) in &config.source_datasets_config {
        emit_source_dataset(&mut lines, name, dataset);
    }

    lines.push("}".to_string());

    Ok(lines.join("\n"))
}

/// Reject malformed configs before emitting anything
fn validate(config: &Config) -> Result<(), RenderError> {
    if config.project_id.is_empty() {
        return Err(RenderError::MissingField("project_id"));
    }
    if config.region.is_empty() {
        return Err(RenderError::MissingField("region"));
    }
    if config.view_prefix.is_empty() {
        return Err(RenderError::MissingField("view_prefix"));
    }
    if config.output_datasets_config.is_empty() {
        return Err(RenderError::NoOutputDatasets);
    }
    for (key, dataset) in &config.output_datasets_config {
        if dataset.months_back == 0 {
            return Err(RenderError::InvalidMonthsBack {
                dataset: key.clone(),
            });
        }
    }
    Ok(())
}

fn emit_output_dataset(lines: &mut Vec<String>, key: &str, dataset: &OutputDatasetConfig) {
    lines.push(format!("  \"{}\" = {{", key));
    lines.push(format!("    dataset_id  = \"{}\"", dataset.dataset_id));
    lines.push(format!("    description = \"{}\"", dataset.description));
    lines.push(format!("    months_back = {}", dataset.months_back));
    lines.push("    labels = {".to_string());

    for (label_key, label_value) in &dataset.labels {
        lines.push(format!("      {} = \"{}\"", label_key, label_value));
    }

    lines.push("    }".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
}

fn emit_source_dataset(lines: &mut Vec<String>, name: &str, dataset: &SourceDatasetConfig) {
    lines.push(format!("  \"{}\" = {{", name));
    lines.push(format!(
        "    target_dataset_key = \"{}\"",
        dataset.target_dataset_key
    ));

    if let Some(project) = &dataset.source_project_id {
        lines.push(format!("    source_project_id  = \"{}\"", project));
    }

    lines.push(format!(
        "    description        = \"{}\"",
        dataset.description
    ));
    lines.push("    tables = {".to_string());

    for (table_key, table) in &dataset.tables {
        emit_table(lines, table_key, table);
    }

    lines.push("    }".to_string());
    lines.push("  }".to_string());
    lines.push(String::new());
}

fn emit_table(lines: &mut Vec<String>, key: &str, table: &TableConfig) {
    lines.push(format!("      \"{}\" = {{", key));
    lines.push(format!(
        "        source_table_id = \"{}\"",
        table.source_table_id
    ));
    lines.push(format!("        view_name      = \"{}\"", table.view_name));
    lines.push("        filter_columns = [".to_string());

    for filter in &table.filter_columns {
        emit_filter_column(lines, filter);
    }

    lines.push("        ]".to_string());

    // optional fields are omitted, never emitted empty
    if let Some(additional_where) = table.additional_where.as_deref().filter(|w| !w.is_empty()) {
        lines.push(format!(
            "        additional_where = \"{}\"",
            additional_where
        ));
    }

    if let Some(description) = table.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("        description     = \"{}\"", description));
    }

    lines.push("      }".to_string());
    lines.push(String::new());
}

fn emit_filter_column(lines: &mut Vec<String>, filter: &FilterColumn) {
    lines.push("          {".to_string());
    lines.push(format!(
        "            column_name = \"{}\"",
        filter.column_name
    ));
    lines.push(format!("            condition   = \"{}\"", filter.condition));

    // AND is the implied default; only spell out other operators
    if filter.operator != "AND" {
        lines.push(format!("            operator    = \"{}\"", filter.operator));
    }

    lines.push("          }".to_string());
}
