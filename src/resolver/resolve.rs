use crate::catalog::Catalog;
use crate::config::FilterColumn;
use crate::input::FilterValues;

/// Resolve the filter columns for one table.
///
/// Walks the table's applicable columns in catalog order and emits a
/// [`FilterColumn`] for each one the user supplied values for. Columns
/// without supplied values are skipped; a table the catalog does not know
/// yields an empty list. Neither case is an error - the tolerance lets the
/// catalog drift without breaking generation.
///
/// Values are quoted verbatim: a value containing a single quote produces
/// syntactically broken output (known limitation, kept for output
/// compatibility).
pub fn resolve_filters(
    catalog: &Catalog,
    table_name: &str,
    filters: &FilterValues,
) -> Vec<FilterColumn> {
    catalog
        .applicable_columns(table_name)
        .iter()
        .filter_map(|column| {
            let values = filters.get(column)?;
            Some(FilterColumn::new(column, format_condition(values)))
        })
        .collect()
}

/// Format the SQL condition for a value list.
///
/// One value → equality; several → an IN list in the order the user
/// entered the values.
fn format_condition(values: &[String]) -> String {
    if values.len() == 1 {
        format!("= '{}'", values[0])
    } else {
        format!("IN ('{}')", values.join("', '"))
    }
}
