//! Global filter values

use indexmap::IndexMap;

/// The fixed set of filter columns the input layer prompts for, with the
/// prompt description shown to the user.
pub const RECOGNIZED_FILTER_COLUMNS: &[(&str, &str)] = &[
    ("account_name", "Account name filter"),
    ("client_id", "Client ID filter"),
    ("user_id", "User ID filter"),
    ("status", "Status filter (e.g., 'active', 'completed')"),
    ("region", "Region filter"),
];

/// Global filter values: column name → literal values, applied to every
/// catalog table that declares the column as applicable.
///
/// A column is present only if the user supplied at least one non-empty
/// value; `insert` enforces this by dropping empty strings and skipping
/// all-empty inserts. Entries keep insertion order, and values keep the
/// order the user entered them.
///
/// Values are later wrapped in single quotes without escaping, so a value
/// containing a single quote produces broken output. Known limitation.
#[derive(Debug, Clone, Default)]
pub struct FilterValues {
    values: IndexMap<String, Vec<String>>,
}

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the values supplied for one column.
    ///
    /// Empty strings are dropped; if nothing remains the column is not
    /// recorded at all.
    pub fn insert(&mut self, column: impl Into<String>, values: Vec<String>) {
        let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
        if !values.is_empty() {
            self.values.insert(column.into(), values);
        }
    }

    /// Get the values for a column, if any were supplied
    pub fn get(&self, column: &str) -> Option<&[String]> {
        self.values.get(column).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over (column, values) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
