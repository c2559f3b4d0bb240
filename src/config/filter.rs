//! Filter column fragment

/// One WHERE-clause fragment applied to a generated view.
///
/// Always derived by the resolver, never hand-constructed from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterColumn {
    pub column_name: String,
    /// Either `= 'v'` or `IN ('v1', 'v2', ...)`, decided solely by the
    /// cardinality of the matched value list.
    pub condition: String,
    /// Always `"AND"` in this version; reserved for future operators.
    pub operator: String,
}

impl FilterColumn {
    pub fn new(column_name: impl Into<String>, condition: impl Into<String>) -> Self {
        FilterColumn {
            column_name: column_name.into(),
            condition: condition.into(),
            operator: "AND".to_string(),
        }
    }
}
