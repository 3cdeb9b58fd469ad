//! Field-name to column-name translation.

use std::collections::HashMap;

/// Maps application field names (`firstName`) to storage column names
/// (`first_name`).
///
/// Fields without an entry keep their own name. An entry mapped to the empty
/// string is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldNameMap {
    columns: HashMap<String, String>,
}

impl FieldNameMap {
    /// Create an empty map (every field is its own column).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field -> column entry (chainable).
    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(field, column);
        self
    }

    /// Add or replace a field -> column entry.
    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) -> Option<String> {
        self.columns.insert(field.into(), column.into())
    }

    /// Resolve the column name for `field`.
    pub fn column_for<'a>(&'a self, field: &'a str) -> &'a str {
        match self.columns.get(field) {
            Some(column) if !column.is_empty() => column.as_str(),
            _ => field,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<F, C> FromIterator<(F, C)> for FieldNameMap
where
    F: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, column) in iter {
            map.insert(field, column);
        }
        map
    }
}

impl From<HashMap<String, String>> for FieldNameMap {
    fn from(columns: HashMap<String, String>) -> Self {
        Self { columns }
    }
}
