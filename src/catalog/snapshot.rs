use crate::server::Fault;
use serde::Serialize;
use std::collections::BTreeMap;

/// Table names mapped to their column names in ordinal order.
///
/// Built once at startup and shared read-only across workers.
/// Serializes as a plain JSON object keyed by table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, Vec<String>>);

impl Snapshot {
    /// Every reflected table with its columns.
    pub fn tables(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }
    /// Columns of a single table.
    pub fn table(&self, name: &str) -> Result<&[String], Fault> {
        self.0
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Fault::NotFound("Table not found".into()))
    }
    pub fn contains(&self, table: &str, column: &str) -> bool {
        self.0
            .get(table)
            .map_or(false, |columns| columns.iter().any(|c| c == column))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Groups `(table, column)` rows, as returned by a LEFT JOIN of tables
/// onto columns, into a snapshot. Rows must arrive in ordinal order
/// within each table; a `None` column marks a table with no columns.
impl FromIterator<(String, Option<String>)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut tables = BTreeMap::<String, Vec<String>>::new();
        for (table, column) in iter {
            let columns = tables.entry(table).or_default();
            if let Some(column) = column {
                columns.push(column);
            }
        }
        Self(tables)
    }
}
