use crate::catalog::Snapshot;
use crate::server::Fault;

/// Query parameters of `/graph`, as supplied by the caller.
#[derive(Debug, Default)]
pub struct GraphQuery {
    pub table: Option<String>,
    pub x_field: Option<String>,
    pub y_field: Option<String>,
}

/// Collects decoded `key=value` pairs. The first occurrence of a key
/// wins; repeats and unrelated keys are ignored.
impl FromIterator<(String, String)> for GraphQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut query = Self::default();
        for (key, value) in iter {
            let slot = match key.as_str() {
                "table" => &mut query.table,
                "x_field" => &mut query.x_field,
                "y_field" => &mut query.y_field,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// A scatter plot request whose table and fields exist in the snapshot.
///
/// Only [`Plot::validate`] constructs one, so identifiers held here are
/// always allow-listed before they reach any SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    table: String,
    x: String,
    y: String,
}

impl Plot {
    pub fn validate(query: &GraphQuery, snapshot: &Snapshot) -> Result<Self, Fault> {
        let present = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(String::from);
        let (table, x, y) = match (
            present(&query.table),
            present(&query.x_field),
            present(&query.y_field),
        ) {
            (Some(table), Some(x), Some(y)) => (table, x, y),
            _ => return Err(Fault::InvalidRequest("Missing required parameters".into())),
        };
        snapshot.table(&table)?;
        if !snapshot.contains(&table, &x) || !snapshot.contains(&table, &y) {
            return Err(Fault::InvalidRequest(
                "Invalid fields for the specified table".into(),
            ));
        }
        Ok(Self { table, x, y })
    }
    pub fn table(&self) -> &str {
        &self.table
    }
    pub fn x(&self) -> &str {
        &self.x
    }
    pub fn y(&self) -> &str {
        &self.y
    }
    pub fn title(&self) -> String {
        format!("Scatter Plot: {} vs {}", self.x, self.y)
    }
}

impl std::fmt::Display for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.table, self.x, self.y)
    }
}
