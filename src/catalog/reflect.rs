use super::*;
use crate::PgErr;
use tokio_postgres::Client;

#[rustfmt::skip]
const TABLES:  &str = "information_schema.tables";
#[rustfmt::skip]
const COLUMNS: &str = "information_schema.columns";

/// Base tables of the current schema, left joined onto their columns so
/// that empty tables still appear, in ordinal order within each table.
const REFLECT: &str = const_format::concatcp!(
    "SELECT t.table_name::text, c.column_name::text FROM ",
    TABLES,
    " t LEFT JOIN ",
    COLUMNS,
    " c ON c.table_schema = t.table_schema AND c.table_name = t.table_name",
    " WHERE t.table_schema = current_schema() AND t.table_type = 'BASE TABLE'",
    " ORDER BY t.table_name, c.ordinal_position"
);

/// Reflection of the live schema into a [`Snapshot`].
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn reflect(&self) -> Result<Snapshot, PgErr>;
}

impl Catalog for Client {
    async fn reflect(&self) -> Result<Snapshot, PgErr> {
        log::info!("reflecting schema");
        self.query(REFLECT, &[])
            .await?
            .iter()
            .map(|row| -> Result<(String, Option<String>), PgErr> {
                Ok((row.try_get(0)?, row.try_get(1)?))
            })
            .collect::<Result<Vec<_>, PgErr>>()
            .map(|rows| rows.into_iter().collect::<Snapshot>())
            .inspect(|snapshot| log::info!("reflected {} tables", snapshot.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_current_schema_only() {
        assert!(REFLECT.contains("current_schema()"));
        assert!(REFLECT.contains("'BASE TABLE'"));
        assert!(REFLECT.ends_with("ORDER BY t.table_name, c.ordinal_position"));
    }
}
