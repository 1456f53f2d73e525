use super::*;
use tokio_postgres::Client;

/// Raw values of the x and y columns for one row. `None` is SQL NULL.
pub type Pair = (Option<String>, Option<String>);

/// Where plotted rows come from.
///
/// Object safe so the server can hold any implementation behind
/// `Arc<dyn Source>`; the shared [`Client`] is the production one.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Every row of the two plotted columns, unfiltered and unordered.
    async fn pairs(&self, plot: &Plot) -> anyhow::Result<Vec<Pair>>;
    /// Round trip to check that the backing store is reachable.
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl Source for Client {
    async fn pairs(&self, plot: &Plot) -> anyhow::Result<Vec<Pair>> {
        let sql = projection(plot);
        log::debug!("{}", sql);
        Ok(self
            .query(sql.as_str(), &[])
            .await?
            .iter()
            .map(|row| -> Result<Pair, tokio_postgres::Error> {
                Ok((row.try_get(0)?, row.try_get(1)?))
            })
            .collect::<Result<Vec<Pair>, _>>()?)
    }
    async fn ping(&self) -> anyhow::Result<()> {
        self.execute("SELECT 1", &[]).await?;
        Ok(())
    }
}

/// `SELECT "x"::text, "y"::text FROM "table"`.
///
/// Values are cast to text so columns of any type can be plotted;
/// [`Axis`] decides afterwards whether they are numeric.
pub fn projection(plot: &Plot) -> String {
    format!(
        "SELECT {}::text, {}::text FROM {}",
        quote(plot.x()),
        quote(plot.y()),
        quote(plot.table())
    )
}

/// Quote an identifier, doubling any embedded double quotes.
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
