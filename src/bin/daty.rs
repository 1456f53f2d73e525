//! daty Server Binary
//!
//! Reflects the schema at `DATABASE_URL`, then serves table metadata
//! and scatter plots on `PORT`.

use clap::Parser;
use daty::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    log(&config.log_file)?;
    kys();
    Server::run(config).await
}
