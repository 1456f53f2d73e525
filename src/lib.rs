//! Table metadata and scatter plots over HTTP.
//!
//! Reflects the tables of a PostgreSQL schema once at startup, then serves
//! read-only lookups of that snapshot and PNG scatter plots of any two
//! columns of a table.
//!
//! ## Submodules
//!
//! - [`catalog`] — Schema reflection and the immutable [`Snapshot`]
//! - [`render`] — Plot validation, row fetching, and PNG rendering
//! - [`server`] — Routes, handlers, and the [`Fault`] error envelope
//! - [`config`] — Command line and environment configuration
pub mod catalog;
pub mod config;
pub mod render;
pub mod server;

pub use catalog::*;
pub use config::*;
pub use render::*;
pub use server::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Establishes a database connection.
///
/// The connection task is spawned onto the current runtime and logs
/// if it ever terminates with an error. Returns an `Arc<Client>`
/// suitable for sharing across actix workers.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Initialize logging to terminal and to an append-only log file.
pub fn log(path: &std::path::Path) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let file = simplelog::WriteLogger::new(log::LevelFilter::Info, config.clone(), file);
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
