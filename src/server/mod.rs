//! HTTP server.
//!
//! Routes requests to the catalog and the scatter renderer. Every
//! failure, including unknown paths and wrong methods, leaves through
//! [`Fault`] as a JSON envelope.
//!
//! ## Routes
//!
//! - `GET /tables` — Every table with its columns
//! - `GET /table/{name}` — Columns of one table
//! - `GET /graph?table=&x_field=&y_field=` — PNG scatter plot
//! - `GET /health` — Database round trip
pub mod fault;
pub mod handlers;

pub use fault::*;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::render::Source;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    /// Connect, reflect the schema, then serve until shutdown.
    ///
    /// Fails before binding if the database is unreachable or the
    /// schema cannot be reflected.
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let client = crate::db(&config.database_url).await?;
        let catalog = web::Data::new(client.reflect().await?);
        let source = web::Data::<dyn Source>::from(client as Arc<dyn Source>);
        log::info!("starting daty on {}:{}", config.host, config.port);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(catalog.clone())
                .app_data(source.clone())
                .configure(routes)
                .default_service(web::to(handlers::missing))
        })
        .workers(config.workers.max(1))
        .bind(config.addr())?
        .run()
        .await?;
        Ok(())
    }
}

/// Route table. Known paths answer other methods with 405.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::QueryConfig::default().error_handler(|e, req| {
            log::warn!("malformed query on {}: {}", req.path(), e);
            Fault::InvalidRequest(e.to_string()).into()
        }))
        .service(web::resource("/tables")      .route(web::get().to(handlers::tables)).default_service(web::to(handlers::not_allowed)))
        .service(web::resource("/table/{name}").route(web::get().to(handlers::table)) .default_service(web::to(handlers::not_allowed)))
        .service(web::resource("/graph")       .route(web::get().to(handlers::graph)) .default_service(web::to(handlers::not_allowed)))
        .service(web::resource("/health")      .route(web::get().to(handlers::health)).default_service(web::to(handlers::not_allowed)));
}
