use super::*;
use crate::catalog::Snapshot;
use crate::render::Axis;
use crate::render::GraphQuery;
use crate::render::Plot;
use crate::render::Source;
use crate::render::scatter;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::web;
use std::collections::BTreeMap;

pub async fn tables(catalog: web::Data<Snapshot>) -> HttpResponse {
    log::info!("listed {} tables", catalog.len());
    HttpResponse::Ok().json(catalog.tables())
}

pub async fn table(
    catalog: web::Data<Snapshot>,
    path: web::Path<String>,
) -> Result<HttpResponse, Fault> {
    let name = path.into_inner();
    let columns = catalog
        .table(&name)
        .inspect_err(|_| log::warn!("table {} not found", name))?;
    log::info!("table {} was accessed", name);
    Ok(HttpResponse::Ok().json(BTreeMap::from([(name.as_str(), columns)])))
}

pub async fn graph(
    catalog: web::Data<Snapshot>,
    source: web::Data<dyn Source>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, Fault> {
    let query = query.into_inner().into_iter().collect::<GraphQuery>();
    let plot = Plot::validate(&query, &catalog)
        .inspect_err(|e| log::warn!("rejected graph request {:?}: {}", query, e))?;
    let (x, y) = Axis::pair(source.pairs(&plot).await?);
    let png = scatter::render(&plot, &x, &y)?;
    log::info!("graph created for {} with {} points", plot, x.len());
    Ok(HttpResponse::Ok().content_type("image/png").body(png))
}

pub async fn health(source: web::Data<dyn Source>) -> Result<HttpResponse, Fault> {
    source.ping().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

pub async fn missing(req: HttpRequest) -> Result<HttpResponse, Fault> {
    log::warn!("no route for {} {}", req.method(), req.path());
    Err(Fault::NotFound(
        "The requested URL was not found on the server. \
         If you entered the URL manually please check your spelling and try again."
            .into(),
    ))
}

pub async fn not_allowed(req: HttpRequest) -> Result<HttpResponse, Fault> {
    log::warn!("method {} not allowed on {}", req.method(), req.path());
    Err(Fault::NotAllowed)
}
