use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::configuration::ScraperSettings;
use crate::errors::ScrapeError;
use crate::services::{run_batch, run_links, DatasetStore, DroidExtractor};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvScrapeRequest {
    batch_size: i64,
    start_index: i64,
    end_index: i64,
}

#[derive(Deserialize)]
pub struct LinksScrapeRequest {
    links: Vec<String>,
}

#[post("/csv")]
async fn scrape_csv(
    body: web::Json<CsvScrapeRequest>,
    store: web::Data<DatasetStore>,
    extractor: web::Data<DroidExtractor>,
    settings: web::Data<ScraperSettings>,
) -> Result<HttpResponse, ScrapeError> {
    let report = run_batch(
        store.get_ref(),
        extractor.get_ref(),
        &settings.book_url_base,
        body.batch_size,
        body.start_index,
        body.end_index,
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Scraping complete",
        "lastProcessedIndex": report.last_processed_index,
        "failures": report.failures,
    })))
}

#[post("/links")]
async fn scrape_links(
    body: web::Json<LinksScrapeRequest>,
    extractor: web::Data<DroidExtractor>,
) -> Result<HttpResponse, ScrapeError> {
    let reports = run_links(extractor.get_ref(), body.into_inner().links).await?;

    Ok(HttpResponse::Ok().json(reports))
}
