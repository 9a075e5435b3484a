use url::Url;

use crate::errors::{ExtractionError, ScrapeError};
use crate::services::dataset_store::DatasetStore;
use crate::services::extractor::{Extractor, ExtractorSession};

/// Where the run stopped and how many records failed along the way. The
/// cursor is the resumption point for the next run.
#[derive(Debug, PartialEq)]
pub struct BatchReport {
    pub last_processed_index: usize,
    pub failures: usize,
}

/// Walk the dataset in fixed-size windows from `start_index`, scrape every
/// record that still has gaps, and rewrite the dataset after each window so
/// an interrupted run can resume from the last persisted cursor.
///
/// Extraction failures are counted and skipped; load and save failures abort
/// the run, since later windows depend on accurately persisted progress.
pub async fn run_batch<E: Extractor>(
    store: &DatasetStore,
    extractor: &E,
    book_url_base: &str,
    batch_size: i64,
    start_index: i64,
    end_index: i64,
) -> Result<BatchReport, ScrapeError> {
    if batch_size < 1 {
        return Err(ScrapeError::InvalidArgument(format!(
            "batchSize must be positive, got {}",
            batch_size
        )));
    }
    if start_index < 0 {
        return Err(ScrapeError::InvalidArgument(format!(
            "startIndex must be non-negative, got {}",
            start_index
        )));
    }
    let base = Url::parse(book_url_base).map_err(|e| {
        ScrapeError::InvalidArgument(format!("bad book url base `{}`: {}", book_url_base, e))
    })?;

    let mut dataset = store.load()?;

    let batch_size = batch_size as usize;
    let mut cursor = start_index as usize;
    let mut failures = 0usize;

    while (cursor as i64) < end_index {
        // The sole early exit besides reaching end_index: the cursor walked
        // off the end of the dataset.
        if cursor >= dataset.len() {
            break;
        }
        let upper = (cursor + batch_size).min(dataset.len());
        log::info!("Processing batch from index {}", cursor);

        let session = extractor.session().await?;
        for record in &mut dataset.records[cursor..upper] {
            if !record.needs_extraction() {
                continue;
            }

            match target_url(&base, &record.url_id) {
                Ok(link) => match session.extract(&link).await {
                    Ok(fields) => {
                        log::info!(
                            "{}  Rating: {}  RatingsNum: {}  Reviews: {}",
                            link,
                            fields.rating,
                            fields.ratings_num,
                            fields.reviews
                        );
                        record.fill_missing(fields);
                    }
                    Err(e) => {
                        failures += 1;
                        log::error!("Failed to scrape {}: {}", link, e);
                    }
                },
                Err(e) => {
                    failures += 1;
                    log::error!("{}", e);
                }
            }
        }
        session.close().await;

        cursor += batch_size;
        store.save(&dataset)?;
    }

    log::info!("Scraping complete");
    Ok(BatchReport {
        last_processed_index: cursor,
        failures,
    })
}

fn target_url(base: &Url, url_id: &str) -> Result<String, ExtractionError> {
    base.join(url_id)
        .map(|url| url.to_string())
        .map_err(|_| ExtractionError::BadTarget(url_id.to_string()))
}
