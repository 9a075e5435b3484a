use serde::Serialize;

use crate::errors::ScrapeError;
use crate::services::extractor::{Extractor, ExtractorSession};

/// One entry per input link, in input order.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum LinkReport {
    Scraped {
        link: String,
        description: String,
        rating: String,
        #[serde(rename = "ratingsNum")]
        ratings_num: String,
        reviews: String,
    },
    Failed {
        link: String,
        error: String,
    },
}

/// Visit each link with one shared session and report what each page
/// yielded. A failed extraction becomes a failure entry and the run moves
/// on; nothing is persisted.
pub async fn run_links<E: Extractor>(
    extractor: &E,
    links: Vec<String>,
) -> Result<Vec<LinkReport>, ScrapeError> {
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let session = extractor.session().await?;
    let mut reports = Vec::with_capacity(links.len());

    for link in links {
        match session.extract(&link).await {
            Ok(fields) => {
                log::info!(
                    "{}  Rating: {}  RatingsNum: {}  Reviews: {}",
                    link,
                    fields.rating,
                    fields.ratings_num,
                    fields.reviews
                );
                reports.push(LinkReport::Scraped {
                    link,
                    description: fields.summary,
                    rating: fields.rating,
                    ratings_num: fields.ratings_num,
                    reviews: fields.reviews,
                });
            }
            Err(e) => {
                log::error!("Failed to scrape {}: {}", link, e);
                reports.push(LinkReport::Failed {
                    link,
                    error: "Failed to scrape description, rating, or reviews".to_string(),
                });
            }
        }
    }

    session.close().await;
    Ok(reports)
}
