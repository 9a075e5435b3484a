use async_trait::async_trait;
use thirtyfour::{DesiredCapabilities, WebDriver};

use crate::domain::book::BookFields;
use crate::errors::{ExtractionError, ScrapeError};
use crate::services::extractor::{Extractor, ExtractorSession};
use crate::services::page_parser::parse_book_page;

/// One live browser tab behind a WebDriver endpoint.
pub struct Droid {
    driver: WebDriver,
}

impl Droid {
    pub async fn new(webdriver_url: &str) -> Result<Self, ScrapeError> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(webdriver_url, caps).await?;

        Ok(Droid { driver })
    }
}

#[async_trait]
impl ExtractorSession for Droid {
    async fn extract(&self, link: &str) -> Result<BookFields, ExtractionError> {
        self.driver
            .goto(link)
            .await
            .map_err(|e| ExtractionError::PageLoad {
                url: link.to_string(),
                source: e,
            })?;

        let page_source =
            self.driver
                .source()
                .await
                .map_err(|e| ExtractionError::PageLoad {
                    url: link.to_string(),
                    source: e,
                })?;

        parse_book_page(&page_source)
    }

    async fn close(self) {
        if let Err(e) = self.driver.quit().await {
            log::error!("Failed to shut down browser session: {:?}", e);
        }
    }
}

/// Session factory handed to the runners; opens a fresh browser session per
/// scope against the configured endpoint.
pub struct DroidExtractor {
    webdriver_url: String,
}

impl DroidExtractor {
    pub fn new(webdriver_url: String) -> Self {
        DroidExtractor { webdriver_url }
    }
}

#[async_trait]
impl Extractor for DroidExtractor {
    type Session = Droid;

    async fn session(&self) -> Result<Droid, ScrapeError> {
        Droid::new(&self.webdriver_url).await
    }
}
