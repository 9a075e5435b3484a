use actix_web::{http::StatusCode, ResponseError};
use thiserror::Error;
use thirtyfour::error::WebDriverError;

/// Fatal errors: these abort the current run and surface to the caller.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("dataset io: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset format: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("browser session: {0}")]
    Session(#[from] WebDriverError),
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Per-target extraction failures. Never fatal: the links flow records them
/// as failure entries, the batch flow counts them and moves on.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to load page {url}: {source}")]
    PageLoad {
        url: String,
        source: WebDriverError,
    },

    #[error("element `{0}` not found")]
    MissingElement(&'static str),

    #[error("cannot build target url from `{0}`")]
    BadTarget(String),
}
