use async_trait::async_trait;

use crate::domain::book::BookFields;
use crate::errors::{ExtractionError, ScrapeError};

/// One live browsing session. Extraction failures are per-target and left to
/// the caller to absorb; `close` releases the underlying resource and must be
/// called when the owning scope ends.
#[async_trait]
pub trait ExtractorSession {
    async fn extract(&self, link: &str) -> Result<BookFields, ExtractionError>;

    async fn close(self);
}

/// Hands out browsing sessions. The link runner opens one session per run,
/// the batch runner one per window. Failing to open a session is fatal to
/// the run, unlike failing to extract a single target.
#[async_trait]
pub trait Extractor {
    type Session: ExtractorSession + Send;

    async fn session(&self) -> Result<Self::Session, ScrapeError>;
}
