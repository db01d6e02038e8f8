use crate::{HttpResponse, ScraperResult, StatsTracker};
use async_trait::async_trait;
use url::Url;

/// Transport capability: one GET per call, no retries.
///
/// A response with a non-success status is still `Ok`; only transport
/// failures (connection, DNS, timeout, body decoding) are `Err`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: Url) -> ScraperResult<HttpResponse>;
    fn box_clone(&self) -> Box<dyn Fetcher>;
    fn stats(&self) -> &StatsTracker;
}

impl Clone for Box<dyn Fetcher> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
