use crate::http::ResponseType;
use crate::{HttpResponse, ScraperError, ScraperResult, StatsTracker};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use super::Fetcher;

#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
    /// Simulates a connection-level failure instead of a response.
    pub transport_error: Option<String>,
}

impl MockResponse {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
            transport_error: None,
        }
    }

    pub fn transport_error(message: &str) -> Self {
        Self {
            status: 0,
            body: String::new(),
            delay: None,
            transport_error: Some(message.to_string()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Serves canned responses keyed by URL. Unknown URLs fail like an
/// unreachable host.
#[derive(Clone, Default)]
pub struct MockFetcher {
    responses: Arc<HashMap<String, MockResponse>>,
    stats: StatsTracker,
}

impl MockFetcher {
    pub fn new(responses: Vec<(&str, MockResponse)>) -> ScraperResult<Self> {
        let mut map = HashMap::new();
        for (url, response) in responses {
            map.insert(Url::parse(url)?.to_string(), response);
        }

        Ok(Self {
            responses: Arc::new(map),
            stats: StatsTracker::new(),
        })
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: Url) -> ScraperResult<HttpResponse> {
        let Some(response) = self.responses.get(url.as_str()) else {
            self.stats.record_transport_error();
            return Err(ScraperError::MockError(format!("no route to {}", url)));
        };

        if let Some(delay) = response.delay {
            sleep(delay).await;
        }

        if let Some(message) = &response.transport_error {
            self.stats.record_transport_error();
            return Err(ScraperError::MockError(message.clone()));
        }

        self.stats
            .record_request(response.status, response.body.len(), ChronoDuration::zero());

        let headers = HashMap::new();
        let response_type = ResponseType::detect(&headers, &response.body);

        Ok(HttpResponse {
            url,
            status: response.status,
            headers,
            body: response.body.clone(),
            timestamp: Utc::now(),
            response_type,
        })
    }

    fn box_clone(&self) -> Box<dyn Fetcher> {
        Box::new(self.clone())
    }

    fn stats(&self) -> &StatsTracker {
        &self.stats
    }
}
