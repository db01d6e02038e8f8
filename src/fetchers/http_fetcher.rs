use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::{header, Client, ClientBuilder};
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

use super::Fetcher;
use crate::core::config::ScraperConfig;
use crate::http::ResponseType;
use crate::{HttpResponse, ScraperError, ScraperResult, StatsTracker};

#[derive(Debug, Error)]
pub enum HttpFetcherError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] header::InvalidHeaderName),
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

impl From<HttpFetcherError> for ScraperError {
    fn from(err: HttpFetcherError) -> Self {
        match err {
            HttpFetcherError::HttpError(e) => ScraperError::HttpError(e),
            other => ScraperError::ConfigError(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    config: ScraperConfig,
    stats: StatsTracker,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, HttpFetcherError> {
        Self::from_config(&ScraperConfig::default())
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, HttpFetcherError> {
        let mut header_map = header::HeaderMap::new();
        header_map.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        for (key, value) in &config.headers {
            let name = header::HeaderName::from_bytes(key.as_bytes())?;
            let value = header::HeaderValue::from_str(value)?;
            header_map.insert(name, value);
        }

        let mut builder = ClientBuilder::new().default_headers(header_map);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
            stats: StatsTracker::new(),
        })
    }

    /// Rebuilds the client with extra default headers, keeping the stats.
    pub fn with_headers(self, headers: Vec<(&str, &str)>) -> Result<Self, HttpFetcherError> {
        let mut config = self.config;
        config
            .headers
            .extend(headers.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));

        let fetcher = Self::from_config(&config)?;
        Ok(Self {
            stats: self.stats,
            ..fetcher
        })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: Url) -> ScraperResult<HttpResponse> {
        debug!("Fetching URL: {}", url);
        let start_time = Utc::now();

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Transport failure for {}: {}", url, e);
                self.stats.record_transport_error();
                return Err(HttpFetcherError::HttpError(e).into());
            }
        };

        let status = response.status().as_u16();
        let headers = Self::extract_headers(&response);

        // Decodes with the declared charset, falling back to UTF-8 with
        // replacement characters.
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                self.stats.record_transport_error();
                return Err(HttpFetcherError::HttpError(e).into());
            }
        };

        let elapsed = Utc::now().signed_duration_since(start_time);
        self.stats.record_request(status, body.len(), elapsed);

        debug!(
            "Received response: status={}, body_length={}, elapsed_ms={}",
            status,
            body.len(),
            elapsed.num_milliseconds()
        );

        let response_type = ResponseType::detect(&headers, &body);

        Ok(HttpResponse {
            url,
            status,
            headers,
            body,
            timestamp: start_time,
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
