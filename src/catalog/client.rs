use log::{debug, error, info};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

use super::types::{ApiEnvelope, BrandList, ProductPage};
use crate::core::config::DEFAULT_USER_AGENT;
use crate::{ScraperError, ScraperResult};

pub const DEFAULT_API_URL: &str = "https://clear-fashion-api.vercel.app";
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: usize,
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the products API (`GET /?page=&size=`).
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    page_size: usize,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> ScraperResult<Self> {
        let mut builder = ClientBuilder::new().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: Url::parse(&config.base_url)?,
            page_size: config.page_size,
        })
    }

    /// `None` when the request fails or the API reports `success != true`.
    pub async fn fetch_products(&self, page: usize, size: usize) -> Option<ProductPage> {
        match self.try_fetch_products(page, size).await {
            Ok(products) => Some(products),
            Err(e) => {
                error!("Failed to fetch products page={} size={}: {}", page, size, e);
                None
            }
        }
    }

    pub async fn fetch_first_page(&self) -> Option<ProductPage> {
        self.fetch_products(1, self.page_size).await
    }

    /// Brand names from `GET {base}/brands`; `None` on any failure.
    pub async fn fetch_brands(&self) -> Option<Vec<String>> {
        match self.try_fetch_brands().await {
            Ok(brands) => Some(brands),
            Err(e) => {
                error!("Failed to fetch brands: {}", e);
                None
            }
        }
    }

    async fn try_fetch_brands(&self) -> ScraperResult<Vec<String>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScraperError::ConfigError(format!("cannot append path to {}", self.base_url)))?
            .pop_if_empty()
            .push("brands");

        info!("Fetching brands from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Brands API answered status={} body_length={}", status, body.len());

        let envelope: ApiEnvelope<BrandList> = serde_json::from_str(&body)?;
        match envelope.data {
            Some(data) if envelope.success => Ok(data.into_vec()),
            _ => Err(ScraperError::ExtractionError(format!(
                "brands API reported failure (status {}): {}",
                status, body
            ))),
        }
    }

    async fn try_fetch_products(&self, page: usize, size: usize) -> ScraperResult<ProductPage> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string());

        info!("Fetching products from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Products API answered status={} body_length={}", status, body.len());

        let envelope: ApiEnvelope<ProductPage> = serde_json::from_str(&body)?;
        match envelope.data {
            Some(data) if envelope.success => Ok(data),
            _ => Err(ScraperError::ExtractionError(format!(
                "products API reported failure (status {}): {}",
                status, body
            ))),
        }
    }
}
