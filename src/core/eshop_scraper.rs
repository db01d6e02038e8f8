use log::{debug, error, info, warn};
use url::Url;

use crate::core::config::ScraperConfig;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::http::ResponseType;
use crate::parser::{Parser, ProductExtractor, ProductRecord};
use crate::{ScraperResult, StatsTracker};

/// Fetches one listing page and extracts its products.
///
/// Every failure stops here: `scrape` logs it and returns `None`, so
/// callers only ever see "records" or "no data".
pub struct EshopScraper {
    fetcher: Box<dyn Fetcher>,
    parser: Box<dyn Parser>,
}

impl EshopScraper {
    pub fn new(fetcher: Box<dyn Fetcher>, parser: Box<dyn Parser>) -> Self {
        Self { fetcher, parser }
    }

    /// HTTP fetcher and selector-driven extractor, both built from `config`.
    pub fn from_config(config: &ScraperConfig) -> ScraperResult<Self> {
        let fetcher = HttpFetcher::from_config(config)?;
        let parser = ProductExtractor::new(&config.selectors)?;
        Ok(Self::new(Box::new(fetcher), Box::new(parser)))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetcher>, config: &ScraperConfig) -> ScraperResult<Self> {
        let parser = ProductExtractor::new(&config.selectors)?;
        Ok(Self::new(fetcher, Box::new(parser)))
    }

    pub async fn scrape(&self, url: &str) -> Option<Vec<ProductRecord>> {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => {
                error!("Cannot fetch {:?}: {}", url, e);
                return None;
            }
        };

        info!("Scraping products from {}", url);
        let response = match self.fetcher.fetch(url.clone()).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        if !response.is_success() {
            error!(
                "Unsuccessful response from {}: status={}, body_length={}",
                response.url,
                response.status,
                response.body.len()
            );
            return None;
        }

        if response.response_type != ResponseType::Html {
            warn!(
                "Response from {} does not look like HTML ({:?}), parsing anyway",
                response.url, response.response_type
            );
        }

        let records = self.parse(&response.body);
        debug!("Scraped {} products from {}", records.len(), response.url);
        Some(records)
    }

    pub fn parse(&self, html: &str) -> Vec<ProductRecord> {
        self.parser.parse(html)
    }

    pub fn stats(&self) -> &StatsTracker {
        self.fetcher.stats()
    }
}
