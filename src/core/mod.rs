pub mod config;
mod errors;
mod eshop_scraper;

pub use config::{ExtractorSelectors, ScraperConfig};
pub use errors::{ScraperError, ScraperResult};
pub use eshop_scraper::EshopScraper;
