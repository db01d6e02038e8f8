pub mod catalog;
pub mod core;
pub mod eshops;
pub mod fetchers;
pub mod http;
pub mod parser;
pub mod stats;

pub use crate::core::{EshopScraper, ExtractorSelectors, ScraperConfig};
pub use crate::core::{ScraperError, ScraperResult};
pub use crate::fetchers::{Fetcher, HttpFetcher, MockFetcher};
pub use crate::http::{HttpResponse, ResponseType};
pub use crate::parser::{Parser, ProductExtractor, ProductRecord};
pub use crate::stats::StatsTracker;
