use std::time::Duration;

use eshop_scraper::eshops::montlimart;
use eshop_scraper::{EshopScraper, ScraperResult};
use log::{error, info};

#[tokio::main]
async fn main() -> ScraperResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| montlimart::LISTING_URL.to_string());

    let config = montlimart::config().with_timeout(Duration::from_secs(30));
    let scraper = EshopScraper::from_config(&config)?;

    let Some(products) = scraper.scrape(&url).await else {
        error!("No products scraped from {}", url);
        std::process::exit(1);
    };

    info!("Fetch stats: {}", scraper.stats().summary());
    println!("{}", serde_json::to_string_pretty(&products)?);

    Ok(())
}
