//! Montlimart listing pages (`https://www.montlimart.com/...`).

use log::error;

use crate::core::config::{ExtractorSelectors, ScraperConfig};
use crate::parser::{Parser, ProductExtractor, ProductRecord};
use crate::EshopScraper;

pub const LISTING_URL: &str = "https://www.montlimart.com/toute-la-collection.html";

pub fn config() -> ScraperConfig {
    ScraperConfig::default().with_selectors(ExtractorSelectors::montlimart())
}

/// Scrapes one listing page. `None` when the page could not be fetched.
pub async fn scrape(url: &str) -> Option<Vec<ProductRecord>> {
    match EshopScraper::from_config(&config()) {
        Ok(scraper) => scraper.scrape(url).await,
        Err(e) => {
            error!("Cannot build Montlimart scraper: {}", e);
            None
        }
    }
}

pub fn parse(html: &str) -> Vec<ProductRecord> {
    match ProductExtractor::montlimart() {
        Ok(extractor) => extractor.parse(html),
        Err(e) => {
            error!("Cannot build Montlimart extractor: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="product-list row">
    <div class="product-list__block col-6">
      <a href="/pull-gris.html"><img src="/media/pull-gris.jpg"></a>
      <div class="product-name">
        <a class="text-reset" href="/pull-gris.html">12,00 €</a>
      </div>
    </div>
    <div class="product-list__block col-6">
      <div class="product-name">
        <a class="text-reset" href="/veste.html">45,50 €</a>
      </div>
    </div>
    <div class="product-list__block col-6">
      <div class="product-name">
        <a class="text-reset" href="/tshirt.html">8 €</a>
      </div>
    </div>
  </div>
</body>
</html>"#;

    #[test]
    fn test_parse_fixture() {
        let records = parse(FIXTURE);
        let prices: Vec<f64> = records.iter().map(|r| r.price).collect();

        assert_eq!(prices, vec![12.0, 45.5, 8.0]);
        assert_eq!(records[0].name, "12,00 €");
    }

    #[tokio::test]
    async fn test_scrape_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/toute-la-collection.html"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(FIXTURE)
                    .insert_header("content-type", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/toute-la-collection.html", server.uri());
        let records = scrape(&url).await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2], ProductRecord::new("8 €", 8.0));
    }

    #[tokio::test]
    async fn test_scrape_latin1_page() {
        let server = MockServer::start().await;
        let body = FIXTURE.replace('\u{20ac}', "\u{a4}");
        // Every char is below U+0100 here, so one byte each.
        let latin1: Vec<u8> = body.chars().map(|c| c as u32 as u8).collect();
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(latin1, "text/html; charset=iso-8859-15"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/toute-la-collection.html", server.uri());
        let records = scrape(&url).await.unwrap();
        let prices: Vec<f64> = records.iter().map(|r| r.price).collect();

        assert_eq!(prices, vec![12.0, 45.5, 8.0]);
        assert_eq!(records[1].name, "45,50 \u{20ac}");
    }

    #[tokio::test]
    async fn test_scrape_over_http_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let url = format!("{}/toute-la-collection.html", server.uri());
        assert_eq!(scrape(&url).await, None);
    }

    #[tokio::test]
    async fn test_scrape_unreachable_host() {
        assert_eq!(scrape("http://127.0.0.1:1/toute-la-collection.html").await, None);
    }
}
