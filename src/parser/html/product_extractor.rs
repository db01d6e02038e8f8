use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};

use crate::core::config::ExtractorSelectors;
use crate::parser::{normalize_whitespace, parse_price, Parser, ProductRecord};
use crate::{ScraperError, ScraperResult};

pub struct ProductExtractor {
    block: Selector,
    name: Selector,
    price: Selector,
}

impl ProductExtractor {
    pub fn new(selectors: &ExtractorSelectors) -> ScraperResult<Self> {
        Ok(Self {
            block: compile(&selectors.block)?,
            name: compile(&selectors.name)?,
            price: compile(&selectors.price)?,
        })
    }

    pub fn montlimart() -> ScraperResult<Self> {
        Self::new(&ExtractorSelectors::montlimart())
    }

    fn first_text(block: &ElementRef, selector: &Selector) -> Option<String> {
        block
            .select(selector)
            .next()
            .map(|e| e.text().collect::<String>())
    }

    fn extract_record(&self, block: ElementRef) -> ProductRecord {
        let name = Self::first_text(&block, &self.name)
            .map(|text| normalize_whitespace(&text))
            .unwrap_or_default();
        let price = Self::first_text(&block, &self.price)
            .map(|text| parse_price(&text))
            .unwrap_or(f64::NAN);

        trace!("Extracted product: name={:?}, price={}", name, price);
        ProductRecord { name, price }
    }
}

impl Parser for ProductExtractor {
    fn parse(&self, html: &str) -> Vec<ProductRecord> {
        let document = Html::parse_document(html);

        let records: Vec<ProductRecord> = document
            .select(&self.block)
            .map(|block| self.extract_record(block))
            .collect();

        debug!("Extracted {} product blocks", records.len());
        records
    }
}

fn compile(selector: &str) -> ScraperResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScraperError::ConfigError(format!("invalid selector '{}': {:?}", selector, e)))
}
