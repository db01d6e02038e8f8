use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use std::str::FromStr;
use std::sync::Arc;

use super::{CatalogClient, Pagination, Product, ProductPage, ProductStore};
use crate::ScraperError;

pub const REASONABLE_PRICE: f64 = 50.0;
pub const RECENT_RELEASE_DAYS: i64 = 14;
pub const NEW_PRODUCT_DAYS: i64 = 182;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    /// Most recent release first.
    DateAsc,
    /// Oldest release first.
    DateDesc,
}

impl FromStr for SortOrder {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            other => Err(ScraperError::ConfigError(format!("unknown sort order '{}'", other))),
        }
    }
}

/// The listing a user is looking at: the stored page plus whatever filters
/// and sort have been applied since it was loaded.
pub struct CatalogState {
    store: Arc<dyn ProductStore>,
    products: Vec<Product>,
    pagination: Pagination,
}

impl CatalogState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        let page = store.get().unwrap_or_default();
        Self {
            store,
            products: page.result,
            pagination: page.meta,
        }
    }

    pub fn set_page(&mut self, page: ProductPage) {
        self.products = page.result.clone();
        self.pagination = page.meta.clone();
        self.store.set(page);
    }

    /// Loads a page from the API. On failure the current page is kept and
    /// `false` is returned.
    pub async fn load_page(&mut self, client: &CatalogClient, page: usize, size: usize) -> bool {
        match client.fetch_products(page, size).await {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => {
                warn!("Keeping current page {}", self.pagination.current_page);
                false
            }
        }
    }

    /// Drops filters and sort, back to the stored page.
    pub fn reset(&mut self) {
        let page = self.store.get().unwrap_or_default();
        self.products = page.result;
        self.pagination = page.meta;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn filter_brand(&mut self, brand: &str) {
        self.products.retain(|p| p.brand == brand);
        debug!("Brand filter '{}' kept {} products", brand, self.products.len());
    }

    pub fn filter_recently_released(&mut self, today: NaiveDate) {
        let since = today - Duration::days(RECENT_RELEASE_DAYS);
        self.products.retain(|p| p.released >= since);
    }

    pub fn filter_reasonable_price(&mut self) {
        self.products.retain(|p| p.price < REASONABLE_PRICE);
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::PriceAsc => self.products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDesc => self.products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::DateAsc => self.products.sort_by(|a, b| b.released.cmp(&a.released)),
            SortOrder::DateDesc => self.products.sort_by(|a, b| a.released.cmp(&b.released)),
        }
    }

    /// Distinct brands of the visible products, in first-seen order.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands
    }

    pub fn new_products_count(&self, today: NaiveDate) -> usize {
        let since = today - Duration::days(NEW_PRODUCT_DAYS);
        self.products.iter().filter(|p| p.released > since).count()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.pagination.page_count).collect()
    }
}
