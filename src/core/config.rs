use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// CSS selectors describing one listing page layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorSelectors {
    /// Matches one element per product block.
    pub block: String,
    /// First match inside a block gives the product name.
    pub name: String,
    /// First match inside a block gives the price text.
    pub price: String,
}

impl ExtractorSelectors {
    pub fn new(block: &str, name: &str, price: &str) -> Self {
        Self {
            block: block.to_string(),
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    /// Montlimart listing layout. Name and price share one selector, so the
    /// name carries the price text as well.
    pub fn montlimart() -> Self {
        Self::new(".product-list .product-list__block", ".text-reset", ".text-reset")
    }

    pub fn with_name(mut self, selector: &str) -> Self {
        self.name = selector.to_string();
        self
    }

    pub fn with_price(mut self, selector: &str) -> Self {
        self.price = selector.to_string();
        self
    }
}

impl Default for ExtractorSelectors {
    fn default() -> Self {
        Self::montlimart()
    }
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub selectors: ExtractorSelectors,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            timeout: None,
            selectors: ExtractorSelectors::default(),
        }
    }
}

impl ScraperConfig {
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_headers(mut self, headers: Vec<(&str, &str)>) -> Self {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_selectors(mut self, selectors: ExtractorSelectors) -> Self {
        self.selectors = selectors;
        self
    }
}
