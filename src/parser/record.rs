use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    /// `NaN` when the source text held no number.
    pub price: f64,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn has_price(&self) -> bool {
        !self.price.is_nan()
    }
}
