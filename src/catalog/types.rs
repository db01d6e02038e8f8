use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: String,
    pub brand: String,
    pub name: String,
    pub link: String,
    pub price: f64,
    pub released: NaiveDate,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub count: usize,
}

/// One page of the products endpoint: `data` in `{success, data}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub result: Vec<Product>,
    pub meta: Pagination,
}

/// `data` of the brands endpoint: a bare list or one wrapped in `result`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum BrandList {
    Plain(Vec<String>),
    Wrapped { result: Vec<String> },
}

impl BrandList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            BrandList::Plain(brands) | BrandList::Wrapped { result: brands } => brands,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}
