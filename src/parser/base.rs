use super::ProductRecord;

/// Turns a listing page body into product records. Never fails: markup
/// that does not match yields an empty vector.
pub trait Parser: Send + Sync {
    fn parse(&self, html: &str) -> Vec<ProductRecord>;
}
