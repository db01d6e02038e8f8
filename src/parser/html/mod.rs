mod product_extractor;

pub use product_extractor::ProductExtractor;
