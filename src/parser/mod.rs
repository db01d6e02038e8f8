pub mod base;
pub mod html;
pub mod record;
pub mod text;

pub use base::Parser;
pub use html::ProductExtractor;
pub use record::ProductRecord;
pub use text::{normalize_whitespace, parse_price};
