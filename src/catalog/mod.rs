pub mod client;
pub mod state;
pub mod store;
pub mod types;

pub use client::{CatalogClient, CatalogConfig};
pub use state::{CatalogState, SortOrder};
pub use store::{InMemoryStore, ProductStore};
pub use types::{Pagination, Product, ProductPage};
