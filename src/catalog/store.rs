use parking_lot::RwLock;

use super::ProductPage;

/// Holds the last page fetched from the API, independent of any view.
pub trait ProductStore: Send + Sync {
    fn get(&self) -> Option<ProductPage>;
    fn set(&self, page: ProductPage);
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    page: RwLock<Option<ProductPage>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryStore {
    fn get(&self) -> Option<ProductPage> {
        self.page.read().clone()
    }

    fn set(&self, page: ProductPage) {
        *self.page.write() = Some(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Pagination;

    #[test]
    fn test_set_replaces_previous_page() {
        let store = InMemoryStore::new();
        assert!(store.get().is_none());

        let mut page = ProductPage::default();
        page.meta = Pagination {
            current_page: 1,
            page_count: 2,
            page_size: 12,
            count: 20,
        };
        store.set(page.clone());
        assert_eq!(store.get(), Some(page.clone()));

        page.meta.current_page = 2;
        store.set(page);
        assert_eq!(store.get().unwrap().meta.current_page, 2);
    }
}
