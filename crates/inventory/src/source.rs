//! Stock source abstraction (where a store's initial stock comes from).

use std::sync::Arc;

use puffstore_core::ServiceError;

use crate::item::{Category, Item};

/// Supplies the stock a store is seeded with.
///
/// Implementations may be backed by anything (an HTTP API, a file, a canned
/// list). The store treats them as opaque and calls [`StockSource::fetch`]
/// exactly once, at construction.
///
/// Calling `fetch` repeatedly must be safe; each call may return different
/// data. Failures are returned, never panicked.
#[cfg_attr(test, mockall::automock)]
pub trait StockSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError>;
}

impl<S> StockSource for Arc<S>
where
    S: StockSource + ?Sized,
{
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        (**self).fetch()
    }
}

/// Production source serving a fixed catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStockSource {
    catalogue: Vec<Item>,
}

impl CatalogStockSource {
    pub fn new(catalogue: Vec<Item>) -> Self {
        Self { catalogue }
    }
}

impl Default for CatalogStockSource {
    /// One powder of each grade: smooth 100, strong 200, invisible 300.
    fn default() -> Self {
        Self::new(vec![
            Item::new(Category::Smooth, 100),
            Item::new(Category::Strong, 200),
            Item::new(Category::Invisible, 300),
        ])
    }
}

impl StockSource for CatalogStockSource {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        tracing::debug!(items = self.catalogue.len(), "serving catalogue stock");
        Ok(self.catalogue.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogue_has_one_item_per_grade() {
        let items = CatalogStockSource::default().fetch().unwrap();
        assert_eq!(
            items,
            vec![
                Item::new(Category::Smooth, 100),
                Item::new(Category::Strong, 200),
                Item::new(Category::Invisible, 300),
            ]
        );
    }

    #[test]
    fn fetch_is_repeatable() {
        let source = CatalogStockSource::new(vec![Item::new(Category::Strong, 5)]);
        assert_eq!(source.fetch().unwrap(), source.fetch().unwrap());
    }

    #[test]
    fn arc_delegates_to_inner_source() {
        let mut mock = MockStockSource::new();
        mock.expect_fetch()
            .times(1)
            .returning(|| Err(ServiceError::unavailable("powder api")));
        let shared = Arc::new(mock);

        assert_eq!(
            shared.fetch(),
            Err(ServiceError::unavailable("powder api"))
        );
    }
}
