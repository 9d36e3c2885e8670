//! Test doubles for the store's collaborators.
//!
//! Mocks come from `mockall` (`MockStockSource`, `MockNotifier`, test builds
//! only). This module holds the hand-written rest of the family:
//!
//! - stubs answer with a canned result
//! - dummies only fill a type slot
//! - spies count how often they were called
//! - fakes are small working replacements

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use puffstore_core::{ServiceError, StoreError, StoreResult};

use crate::item::Item;
use crate::notifier::Notifier;
use crate::source::StockSource;
use crate::store::GoodsStore;

/// Source answering every fetch with the same canned result.
#[derive(Debug, Clone)]
pub struct StubStockSource {
    response: Result<Vec<Item>, ServiceError>,
}

impl StubStockSource {
    pub fn returning(items: Vec<Item>) -> Self {
        Self { response: Ok(items) }
    }

    /// Fails every fetch with an unavailable powder API.
    pub fn failing() -> Self {
        Self::failing_with(ServiceError::unavailable("powder api"))
    }

    pub fn failing_with(error: ServiceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl StockSource for StubStockSource {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        self.response.clone()
    }
}

/// Notifier answering every send with the same canned result.
#[derive(Debug, Clone)]
pub struct StubNotifier {
    response: Result<bool, ServiceError>,
}

impl StubNotifier {
    pub fn accepting() -> Self {
        Self { response: Ok(true) }
    }

    /// Fails every send with an unavailable LINE service.
    pub fn failing() -> Self {
        Self {
            response: Err(ServiceError::unavailable("line service")),
        }
    }
}

impl Notifier for StubNotifier {
    fn send(&self, _recipient_id: &str) -> Result<bool, ServiceError> {
        self.response.clone()
    }
}

/// Source with no stock.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyStockSource;

impl StockSource for DummyStockSource {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(Vec::new())
    }
}

/// Notifier that is never expected to deliver anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyNotifier;

impl Notifier for DummyNotifier {
    fn send(&self, _recipient_id: &str) -> Result<bool, ServiceError> {
        Err(ServiceError::unavailable("line service"))
    }
}

/// Empty source counting its fetches.
#[derive(Debug, Default)]
pub struct SpyStockSource {
    fetches: AtomicUsize,
}

impl SpyStockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl StockSource for SpyStockSource {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

/// Accepting notifier counting its sends and keeping the recipients.
#[derive(Debug, Default)]
pub struct SpyNotifier {
    sends: AtomicUsize,
    recipients: Mutex<Vec<String>>,
}

impl SpyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    /// Recipients in call order.
    pub fn recipients(&self) -> Vec<String> {
        match self.recipients.lock() {
            Ok(recipients) => recipients.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for SpyNotifier {
    fn send(&self, recipient_id: &str) -> Result<bool, ServiceError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        let mut recipients = match self.recipients.lock() {
            Ok(recipients) => recipients,
            Err(poisoned) => poisoned.into_inner(),
        };
        recipients.push(recipient_id.to_string());
        Ok(true)
    }
}

/// Source serving a fixed, in-memory stock list.
#[derive(Debug, Clone, Default)]
pub struct FakeStockSource {
    items: Vec<Item>,
}

impl FakeStockSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl StockSource for FakeStockSource {
    fn fetch(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.items.clone())
    }
}

/// `Vec`-backed store, a lightweight stand-in for `Inventory`.
///
/// Notification outcomes are only logged.
#[derive(Debug)]
pub struct FakeStore<S, N> {
    source: S,
    notifier: N,
    stock: Vec<Item>,
}

impl<S, N> GoodsStore for FakeStore<S, N>
where
    S: StockSource,
    N: Notifier,
{
    type Source = S;
    type Notifier = N;

    fn open(source: S, notifier: N) -> StoreResult<Self> {
        let stock = source.fetch().map_err(StoreError::SourceUnavailable)?;
        Ok(Self {
            source,
            notifier,
            stock,
        })
    }

    fn source(&self) -> &S {
        &self.source
    }

    fn notifier(&self) -> &N {
        &self.notifier
    }

    fn list(&self) -> Vec<Item> {
        self.stock.clone()
    }

    fn add_item(&mut self, item: Item) {
        self.stock.push(item);
    }

    fn remove_item(&mut self) -> StoreResult<Item> {
        if self.stock.is_empty() {
            return Err(StoreError::EmptyInventory);
        }
        Ok(self.stock.remove(0))
    }

    fn notify(&self, recipient_id: &str) {
        match self.notifier.send(recipient_id) {
            Ok(_) => tracing::info!(recipient_id, "fake store: message sent"),
            Err(error) => tracing::warn!(recipient_id, %error, "fake store: message not sent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;

    #[test]
    fn stubs_repeat_their_canned_answer() {
        let source = StubStockSource::failing();
        assert_eq!(source.fetch(), Err(ServiceError::unavailable("powder api")));
        assert_eq!(source.fetch(), Err(ServiceError::unavailable("powder api")));

        let source = StubStockSource::returning(vec![Item::new(Category::Smooth, 1)]);
        assert_eq!(source.fetch().unwrap().len(), 1);

        assert_eq!(StubNotifier::accepting().send("x"), Ok(true));
        assert!(StubNotifier::failing().send("x").is_err());
    }

    #[test]
    fn dummies_have_no_useful_behaviour() {
        assert_eq!(DummyStockSource.fetch(), Ok(vec![]));
        assert!(DummyNotifier.send("x").is_err());
    }

    #[test]
    fn spies_count_calls() {
        let source = SpyStockSource::new();
        source.fetch().unwrap();
        source.fetch().unwrap();
        assert_eq!(source.fetch_count(), 2);

        let notifier = SpyNotifier::new();
        notifier.send("a").unwrap();
        notifier.send("b").unwrap();
        assert_eq!(notifier.send_count(), 2);
        assert_eq!(notifier.recipients(), vec!["a", "b"]);
    }

    #[test]
    fn fake_store_follows_the_store_contract() {
        let mut store = FakeStore::open(
            FakeStockSource::new(vec![Item::new(Category::Smooth, 100)]),
            SpyNotifier::new(),
        )
        .unwrap();

        store.add_item(Item::new(Category::Strong, 200));
        assert_eq!(store.remove_item(), Ok(Item::new(Category::Smooth, 100)));
        assert_eq!(store.remove_item(), Ok(Item::new(Category::Strong, 200)));
        assert_eq!(store.remove_item(), Err(StoreError::EmptyInventory));

        store.notify("igroomgrim");
        assert_eq!(store.notifier().recipients(), vec!["igroomgrim"]);
    }

    #[test]
    fn fake_store_open_fails_like_the_real_one() {
        let err = FakeStore::open(StubStockSource::failing(), DummyNotifier).unwrap_err();
        assert_eq!(
            err,
            StoreError::SourceUnavailable(ServiceError::unavailable("powder api"))
        );
    }
}
