//! The store: a stock collection seeded from a [`StockSource`] and able to
//! notify through a [`Notifier`].
//!
//! Construction either yields a ready store or the source's failure; there is
//! no half-built instance. After construction the collection evolves on its
//! own (the source is not consulted again).

use std::collections::VecDeque;
use std::sync::Arc;

use puffstore_core::{StoreError, StoreResult};

use crate::item::Item;
use crate::notifier::Notifier;
use crate::report::{NotificationReport, ReportSink, TracingReportSink};
use crate::source::StockSource;

/// Contract shared by the production store and its fakes.
pub trait GoodsStore {
    type Source: StockSource;
    type Notifier: Notifier;

    /// Fetch the initial stock once and build a ready store.
    fn open(source: Self::Source, notifier: Self::Notifier) -> StoreResult<Self>
    where
        Self: Sized;

    fn source(&self) -> &Self::Source;

    fn notifier(&self) -> &Self::Notifier;

    /// Current stock, oldest first.
    fn list(&self) -> Vec<Item>;

    /// Append `item` at the tail.
    fn add_item(&mut self, item: Item);

    /// Remove and return the oldest item.
    fn remove_item(&mut self) -> StoreResult<Item>;

    /// Send a message to `recipient_id`. Never fails outward.
    fn notify(&self, recipient_id: &str);
}

/// Production store.
pub struct Inventory<S, N> {
    source: S,
    notifier: Arc<N>,
    reporter: Arc<dyn ReportSink>,
    stock: VecDeque<Item>,
}

impl<S, N> Inventory<S, N>
where
    S: StockSource,
    N: Notifier,
{
    /// Build a store whose notification outcomes are logged.
    pub fn new(source: S, notifier: N) -> StoreResult<Self> {
        Self::with_report_sink(source, notifier, Arc::new(TracingReportSink))
    }

    /// Build a store reporting notification outcomes to `reporter`.
    pub fn with_report_sink(
        source: S,
        notifier: N,
        reporter: Arc<dyn ReportSink>,
    ) -> StoreResult<Self> {
        let stock = source.fetch().map_err(|cause| {
            tracing::warn!(error = %cause, "could not seed inventory");
            StoreError::SourceUnavailable(cause)
        })?;

        tracing::debug!(items = stock.len(), "inventory ready");

        Ok(Self {
            source,
            notifier: Arc::new(notifier),
            reporter,
            stock: stock.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Iterate the stock, oldest first, without copying it.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.stock.iter()
    }

    /// Handles needed to notify without borrowing the store.
    pub(crate) fn notification_handles(&self) -> (Arc<N>, Arc<dyn ReportSink>) {
        (Arc::clone(&self.notifier), Arc::clone(&self.reporter))
    }
}

/// Send through `notifier` and report the outcome to `reporter`.
pub(crate) fn dispatch_notification<N>(notifier: &N, reporter: &dyn ReportSink, recipient_id: &str)
where
    N: Notifier + ?Sized,
{
    let report = match notifier.send(recipient_id) {
        Ok(_) => NotificationReport::delivered(recipient_id),
        Err(cause) => {
            NotificationReport::failed(recipient_id, StoreError::NotifierUnavailable(cause))
        }
    };
    reporter.report(report);
}

impl<S, N> GoodsStore for Inventory<S, N>
where
    S: StockSource,
    N: Notifier,
{
    type Source = S;
    type Notifier = N;

    fn open(source: S, notifier: N) -> StoreResult<Self> {
        Self::new(source, notifier)
    }

    fn source(&self) -> &S {
        &self.source
    }

    fn notifier(&self) -> &N {
        &*self.notifier
    }

    fn list(&self) -> Vec<Item> {
        self.stock.iter().copied().collect()
    }

    fn add_item(&mut self, item: Item) {
        self.stock.push_back(item);
        tracing::debug!(%item, items = self.stock.len(), "item added");
    }

    fn remove_item(&mut self) -> StoreResult<Item> {
        let item = self.stock.pop_front().ok_or(StoreError::EmptyInventory)?;
        tracing::debug!(%item, items = self.stock.len(), "item removed");
        Ok(item)
    }

    fn notify(&self, recipient_id: &str) {
        dispatch_notification(&*self.notifier, &*self.reporter, recipient_id);
    }
}

impl<S, N> core::fmt::Debug for Inventory<S, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inventory")
            .field("stock", &self.stock)
            .finish_non_exhaustive()
    }
}
