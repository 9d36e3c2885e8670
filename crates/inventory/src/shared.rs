//! Thread-safe wrapper around [`Inventory`].
//!
//! One mutex guards the whole stock, so add/remove/list never interleave.

use std::sync::{Mutex, MutexGuard};

use puffstore_core::{StoreError, StoreResult};

use crate::item::Item;
use crate::notifier::Notifier;
use crate::source::StockSource;
use crate::store::{GoodsStore, Inventory, dispatch_notification};

#[derive(Debug)]
pub struct SharedInventory<S, N> {
    inner: Mutex<Inventory<S, N>>,
}

impl<S, N> SharedInventory<S, N>
where
    S: StockSource,
    N: Notifier,
{
    pub fn new(inventory: Inventory<S, N>) -> Self {
        Self {
            inner: Mutex::new(inventory),
        }
    }

    /// Seed a new store and wrap it.
    pub fn open(source: S, notifier: N) -> StoreResult<Self> {
        Inventory::new(source, notifier).map(Self::new)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inventory<S, N>>> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }

    pub fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.lock()?.list())
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn add_item(&self, item: Item) -> StoreResult<()> {
        self.lock()?.add_item(item);
        Ok(())
    }

    pub fn remove_item(&self) -> StoreResult<Item> {
        self.lock()?.remove_item()
    }

    /// The lock is released before the notifier runs, so a slow channel does
    /// not block the stock and a notifier may call back into this store.
    pub fn notify(&self, recipient_id: &str) -> StoreResult<()> {
        let (notifier, reporter) = self.lock()?.notification_handles();
        dispatch_notification(&*notifier, &*reporter, recipient_id);
        Ok(())
    }

    /// Run `f` as a single critical section.
    pub fn with_inventory<T>(&self, f: impl FnOnce(&mut Inventory<S, N>) -> T) -> StoreResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn into_inner(self) -> StoreResult<Inventory<S, N>> {
        self.inner.into_inner().map_err(|_| StoreError::LockPoisoned)
    }
}
