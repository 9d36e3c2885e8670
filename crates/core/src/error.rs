//! Store error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by an injected collaborator (stock source, notifier).
///
/// Collaborators are opaque; this only distinguishes "could not be reached"
/// from "reached, but refused".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The collaborator could not be reached at all.
    #[error("{0} is unavailable")]
    Unavailable(String),

    /// The collaborator answered with a failure.
    #[error("request failed: {0}")]
    Failed(String),
}

impl ServiceError {
    pub fn unavailable(service: impl Into<String>) -> Self {
        Self::Unavailable(service.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// Store-level error.
///
/// Construction failures carry the collaborator cause; operational failures of
/// the notifier are reported, not returned (see `Inventory::notify`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The stock source failed while seeding a new store.
    #[error("stock source unavailable: {0}")]
    SourceUnavailable(#[source] ServiceError),

    /// The notifier failed to dispatch a message.
    #[error("notifier unavailable: {0}")]
    NotifierUnavailable(#[source] ServiceError),

    /// Removal was requested while no stock is left.
    #[error("inventory is empty")]
    EmptyInventory,

    /// A shared store's lock was poisoned by a panicking holder.
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// True for failures caused by an injected collaborator.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable(_) | Self::NotifierUnavailable(_)
        )
    }
}
