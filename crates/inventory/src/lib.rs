//! Powder puff store inventory.
//!
//! A stock collection seeded from an injected [`StockSource`], able to notify
//! recipients through an injected [`Notifier`]. Both collaborators are traits
//! so production services and test doubles plug in the same way.

pub mod item;
pub mod notifier;
pub mod report;
pub mod shared;
pub mod source;
pub mod store;

#[cfg(any(test, feature = "test-doubles"))]
pub mod doubles;


pub use item::{Category, Item};
pub use notifier::{LineNotifier, Notifier};
pub use report::{
    NotificationOutcome, NotificationReport, RecordingReportSink, ReportSink, TracingReportSink,
};
pub use shared::SharedInventory;
pub use source::{CatalogStockSource, StockSource};
pub use store::{GoodsStore, Inventory};
