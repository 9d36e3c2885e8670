//! `puffstore-core` — shared building blocks for the store crates.
//!
//! This crate holds the error taxonomy and value-object marker used by the
//! inventory crate (no infrastructure concerns).

pub mod error;
pub mod value_object;

pub use error::{ServiceError, StoreError, StoreResult};
pub use value_object::ValueObject;
