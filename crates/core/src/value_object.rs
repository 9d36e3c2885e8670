//! Value object trait: equality by value, not identity.
//!
//! Stock items have **no identity**. Two items with the same category and
//! price are the same item as far as the store is concerned.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: shows up in logs and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Item { category: Category, price: u32 }
///
/// impl ValueObject for Item {}
///
/// assert_eq!(Item::new(Category::Smooth, 100), Item::new(Category::Smooth, 100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
