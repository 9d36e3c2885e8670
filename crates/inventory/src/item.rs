use serde::{Deserialize, Serialize};

use puffstore_core::ValueObject;

/// Grade of a powder; the fixed set of labels the store sells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Smooth,
    Strong,
    Invisible,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Smooth, Category::Strong, Category::Invisible];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smooth => "smooth",
            Category::Strong => "strong",
            Category::Invisible => "invisible",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of stock.
///
/// Immutable once built; compared by value (no identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    category: Category,
    price: u32,
}

impl Item {
    pub fn new(category: Category, price: u32) -> Self {
        Self { category, price }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} @ {}", self.category, self.price)
    }
}
