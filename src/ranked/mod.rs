//! Ranked Module
//!
//! Bounded, approximately heap-ordered view of recently written values.
//!
//! ## Responsibilities
//! - Cap the number of retained items
//! - Surface high values toward the root as they arrive
//! - Produce a descending order on demand for rank reads
//!
//! ## Data Structure Choice
//! A plain `Vec<Item>` laid out as an implicit binary max-heap:
//! - Parent of slot `i` is `(i - 1) / 2`, children are `2i + 1` and `2i + 2`
//! - Only items above the insertion threshold get sifted up, so the heap
//!   property is conditional until the next full sort
//! - No internal locking; the owning store provides mutual exclusion

mod set;

pub use set::RankedSet;

/// A single `(key, value)` pair offered to the ranked set
///
/// Not keyed: writing the same key twice produces two separate items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub value: i64,
}

impl Item {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
