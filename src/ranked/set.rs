//! RankedSet implementation
//!
//! Vec-backed max-heap with threshold-gated repair and leaf-scan eviction.

use crate::config::Config;
use crate::error::{KvError, Result};
use super::Item;

/// Bounded collection of items, approximately max-heap ordered by value
///
/// ## Insertion
/// 1. At capacity: evict the lowest value found among the leaf slots
/// 2. Append the new item to the tail
/// 3. Sift up only if the value is above `insertion_threshold`
///
/// Items at or below the threshold stay where they were appended, so the
/// array is a valid heap only after a high-value insert or a `sort()`.
/// Eviction therefore targets the true minimum only while the heap is valid;
/// with unrepaired items in the tail it is a best effort.
#[derive(Debug, Clone)]
pub struct RankedSet {
    items: Vec<Item>,
    capacity: usize,
    insertion_threshold: i64,
    exposure_cap: usize,
}

impl RankedSet {
    /// Create an empty set
    ///
    /// `capacity` and `exposure_cap` must both be at least 1.
    pub fn new(capacity: usize, insertion_threshold: i64, exposure_cap: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(KvError::Config("capacity must be at least 1".to_string()));
        }
        if exposure_cap == 0 {
            return Err(KvError::Config("exposure cap must be at least 1".to_string()));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            insertion_threshold,
            exposure_cap,
        })
    }

    /// Create an empty set sized from a config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity, config.insertion_threshold, config.exposure_cap)
    }

    /// Offer an item, evicting first if the set is full
    pub fn insert(&mut self, item: Item) {
        while self.items.len() >= self.capacity {
            match self.evict_low() {
                Some(evicted) => {
                    tracing::trace!(key = %evicted.key, value = evicted.value, "evicted ranked item");
                }
                None => break,
            }
        }

        let promote = item.value > self.insertion_threshold;
        self.items.push(item);

        if promote {
            self.sift_up(self.items.len() - 1);
        }
    }

    /// Reorder retained items by descending value
    ///
    /// Stable, so a second call with no insert in between changes nothing.
    /// Only the first `capacity` slots take part if the set somehow grew past it.
    pub fn sort(&mut self) {
        let limit = self.items.len().min(self.capacity);
        self.items[..limit].sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Item at zero-based descending rank, as of the last `sort()`
    pub fn get_rank(&self, rank: usize) -> Result<&Item> {
        self.items
            .get(rank)
            .ok_or(KvError::RankOutOfRange {
                rank,
                len: self.items.len(),
            })
    }

    /// Values of the leading `min(len, exposure_cap)` items
    pub fn sorted_values(&self) -> Vec<i64> {
        self.items
            .iter()
            .take(self.exposure_cap)
            .map(|item| item.value)
            .collect()
    }

    /// Root of the heap
    pub fn peek(&self) -> Option<&Item> {
        self.items.first()
    }

    /// Items in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insertion_threshold(&self) -> i64 {
        self.insertion_threshold
    }

    pub fn exposure_cap(&self) -> usize {
        self.exposure_cap
    }

    // =========================================================================
    // Heap Internals
    // =========================================================================

    /// Remove the lowest-valued leaf
    ///
    /// In a max-heap the minimum always sits in a leaf, slots `len/2..len`.
    fn evict_low(&mut self) -> Option<Item> {
        let len = self.items.len();
        let victim = (len / 2..len).min_by_key(|&i| self.items[i].value)?;

        let evicted = self.items.swap_remove(victim);

        // The tail item now fills a leaf slot; it can only be out of place upward.
        if victim < self.items.len() {
            self.sift_up(victim);
        }

        Some(evicted)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].value <= self.items[parent].value {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &RankedSet) -> Vec<i64> {
        set.iter().map(|item| item.value).collect()
    }

    fn is_max_heap(set: &RankedSet) -> bool {
        let items: Vec<&Item> = set.iter().collect();
        (1..items.len()).all(|i| items[(i - 1) / 2].value >= items[i].value)
    }

    #[test]
    fn test_low_values_are_appended_without_repair() {
        let mut set = RankedSet::new(10, 100, 10).unwrap();

        for value in [1, 5, 9] {
            set.insert(Item::new("k", value));
        }

        assert_eq!(values(&set), vec![1, 5, 9]);
        assert!(!is_max_heap(&set));
    }

    #[test]
    fn test_high_value_is_sifted_to_root() {
        let mut set = RankedSet::new(10, 100, 10).unwrap();

        set.insert(Item::new("a", 150));
        set.insert(Item::new("b", 120));
        set.insert(Item::new("c", 300));

        assert_eq!(set.peek().unwrap().value, 300);
        assert!(is_max_heap(&set));
    }

    #[test]
    fn test_value_equal_to_threshold_is_not_repaired() {
        let mut set = RankedSet::new(10, 100, 10).unwrap();

        set.insert(Item::new("a", 50));
        set.insert(Item::new("b", 100));

        assert_eq!(values(&set), vec![50, 100]);
    }

    #[test]
    fn test_high_value_passes_unrepaired_tail() {
        let mut set = RankedSet::new(10, 100, 10).unwrap();

        set.insert(Item::new("a", 1));
        set.insert(Item::new("b", 2));
        set.insert(Item::new("c", 500));

        // slot 2's parent is slot 0
        assert_eq!(values(&set), vec![500, 2, 1]);
    }

    #[test]
    fn test_eviction_takes_lowest_leaf_when_heap_is_valid() {
        let mut set = RankedSet::new(3, 0, 3).unwrap();

        set.insert(Item::new("a", 30));
        set.insert(Item::new("b", 10));
        set.insert(Item::new("c", 20));
        set.insert(Item::new("d", 40));

        assert_eq!(set.len(), 3);
        assert!(!set.iter().any(|item| item.value == 10));
        assert_eq!(set.peek().unwrap().value, 40);
        assert!(is_max_heap(&set));
    }

    #[test]
    fn test_eviction_only_scans_leaves() {
        let mut set = RankedSet::new(3, 100, 3).unwrap();

        // All below threshold: stored as [1, 2, 3] with no repair.
        // Slot 0 is internal, so the 1 survives and the 2 is evicted.
        // The 3 refills slot 1 and moves above the 1.
        set.insert(Item::new("a", 1));
        set.insert(Item::new("b", 2));
        set.insert(Item::new("c", 3));
        set.insert(Item::new("d", 4));

        assert_eq!(values(&set), vec![3, 1, 4]);
    }

    #[test]
    fn test_unrepaired_item_can_be_evicted_by_next_insert() {
        let mut set = RankedSet::new(2, 100, 2).unwrap();

        set.insert(Item::new("big", 500));
        set.insert(Item::new("small", 3));
        set.insert(Item::new("next", 7));

        assert_eq!(set.len(), 2);
        assert!(!set.iter().any(|item| item.key == "small"));
    }

    #[test]
    fn test_capacity_one() {
        let mut set = RankedSet::new(1, 100, 1).unwrap();

        set.insert(Item::new("a", 10));
        set.insert(Item::new("b", 5));

        assert_eq!(set.len(), 1);
        assert_eq!(set.peek().unwrap().key, "b");
    }

    #[test]
    fn test_sort_restores_heap_order() {
        let mut set = RankedSet::new(10, 100, 10).unwrap();
        for value in [3, 9, 1, 7] {
            set.insert(Item::new("k", value));
        }

        set.sort();

        assert_eq!(values(&set), vec![9, 7, 3, 1]);
        assert!(is_max_heap(&set));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(matches!(RankedSet::new(0, 100, 1), Err(KvError::Config(_))));
        assert!(matches!(RankedSet::new(1, 100, 0), Err(KvError::Config(_))));
    }
}
