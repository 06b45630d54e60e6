//! Numeric helpers shared by the window calculator and navigation

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Inclusive, 1-based item bounds of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRange {
    pub start: usize,
    pub end: usize,
}

impl ItemRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start >= 1 && end >= start, "bad item range {start}..={end}");
        Self { start, end }
    }

    pub fn contains(&self, item: usize) -> bool {
        item >= self.start && item <= self.end
    }

    /// Number of items on the page
    pub fn item_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Zero-based half-open bounds, for slicing a host collection
    pub fn as_slice_bounds(&self) -> std::ops::Range<usize> {
        (self.start - 1)..self.end
    }
}

/// Clamp `value` into `[min, max]`. When `max < min` the lower bound wins.
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    value.min(max).max(min)
}

impl PaginationConfig {
    /// Page holding `item`, after clamping it into `[1, total_items]`.
    /// Returns 0 for an empty collection.
    pub fn page_from_item(&self, item: usize) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        clamp(item, 1, self.total_items).div_ceil(self.items_per_page)
    }

    /// Item range of `page`, after clamping it into `[1, total_pages]`.
    /// Returns `None` for an empty collection.
    pub fn range_from_page(&self, page: usize) -> Option<ItemRange> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return None;
        }
        let page = clamp(page, 1, total_pages);
        // (page - 1) * items_per_page < total_items, so only the end can overflow
        let start = (page - 1) * self.items_per_page + 1;
        let end = page.saturating_mul(self.items_per_page).min(self.total_items);
        Some(ItemRange::new(start, end))
    }

    /// Page that `current_item` falls on
    pub fn current_page(&self) -> usize {
        self.page_from_item(self.current_item)
    }
}
