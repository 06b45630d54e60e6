//! Window, edge and middle page selection

use std::ops::Range;

use serde::Serialize;
use smallvec::SmallVec;

use super::math::{clamp, ItemRange};
use crate::config::PaginationConfig;

/// Why a page button is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    /// Inside the block centered on the current page
    Window,
    /// Pinned at the start of the page range
    LowEdge,
    /// Pinned at the end of the page range
    HighEdge,
    /// Filler inside a large gap
    Middle,
}

/// One page button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageDescriptor {
    pub page: usize,
    pub kind: PageKind,
}

impl PageDescriptor {
    pub fn new(page: usize, kind: PageKind) -> Self {
        Self { page, kind }
    }
}

/// Page buttons, kept inline for typical control sizes
pub type PageList = SmallVec<[PageDescriptor; 16]>;

/// Result of one page window computation.
///
/// `pages` is strictly ascending by page number. Window bounds and
/// `current_page` are 0 and all ranges are `None` when there are no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub total_pages: usize,
    pub current_page: usize,
    pub current_item: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub pages: PageList,
    pub current_range: Option<ItemRange>,
    pub previous_range: Option<ItemRange>,
    pub next_range: Option<ItemRange>,
}

impl PageWindow {
    /// Compute the page buttons and ranges for `config`
    pub fn compute(config: &PaginationConfig) -> Self {
        let total_pages = config.total_pages();
        if total_pages == 0 {
            tracing::debug!("no items, page window is empty");
            return Self::empty(config.current_item());
        }

        let current_item = clamp(config.current_item(), 1, config.total_items());
        let current_page = config.page_from_item(current_item);
        let (window_start, window_end) =
            window_bounds(current_page, total_pages, config.max_visible_pages());

        let mut pages = PageList::new();
        pages.extend(
            (window_start..=window_end).map(|page| PageDescriptor::new(page, PageKind::Window)),
        );
        push_edges(&mut pages, config.edge_pages(), window_start, window_end, total_pages);
        push_middles(&mut pages, config, window_start, window_end, total_pages);

        // Stable sort keeps insertion order (window, edges, middles) on a tie
        let produced = pages.len();
        pages.sort_by_key(|desc| desc.page);
        pages.dedup_by_key(|desc| desc.page);
        debug_assert_eq!(produced, pages.len(), "page kinds overlap");

        let items_per_page = config.items_per_page();
        let previous_page = config.page_from_item(current_item.saturating_sub(items_per_page));
        let next_page = config.page_from_item(current_item.saturating_add(items_per_page));

        tracing::debug!(
            current_page,
            total_pages,
            window_start,
            window_end,
            buttons = pages.len(),
            "page window computed"
        );

        Self {
            total_pages,
            current_page,
            current_item,
            window_start,
            window_end,
            pages,
            current_range: config.range_from_page(current_page),
            previous_range: config.range_from_page(previous_page),
            next_range: config.range_from_page(next_page),
        }
    }

    fn empty(current_item: usize) -> Self {
        Self {
            total_pages: 0,
            current_page: 0,
            current_item,
            window_start: 0,
            window_end: 0,
            pages: PageList::new(),
            current_range: None,
            previous_range: None,
            next_range: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Kind of the button for `page`, if one is shown
    pub fn kind_of(&self, page: usize) -> Option<PageKind> {
        self.pages
            .binary_search_by_key(&page, |desc| desc.page)
            .ok()
            .map(|idx| self.pages[idx].kind)
    }

    /// Pairs of adjacent buttons with hidden pages between them
    pub fn gaps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pages
            .windows(2)
            .map(|pair| (pair[0].page, pair[1].page))
            .filter(|(lo, hi)| hi - lo > 1)
    }
}

/// Window of at most `max_visible` pages centered on `current_page`, kept inside
/// `[1, total_pages]`. Requires `total_pages >= 1`.
fn window_bounds(current_page: usize, total_pages: usize, max_visible: usize) -> (usize, usize) {
    let total = total_pages as i64;
    let max_visible = max_visible as i64;
    let centered = current_page as i64 - max_visible / 2;
    let latest = total - max_visible + 1;
    let start = clamp(centered.min(latest), 1, total);
    let end = clamp(start + max_visible - 1, 1, total);
    (start as usize, end as usize)
}

fn push_edges(
    pages: &mut PageList,
    edge_pages: usize,
    window_start: usize,
    window_end: usize,
    total_pages: usize,
) {
    if edge_pages == 0 {
        return;
    }
    if window_start > 1 {
        let last = edge_pages.min(window_start - 1);
        pages.extend((1..=last).map(|page| PageDescriptor::new(page, PageKind::LowEdge)));
    }
    if window_end < total_pages {
        let first = (total_pages.saturating_sub(edge_pages) + 1).max(window_end + 1);
        pages.extend(
            (first..=total_pages).map(|page| PageDescriptor::new(page, PageKind::HighEdge)),
        );
    }
}

fn push_middles(
    pages: &mut PageList,
    config: &PaginationConfig,
    window_start: usize,
    window_end: usize,
    total_pages: usize,
) {
    let middle_pages = config.middle_pages();
    if middle_pages == 0 {
        return;
    }
    let edge_pages = config.edge_pages() as i64;
    let (left_anchor, right_anchor) = if edge_pages > 0 {
        (edge_pages, total_pages as i64 - edge_pages + 1)
    } else {
        (1, total_pages as i64)
    };

    let min_gap = config.middle_page_gap();
    let low = centered_run(left_anchor, window_start as i64, middle_pages, min_gap);
    let high = centered_run(window_end as i64, right_anchor, middle_pages, min_gap);
    for run in [low, high].into_iter().flatten() {
        pages.extend(run.map(|page| PageDescriptor::new(page, PageKind::Middle)));
    }
}

/// Run of up to `count` pages centered in the open interval `(lo, hi)`, or
/// `None` when the interval is not wider than `min_gap`.
fn centered_run(lo: i64, hi: i64, count: usize, min_gap: usize) -> Option<Range<usize>> {
    let gap = hi - lo - 1;
    if gap <= min_gap as i64 {
        return None;
    }
    let count = (count as i64).min(gap);
    let first = lo + 1 + (gap - count) / 2;
    Some(first as usize..(first + count) as usize)
}
