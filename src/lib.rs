//! Page-Window: page button selection for pagination controls
//!
//! This crate computes, from an item count and a page size, which page buttons a
//! pagination control shows and which item ranges the host should display:
//! - A window of pages centered on the current page
//! - Pinned edge pages and filler middle pages inside large gaps
//! - First/prev/next/last navigation with per-button display modes
//! - Synchronous update notifications after every change

pub mod config;
pub mod events;
pub mod navigation;
pub mod render;
pub mod wasm;
pub mod window;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use config::{Attribute, ConfigError, DisplayMode, PaginationConfig};
pub use events::{ListenerId, Listeners, PageUpdate};
pub use navigation::{ButtonState, NavButtons, NavControl};
pub use render::{PageStrip, StripItem};
pub use window::{ItemRange, PageDescriptor, PageKind, PageList, PageWindow};

/// Pagination state: configuration, the last computed window and its listeners.
///
/// Every successful mutation recomputes the window and notifies listeners
/// before returning. A rejected mutation changes nothing and notifies no one.
#[derive(Debug)]
pub struct Paginator {
    config: PaginationConfig,
    window: PageWindow,
    listeners: Listeners,
}

impl Paginator {
    /// Create a paginator from a configuration
    pub fn new(config: PaginationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let window = PageWindow::compute(&config);
        Ok(Self {
            config,
            window,
            listeners: Listeners::new(),
        })
    }

    /// Create a paginator over `total_items` with default window settings
    pub fn with_items(total_items: i64, items_per_page: i64) -> Result<Self, ConfigError> {
        Self::new(PaginationConfig::new(total_items, items_per_page)?)
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Page buttons in ascending order
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.window.pages
    }

    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.window.current_page
    }

    pub fn current_item(&self) -> usize {
        self.config.current_item()
    }

    /// Items to display, or `None` for an empty collection
    pub fn current_range(&self) -> Option<ItemRange> {
        self.window.current_range
    }

    pub fn page_from_item(&self, item: usize) -> usize {
        self.config.page_from_item(item)
    }

    pub fn range_from_page(&self, page: usize) -> Option<ItemRange> {
        self.config.range_from_page(page)
    }

    /// Snapshot in the shape listeners receive
    pub fn state(&self) -> PageUpdate {
        PageUpdate::from(&self.window)
    }

    pub fn controls(&self) -> NavButtons {
        NavButtons::resolve(&self.config)
    }

    pub fn strip(&self) -> PageStrip {
        PageStrip::build(&self.config, &self.window, &self.controls())
    }

    // ---- configuration ----

    pub fn set_total_items(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::TotalItems, value)
    }

    pub fn set_items_per_page(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::ItemsPerPage, value)
    }

    pub fn set_current_item(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::CurrentItem, value)
    }

    pub fn set_max_visible_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::MaxVisiblePages, value)
    }

    pub fn set_edge_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::EdgePages, value)
    }

    pub fn set_middle_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::MiddlePages, value)
    }

    pub fn set_middle_page_gap(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::MiddlePageGap, value)
    }

    pub fn set_prev_next_mode(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::PrevNextMode, value)
    }

    pub fn set_first_last_mode(&mut self, value: i64) -> Result<(), ConfigError> {
        self.apply(Attribute::FirstLastMode, value)
    }

    /// Validate and apply one field, then recompute and notify
    pub fn apply(&mut self, attr: Attribute, value: i64) -> Result<(), ConfigError> {
        if let Err(err) = self.config.set(attr, value) {
            tracing::warn!(attribute = %attr, value, error = %err, "rejected configuration");
            return Err(err);
        }
        self.refresh();
        Ok(())
    }

    /// Replace the whole configuration at once (one notification)
    pub fn set_config(&mut self, config: PaginationConfig) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "rejected configuration");
            return Err(err);
        }
        self.config = config;
        self.refresh();
        Ok(())
    }

    /// Set a field from its string attribute form, e.g. `("edge-pages", "2")`
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let attr: Attribute = name.parse()?;
        let value = attr.parse_value(value)?;
        self.apply(attr, value)
    }

    /// Current value of a field in its string attribute form
    pub fn attribute(&self, name: &str) -> Result<String, ConfigError> {
        let attr: Attribute = name.parse()?;
        Ok(self.config.get(attr).to_string())
    }

    // ---- navigation ----

    /// Jump to the first item. Returns false only for an empty collection.
    pub fn first(&mut self) -> bool {
        self.navigate(NavControl::First)
    }

    /// Jump to the last item. Returns false only for an empty collection.
    pub fn last(&mut self) -> bool {
        self.navigate(NavControl::Last)
    }

    /// Step back one page of items; false when already on the first page
    pub fn prev(&mut self) -> bool {
        self.navigate(NavControl::Prev)
    }

    /// Step forward one page of items; false when a full step would overrun
    pub fn next(&mut self) -> bool {
        self.navigate(NavControl::Next)
    }

    /// Move to the first item of `page` (clamped into range)
    pub fn go_to_page(&mut self, page: usize) -> bool {
        match self.config.range_from_page(page) {
            Some(range) => self.move_to(range.start),
            None => false,
        }
    }

    /// Click a navigation button, honoring its display mode
    pub fn activate(&mut self, control: NavControl) -> bool {
        let state = self.controls().get(control);
        match state.target {
            Some(target) if state.visible && state.enabled => self.move_to(target),
            _ => {
                tracing::trace!(?control, "inactive navigation button");
                false
            }
        }
    }

    fn navigate(&mut self, control: NavControl) -> bool {
        match navigation::navigate(&self.config, control) {
            Some(target) => self.move_to(target),
            None => {
                tracing::trace!(?control, current_item = self.current_item(), "navigation no-op");
                false
            }
        }
    }

    fn move_to(&mut self, item: usize) -> bool {
        self.config.current_item = item;
        self.refresh();
        true
    }

    // ---- listeners ----

    /// Register a listener called after every recomputation
    pub fn subscribe(&mut self, listener: impl FnMut(&PageUpdate) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn refresh(&mut self) {
        self.window = PageWindow::compute(&self.config);
        let update = self.state();
        self.listeners.emit(&update);
    }
}

impl Default for Paginator {
    fn default() -> Self {
        let config = PaginationConfig::default();
        let window = PageWindow::compute(&config);
        Self {
            config,
            window,
            listeners: Listeners::new(),
        }
    }
}
