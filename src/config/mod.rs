//! Validated pagination configuration

mod attribute;
mod display_mode;
mod error;

pub use attribute::Attribute;
pub use display_mode::DisplayMode;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Inputs to the page window computation.
///
/// Every field is valid by construction: values only enter through the
/// validating setters, [`PaginationConfig::validate`], or JSON deserialization
/// (which runs the same checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawConfig")]
pub struct PaginationConfig {
    pub(crate) total_items: usize,
    pub(crate) items_per_page: usize,
    pub(crate) current_item: usize,
    pub(crate) max_visible_pages: usize,
    pub(crate) edge_pages: usize,
    pub(crate) middle_pages: usize,
    pub(crate) middle_page_gap: usize,
    pub(crate) prev_next_mode: DisplayMode,
    pub(crate) first_last_mode: DisplayMode,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: 10,
            current_item: 1,
            max_visible_pages: 5,
            edge_pages: 0,
            middle_pages: 0,
            middle_page_gap: 0,
            prev_next_mode: DisplayMode::Disabled,
            first_last_mode: DisplayMode::Disabled,
        }
    }
}

impl PaginationConfig {
    /// Create a configuration for `total_items` split into pages of `items_per_page`
    pub fn new(total_items: i64, items_per_page: i64) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_items_per_page(items_per_page)?;
        config.set_total_items(total_items)?;
        Ok(config)
    }

    /// Parse a camelCase JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_item(&self) -> usize {
        self.current_item
    }

    pub fn max_visible_pages(&self) -> usize {
        self.max_visible_pages
    }

    pub fn edge_pages(&self) -> usize {
        self.edge_pages
    }

    pub fn middle_pages(&self) -> usize {
        self.middle_pages
    }

    pub fn middle_page_gap(&self) -> usize {
        self.middle_page_gap
    }

    pub fn prev_next_mode(&self) -> DisplayMode {
        self.prev_next_mode
    }

    pub fn first_last_mode(&self) -> DisplayMode {
        self.first_last_mode
    }

    /// ceil(total_items / items_per_page)
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Highest accepted `current_item`. An empty collection still keeps item 1.
    fn max_current_item(&self) -> usize {
        self.total_items.max(1)
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == 0 {
            return Err(ConfigError::InvalidItemsPerPage(0));
        }
        if self.max_visible_pages == 0 {
            return Err(ConfigError::InvalidMaxVisiblePages(0));
        }
        if self.current_item == 0 || self.current_item > self.max_current_item() {
            return Err(ConfigError::CurrentItemOutOfRange {
                item: self.current_item as i64,
                max: self.max_current_item(),
            });
        }
        Ok(())
    }

    /// Set the total item count. A current item past the new end is pulled back.
    pub fn set_total_items(&mut self, value: i64) -> Result<(), ConfigError> {
        self.total_items = count(Attribute::TotalItems, value, ConfigError::NegativeTotalItems)?;
        self.current_item = self.current_item.min(self.max_current_item());
        Ok(())
    }

    pub fn set_items_per_page(&mut self, value: i64) -> Result<(), ConfigError> {
        self.items_per_page =
            positive(Attribute::ItemsPerPage, value, ConfigError::InvalidItemsPerPage)?;
        Ok(())
    }

    pub fn set_current_item(&mut self, value: i64) -> Result<(), ConfigError> {
        let max = self.max_current_item();
        self.current_item = usize::try_from(value)
            .ok()
            .filter(|item| (1..=max).contains(item))
            .ok_or(ConfigError::CurrentItemOutOfRange { item: value, max })?;
        Ok(())
    }

    pub fn set_max_visible_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.max_visible_pages =
            positive(Attribute::MaxVisiblePages, value, ConfigError::InvalidMaxVisiblePages)?;
        Ok(())
    }

    pub fn set_edge_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.edge_pages = count(Attribute::EdgePages, value, ConfigError::NegativeEdgePages)?;
        Ok(())
    }

    pub fn set_middle_pages(&mut self, value: i64) -> Result<(), ConfigError> {
        self.middle_pages = count(Attribute::MiddlePages, value, ConfigError::NegativeMiddlePages)?;
        Ok(())
    }

    pub fn set_middle_page_gap(&mut self, value: i64) -> Result<(), ConfigError> {
        self.middle_page_gap =
            count(Attribute::MiddlePageGap, value, ConfigError::NegativeMiddlePageGap)?;
        Ok(())
    }

    pub fn set_prev_next_mode(&mut self, value: i64) -> Result<(), ConfigError> {
        self.prev_next_mode = DisplayMode::try_from(value)?;
        Ok(())
    }

    pub fn set_first_last_mode(&mut self, value: i64) -> Result<(), ConfigError> {
        self.first_last_mode = DisplayMode::try_from(value)?;
        Ok(())
    }

    /// Apply an integer value to the field addressed by `attr`
    pub fn set(&mut self, attr: Attribute, value: i64) -> Result<(), ConfigError> {
        match attr {
            Attribute::TotalItems => self.set_total_items(value),
            Attribute::ItemsPerPage => self.set_items_per_page(value),
            Attribute::CurrentItem => self.set_current_item(value),
            Attribute::MaxVisiblePages => self.set_max_visible_pages(value),
            Attribute::EdgePages => self.set_edge_pages(value),
            Attribute::MiddlePages => self.set_middle_pages(value),
            Attribute::MiddlePageGap => self.set_middle_page_gap(value),
            Attribute::PrevNextMode => self.set_prev_next_mode(value),
            Attribute::FirstLastMode => self.set_first_last_mode(value),
        }
    }

    /// Read the field addressed by `attr` as an integer
    pub fn get(&self, attr: Attribute) -> i64 {
        let value = match attr {
            Attribute::TotalItems => self.total_items,
            Attribute::ItemsPerPage => self.items_per_page,
            Attribute::CurrentItem => self.current_item,
            Attribute::MaxVisiblePages => self.max_visible_pages,
            Attribute::EdgePages => self.edge_pages,
            Attribute::MiddlePages => self.middle_pages,
            Attribute::MiddlePageGap => self.middle_page_gap,
            Attribute::PrevNextMode => usize::from(self.prev_next_mode.code()),
            Attribute::FirstLastMode => usize::from(self.first_last_mode.code()),
        };
        i64::try_from(value).unwrap_or(i64::MAX)
    }
}

/// `value` as a count >= 0. Negative values get `negative`, values past
/// `usize::MAX` (32-bit targets) get `TooLarge`.
fn count(
    attribute: Attribute,
    value: i64,
    negative: fn(i64) -> ConfigError,
) -> Result<usize, ConfigError> {
    if value < 0 {
        return Err(negative(value));
    }
    usize::try_from(value).map_err(|_| ConfigError::TooLarge {
        attribute,
        value,
        max: usize::MAX,
    })
}

/// `value` as a count >= 1
fn positive(
    attribute: Attribute,
    value: i64,
    invalid: fn(i64) -> ConfigError,
) -> Result<usize, ConfigError> {
    if value < 1 {
        return Err(invalid(value));
    }
    count(attribute, value, invalid)
}

/// Wire shape of [`PaginationConfig`]: signed so negative input reaches validation
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    total_items: i64,
    items_per_page: i64,
    current_item: i64,
    max_visible_pages: i64,
    edge_pages: i64,
    middle_pages: i64,
    middle_page_gap: i64,
    prev_next_mode: i64,
    first_last_mode: i64,
}

impl Default for RawConfig {
    fn default() -> Self {
        let defaults = PaginationConfig::default();
        Self {
            total_items: defaults.get(Attribute::TotalItems),
            items_per_page: defaults.get(Attribute::ItemsPerPage),
            current_item: defaults.get(Attribute::CurrentItem),
            max_visible_pages: defaults.get(Attribute::MaxVisiblePages),
            edge_pages: defaults.get(Attribute::EdgePages),
            middle_pages: defaults.get(Attribute::MiddlePages),
            middle_page_gap: defaults.get(Attribute::MiddlePageGap),
            prev_next_mode: defaults.get(Attribute::PrevNextMode),
            first_last_mode: defaults.get(Attribute::FirstLastMode),
        }
    }
}

impl TryFrom<RawConfig> for PaginationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut config = PaginationConfig::default();
        config.set_items_per_page(raw.items_per_page)?;
        config.set_max_visible_pages(raw.max_visible_pages)?;
        config.set_edge_pages(raw.edge_pages)?;
        config.set_middle_pages(raw.middle_pages)?;
        config.set_middle_page_gap(raw.middle_page_gap)?;
        config.set_prev_next_mode(raw.prev_next_mode)?;
        config.set_first_last_mode(raw.first_last_mode)?;
        config.set_total_items(raw.total_items)?;
        // Checked against the final total, never clamped
        config.set_current_item(raw.current_item)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let config = PaginationConfig::new(1237, 12).unwrap();
        assert_eq!(config.total_pages(), 104);

        let config = PaginationConfig::new(0, 12).unwrap();
        assert_eq!(config.total_pages(), 0);

        let config = PaginationConfig::new(24, 12).unwrap();
        assert_eq!(config.total_pages(), 2);
    }

    #[test]
    fn test_rejected_setter_leaves_state() {
        let mut config = PaginationConfig::new(100, 10).unwrap();
        let before = config.clone();

        assert_eq!(config.set_total_items(-1), Err(ConfigError::NegativeTotalItems(-1)));
        assert_eq!(config.set_items_per_page(0), Err(ConfigError::InvalidItemsPerPage(0)));
        assert_eq!(
            config.set_current_item(101),
            Err(ConfigError::CurrentItemOutOfRange { item: 101, max: 100 })
        );
        assert!(config.set_current_item(0).is_err());
        assert_eq!(config.set_max_visible_pages(0), Err(ConfigError::InvalidMaxVisiblePages(0)));
        assert_eq!(config.set_edge_pages(-2), Err(ConfigError::NegativeEdgePages(-2)));
        assert_eq!(config.set_middle_pages(-1), Err(ConfigError::NegativeMiddlePages(-1)));
        assert_eq!(config.set_middle_page_gap(-5), Err(ConfigError::NegativeMiddlePageGap(-5)));
        assert_eq!(config.set_prev_next_mode(4), Err(ConfigError::InvalidDisplayMode(4)));
        assert_eq!(config.set_first_last_mode(-1), Err(ConfigError::InvalidDisplayMode(-1)));

        assert_eq!(config, before);
    }

    #[test]
    fn test_count_separates_negative_from_too_large() {
        assert_eq!(
            count(Attribute::EdgePages, -1, ConfigError::NegativeEdgePages),
            Err(ConfigError::NegativeEdgePages(-1))
        );
        assert_eq!(
            positive(Attribute::ItemsPerPage, 0, ConfigError::InvalidItemsPerPage),
            Err(ConfigError::InvalidItemsPerPage(0))
        );
        assert_eq!(count(Attribute::EdgePages, 7, ConfigError::NegativeEdgePages), Ok(7));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_count_past_usize_is_too_large() {
        let mut config = PaginationConfig::default();
        assert_eq!(
            config.set_total_items(5_000_000_000),
            Err(ConfigError::TooLarge {
                attribute: Attribute::TotalItems,
                value: 5_000_000_000,
                max: usize::MAX,
            })
        );
        assert_eq!(config.total_items(), 0);
    }

    #[test]
    fn test_shrinking_total_clamps_current_item() {
        let mut config = PaginationConfig::new(100, 10).unwrap();
        config.set_current_item(95).unwrap();
        config.set_total_items(40).unwrap();
        assert_eq!(config.current_item(), 40);

        config.set_total_items(0).unwrap();
        assert_eq!(config.current_item(), 1);
    }

    #[test]
    fn test_empty_collection_accepts_only_item_one() {
        let mut config = PaginationConfig::default();
        assert!(config.set_current_item(1).is_ok());
        assert!(config.set_current_item(2).is_err());
    }

    #[test]
    fn test_from_json_defaults_and_validation() {
        let config =
            PaginationConfig::from_json(r#"{"totalItems": 50, "edgePages": 1, "prevNextMode": 3}"#)
                .unwrap();
        assert_eq!(config.total_items(), 50);
        assert_eq!(config.items_per_page(), 10);
        assert_eq!(config.edge_pages(), 1);
        assert_eq!(config.prev_next_mode(), DisplayMode::Always);

        assert!(PaginationConfig::from_json(r#"{"itemsPerPage": 0}"#).is_err());
        assert!(PaginationConfig::from_json(r#"{"totalItems": 5, "currentItem": 6}"#).is_err());
        assert!(PaginationConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PaginationConfig::new(300, 25).unwrap();
        config.set_current_item(120).unwrap();
        config.set_first_last_mode(0).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"itemsPerPage\":25"));
        assert!(json.contains("\"firstLastMode\":0"));
        assert_eq!(PaginationConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_attribute_dispatch() {
        let mut config = PaginationConfig::new(100, 10).unwrap();
        config.set(Attribute::MiddlePages, 3).unwrap();
        assert_eq!(config.get(Attribute::MiddlePages), 3);
        assert_eq!(config.get(Attribute::PrevNextMode), 2);
    }
}
