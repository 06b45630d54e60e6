//! Configuration errors

use thiserror::Error;

use super::Attribute;

/// A rejected configuration mutation.
///
/// Returned by every validating setter. The value that caused the rejection is
/// carried so the host can report it; the configuration itself is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("total items must be >= 0, got {0}")]
    NegativeTotalItems(i64),
    #[error("items per page must be >= 1, got {0}")]
    InvalidItemsPerPage(i64),
    #[error("current item {item} is outside [1, {max}]")]
    CurrentItemOutOfRange { item: i64, max: usize },
    #[error("max visible pages must be >= 1, got {0}")]
    InvalidMaxVisiblePages(i64),
    #[error("edge pages must be >= 0, got {0}")]
    NegativeEdgePages(i64),
    #[error("middle pages must be >= 0, got {0}")]
    NegativeMiddlePages(i64),
    #[error("middle page gap must be >= 0, got {0}")]
    NegativeMiddlePageGap(i64),
    #[error("{attribute} {value} exceeds the largest supported count {max}")]
    TooLarge {
        attribute: Attribute,
        value: i64,
        max: usize,
    },
    #[error("display mode must be in [0, 3], got {0}")]
    InvalidDisplayMode(i64),
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("attribute `{name}` expects an integer, got `{value}`")]
    InvalidAttributeValue { name: String, value: String },
    #[error("invalid configuration JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
