//! String attribute names accepted at the host boundary

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// A configurable attribute, addressed by its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    TotalItems,
    ItemsPerPage,
    CurrentItem,
    MaxVisiblePages,
    EdgePages,
    MiddlePages,
    MiddlePageGap,
    PrevNextMode,
    FirstLastMode,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Attribute::TotalItems,
        Attribute::ItemsPerPage,
        Attribute::CurrentItem,
        Attribute::MaxVisiblePages,
        Attribute::EdgePages,
        Attribute::MiddlePages,
        Attribute::MiddlePageGap,
        Attribute::PrevNextMode,
        Attribute::FirstLastMode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::TotalItems => "total-items",
            Attribute::ItemsPerPage => "items-per-page",
            Attribute::CurrentItem => "current-item",
            Attribute::MaxVisiblePages => "max-visible-pages",
            Attribute::EdgePages => "edge-pages",
            Attribute::MiddlePages => "middle-pages",
            Attribute::MiddlePageGap => "middle-page-gap",
            Attribute::PrevNextMode => "prev-next-mode",
            Attribute::FirstLastMode => "first-last-mode",
        }
    }

    /// Parse an attribute value as an integer, keeping the name for the error
    pub fn parse_value(self, value: &str) -> Result<i64, ConfigError> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidAttributeValue {
                name: self.name().to_string(),
                value: value.to_string(),
            })
    }
}

impl FromStr for Attribute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownAttribute(s.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for attr in Attribute::ALL {
            assert_eq!(attr.name().parse::<Attribute>(), Ok(attr));
        }
        assert_eq!("Total-Items".parse::<Attribute>(), Ok(Attribute::TotalItems));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "page-size".parse::<Attribute>(),
            Err(ConfigError::UnknownAttribute("page-size".to_string()))
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(Attribute::EdgePages.parse_value(" 2 "), Ok(2));
        assert_eq!(Attribute::EdgePages.parse_value("-3"), Ok(-3));
        assert_eq!(
            Attribute::EdgePages.parse_value("two"),
            Err(ConfigError::InvalidAttributeValue {
                name: "edge-pages".to_string(),
                value: "two".to_string(),
            })
        );
    }
}
