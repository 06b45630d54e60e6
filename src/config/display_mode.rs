//! Visibility policy for navigation buttons

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// How a navigation button pair (prev/next or first/last) is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum DisplayMode {
    /// Never rendered
    Never = 0,
    /// Rendered only while the action would change the current page
    WhenActionable = 1,
    /// Always rendered, disabled while not actionable
    #[default]
    Disabled = 2,
    /// Always rendered and clickable; the target is clamped into range
    Always = 3,
}

impl DisplayMode {
    /// Integer code used by attributes and the JS bridge
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for DisplayMode {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DisplayMode::Never),
            1 => Ok(DisplayMode::WhenActionable),
            2 => Ok(DisplayMode::Disabled),
            3 => Ok(DisplayMode::Always),
            other => Err(ConfigError::InvalidDisplayMode(other)),
        }
    }
}

impl From<DisplayMode> for u8 {
    fn from(mode: DisplayMode) -> Self {
        mode.code()
    }
}
