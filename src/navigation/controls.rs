//! Display-mode policy applied to the four navigation buttons

use serde::Serialize;

use super::{clamped_target, is_actionable, navigate, NavControl};
use crate::config::{DisplayMode, PaginationConfig};

/// How one navigation button is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ButtonState {
    pub visible: bool,
    pub enabled: bool,
    /// Item the button moves to when clicked
    pub target: Option<usize>,
}

impl ButtonState {
    pub const HIDDEN: ButtonState = ButtonState {
        visible: false,
        enabled: false,
        target: None,
    };

    /// Apply `mode` to a button
    fn resolve(config: &PaginationConfig, control: NavControl, mode: DisplayMode) -> Self {
        if config.total_items() == 0 {
            return Self::HIDDEN;
        }
        let actionable = is_actionable(config, control);
        let target = match control {
            NavControl::Prev | NavControl::Next => navigate(config, control),
            NavControl::First | NavControl::Last => clamped_target(config, control),
        };
        match mode {
            DisplayMode::Never => Self::HIDDEN,
            DisplayMode::WhenActionable if !actionable => Self::HIDDEN,
            DisplayMode::WhenActionable => Self {
                visible: true,
                enabled: true,
                target,
            },
            DisplayMode::Disabled => Self {
                visible: true,
                enabled: actionable,
                target: target.filter(|_| actionable),
            },
            DisplayMode::Always => Self {
                visible: true,
                enabled: true,
                target: clamped_target(config, control),
            },
        }
    }
}

/// State of every navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavButtons {
    pub first: ButtonState,
    pub prev: ButtonState,
    pub next: ButtonState,
    pub last: ButtonState,
}

impl NavButtons {
    /// Resolve all buttons; prev/next and first/last follow their own modes
    pub fn resolve(config: &PaginationConfig) -> Self {
        let pair = config.prev_next_mode();
        let edge = config.first_last_mode();
        Self {
            first: ButtonState::resolve(config, NavControl::First, edge),
            prev: ButtonState::resolve(config, NavControl::Prev, pair),
            next: ButtonState::resolve(config, NavControl::Next, pair),
            last: ButtonState::resolve(config, NavControl::Last, edge),
        }
    }

    pub fn get(&self, control: NavControl) -> ButtonState {
        match control {
            NavControl::First => self.first,
            NavControl::Prev => self.prev,
            NavControl::Next => self.next,
            NavControl::Last => self.last,
        }
    }
}
