//! Navigation over the current item: first, previous, next, last

mod controls;

pub use controls::{ButtonState, NavButtons};

use serde::Serialize;

use crate::config::PaginationConfig;

/// A navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavControl {
    First,
    Prev,
    Next,
    Last,
}

impl NavControl {
    pub const ALL: [NavControl; 4] = [
        NavControl::First,
        NavControl::Prev,
        NavControl::Next,
        NavControl::Last,
    ];
}

/// New current item after `control`, or `None` when the action is a no-op.
///
/// Previous and next step by one page of items and stop short of the ends;
/// first and last always jump. Nothing moves in an empty collection.
pub fn navigate(config: &PaginationConfig, control: NavControl) -> Option<usize> {
    let total = config.total_items();
    if total == 0 {
        return None;
    }
    let current = config.current_item();
    let step = config.items_per_page();
    match control {
        NavControl::First => Some(1),
        NavControl::Last => Some(total),
        NavControl::Prev => (current > step).then(|| (current - step).max(1)),
        NavControl::Next => current.checked_add(step).filter(|target| *target <= total),
    }
}

/// Whether `control` would move to a different page
pub(crate) fn is_actionable(config: &PaginationConfig, control: NavControl) -> bool {
    let current_page = config.current_page();
    match control {
        NavControl::First => current_page > 1,
        NavControl::Last => current_page < config.total_pages(),
        NavControl::Prev | NavControl::Next => navigate(config, control).is_some(),
    }
}

/// Target of `control` with the step clamped into `[1, total_items]` instead of
/// being refused
pub(crate) fn clamped_target(config: &PaginationConfig, control: NavControl) -> Option<usize> {
    let total = config.total_items();
    if total == 0 {
        return None;
    }
    let current = config.current_item();
    let step = config.items_per_page();
    Some(match control {
        NavControl::First => 1,
        NavControl::Last => total,
        NavControl::Prev => current.saturating_sub(step).max(1),
        NavControl::Next => current.saturating_add(step).min(total),
    })
}
