//! Page strip: navigation buttons, page buttons and explicit gap markers

use std::fmt;

use serde::Serialize;

use crate::config::PaginationConfig;
use crate::navigation::{NavButtons, NavControl};
use crate::window::{PageKind, PageWindow};

/// A single element of the rendered control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StripItem {
    /// First/prev/next/last button
    Nav {
        control: NavControl,
        enabled: bool,
        target: Option<usize>,
    },
    /// Page button; `target` is the first item of the page
    Page {
        page: usize,
        kind: PageKind,
        current: bool,
        target: usize,
    },
    /// Hidden pages strictly between `after` and `before`
    Gap { after: usize, before: usize },
}

impl StripItem {
    fn label(&self) -> String {
        match self {
            StripItem::Nav { control, .. } => match control {
                NavControl::First => "«",
                NavControl::Prev => "‹",
                NavControl::Next => "›",
                NavControl::Last => "»",
            }
            .to_string(),
            StripItem::Page { page, current: true, .. } => format!("[{}]", page),
            StripItem::Page { page, .. } => page.to_string(),
            StripItem::Gap { .. } => "…".to_string(),
        }
    }
}

/// Render-ready sequence: first, prev, pages with gaps, next, last.
/// Hidden navigation buttons are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageStrip {
    pub items: Vec<StripItem>,
}

impl PageStrip {
    /// Build the strip from a computed window and resolved buttons
    pub fn build(config: &PaginationConfig, window: &PageWindow, buttons: &NavButtons) -> Self {
        let mut items = Vec::with_capacity(window.pages.len() * 2 + 4);

        let push_nav = |items: &mut Vec<StripItem>, control: NavControl| {
            let state = buttons.get(control);
            if state.visible {
                items.push(StripItem::Nav {
                    control,
                    enabled: state.enabled,
                    target: state.target,
                });
            }
        };

        push_nav(&mut items, NavControl::First);
        push_nav(&mut items, NavControl::Prev);

        let mut previous: Option<usize> = None;
        for desc in &window.pages {
            if let Some(after) = previous.filter(|p| desc.page - p > 1) {
                items.push(StripItem::Gap {
                    after,
                    before: desc.page,
                });
            }
            let target = config
                .range_from_page(desc.page)
                .map_or(1, |range| range.start);
            items.push(StripItem::Page {
                page: desc.page,
                kind: desc.kind,
                current: desc.page == window.current_page,
                target,
            });
            previous = Some(desc.page);
        }

        push_nav(&mut items, NavControl::Next);
        push_nav(&mut items, NavControl::Last);

        Self { items }
    }

    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().filter_map(|item| match item {
            StripItem::Page { page, .. } => Some(*page),
            _ => None,
        })
    }

    pub fn gap_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, StripItem::Gap { .. }))
            .count()
    }
}

impl fmt::Display for PageStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&item.label())?;
        }
        Ok(())
    }
}
