//! Update notifications emitted after every recomputation

use serde::Serialize;

use crate::window::{ItemRange, PageWindow};

/// Payload delivered to listeners after each recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub current_page: usize,
    pub total_pages: usize,
    pub current_item: usize,
    pub current_range: Option<ItemRange>,
    pub previous_range: Option<ItemRange>,
    pub next_range: Option<ItemRange>,
}

impl From<&PageWindow> for PageUpdate {
    fn from(window: &PageWindow) -> Self {
        Self {
            current_page: window.current_page,
            total_pages: window.total_pages,
            current_item: window.current_item,
            current_range: window.current_range,
            previous_range: window.previous_range,
            next_range: window.next_range,
        }
    }
}

/// Handle returned by [`Listeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

type Listener = Box<dyn FnMut(&PageUpdate)>;

/// Listeners, invoked synchronously in registration order
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&PageUpdate) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn emit(&mut self, update: &PageUpdate) {
        tracing::trace!(listeners = self.entries.len(), "emitting page update");
        for (_, listener) in &mut self.entries {
            listener(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn update(current_page: usize) -> PageUpdate {
        PageUpdate {
            current_page,
            total_pages: 10,
            current_item: current_page * 10 - 9,
            current_range: Some(ItemRange::new(current_page * 10 - 9, current_page * 10)),
            previous_range: None,
            next_range: None,
        }
    }

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let first = Rc::clone(&log);
        listeners.subscribe(move |u| first.borrow_mut().push(("a", u.current_page)));
        let second = Rc::clone(&log);
        listeners.subscribe(move |u| second.borrow_mut().push(("b", u.current_page)));

        listeners.emit(&update(3));
        assert_eq!(*log.borrow(), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();

        let counter = Rc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.borrow_mut() += 1);
        listeners.emit(&update(1));

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());

        listeners.emit(&update(2));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let json = serde_json::to_value(update(2)).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["currentRange"]["start"], 11);
        assert!(json["nextRange"].is_null());
    }
}
