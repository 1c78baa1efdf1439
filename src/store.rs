// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide state store.
//!
//! This module owns the single source of truth for which slide is active.
//! All navigation - buttons, keyboard, swipes, autoplay-on-end - funnels
//! through [`SlideStore::advance`], which wraps around in both directions
//! and persists the new index to session storage on every change.

use crate::io::session::SessionStore;

/// Persistence key used when the caller does not supply one.
pub const DEFAULT_PERSIST_KEY: &str = "showreel-index";

/// Navigation direction for a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// Signed index offset for this direction.
    pub fn offset(self) -> isize {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}

/// Holds the active slide index for the component's lifetime.
pub struct SlideStore {
    session: Box<dyn SessionStore>,
    persist_key: String,
    slide_count: usize,
    active: usize,
}

impl SlideStore {
    /// Create a store for `slide_count` slides, restoring the prior index
    /// from session storage when one was saved under `persist_key`.
    ///
    /// Absent, malformed, or out-of-range values fall back to index 0, so
    /// a stale index saved against a differently sized deck can never
    /// escape `[0, slide_count)`.
    pub fn restore(
        session: Box<dyn SessionStore>,
        persist_key: impl Into<String>,
        slide_count: usize,
    ) -> Self {
        let persist_key = persist_key.into();
        let active = session
            .get(&persist_key)
            .and_then(|saved| saved.trim().parse::<usize>().ok())
            .filter(|&index| index < slide_count)
            .unwrap_or(0);

        Self {
            session,
            persist_key,
            slide_count,
            active,
        }
    }

    /// Index of the currently active slide.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// True when there are no slides; navigation is disabled entirely.
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Move to the adjacent slide, wrapping at both ends.
    ///
    /// A total function: with a non-empty deck no input can produce an
    /// out-of-range index. No-op on an empty deck.
    pub fn advance(&mut self, direction: Direction) {
        if self.slide_count == 0 {
            return;
        }

        let count = self.slide_count as isize;
        let next = (self.active as isize + direction.offset() + count) % count;
        self.set_active(next as usize);
    }

    /// Record a new active index and persist it.
    ///
    /// Crate-internal on purpose: only `restore` and `advance` compute
    /// indices, so `index` is always in range.
    fn set_active(&mut self, index: usize) {
        self.active = index;
        self.session.set(&self.persist_key, &index.to_string());
        log::debug!("Active slide: {}", index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::session::MemorySession;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Session store that shares its map with the test, so persisted
    /// values can be observed after moves into the slide store.
    #[derive(Default)]
    struct SharedSession {
        entries: Rc<RefCell<std::collections::HashMap<String, String>>>,
    }

    impl SharedSession {
        fn handle(&self) -> Rc<RefCell<std::collections::HashMap<String, String>>> {
            Rc::clone(&self.entries)
        }
    }

    impl SessionStore for SharedSession {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn store_with(count: usize) -> SlideStore {
        SlideStore::restore(Box::new(MemorySession::new()), DEFAULT_PERSIST_KEY, count)
    }

    #[test]
    fn test_advance_wraps_forward() {
        let mut store = store_with(3);
        store.advance(Direction::Forward);
        store.advance(Direction::Forward);
        assert_eq!(store.active(), 2);
        store.advance(Direction::Forward);
        assert_eq!(store.active(), 0);
    }

    #[test]
    fn test_advance_wraps_backward() {
        let mut store = store_with(3);
        store.advance(Direction::Back);
        assert_eq!(store.active(), 2);
    }

    #[test]
    fn test_index_stays_in_range_over_arbitrary_sequences() {
        for count in 1..6 {
            let mut store = store_with(count);
            // Deterministic mixed walk, long enough to wrap several times.
            for step in 0..100 {
                let dir = if step % 3 == 0 {
                    Direction::Back
                } else {
                    Direction::Forward
                };
                store.advance(dir);
                assert!(store.active() < count, "index escaped with count {}", count);
            }
        }
    }

    #[test]
    fn test_forward_then_back_is_identity() {
        for count in 1..6 {
            for start in 0..count {
                let mut store = store_with(count);
                for _ in 0..start {
                    store.advance(Direction::Forward);
                }
                let before = store.active();

                store.advance(Direction::Forward);
                store.advance(Direction::Back);
                assert_eq!(store.active(), before);

                store.advance(Direction::Back);
                store.advance(Direction::Forward);
                assert_eq!(store.active(), before);
            }
        }
    }

    #[test]
    fn test_every_transition_is_persisted() {
        let session = SharedSession::default();
        let entries = session.handle();
        let mut store = SlideStore::restore(Box::new(session), "k", 3);

        store.advance(Direction::Forward);
        assert_eq!(entries.borrow().get("k"), Some(&"1".to_string()));

        store.advance(Direction::Forward);
        assert_eq!(entries.borrow().get("k"), Some(&"2".to_string()));

        store.advance(Direction::Forward);
        assert_eq!(entries.borrow().get("k"), Some(&"0".to_string()));
    }

    #[test]
    fn test_restore_uses_saved_index_when_in_range() {
        let mut session = MemorySession::new();
        session.set("k", "2");
        let store = SlideStore::restore(Box::new(session), "k", 3);
        assert_eq!(store.active(), 2);
    }

    #[test]
    fn test_restore_resets_out_of_range_index() {
        let mut session = MemorySession::new();
        session.set("k", "9");
        let store = SlideStore::restore(Box::new(session), "k", 3);
        assert_eq!(store.active(), 0);
    }

    #[test]
    fn test_restore_ignores_malformed_values() {
        for bad in ["", "abc", "-1", "1.5"] {
            let mut session = MemorySession::new();
            session.set("k", bad);
            let store = SlideStore::restore(Box::new(session), "k", 3);
            assert_eq!(store.active(), 0, "value {:?} should reset to 0", bad);
        }
    }

    #[test]
    fn test_empty_deck_disables_navigation() {
        let session = SharedSession::default();
        let entries = session.handle();
        let mut store = SlideStore::restore(Box::new(session), "k", 0);

        store.advance(Direction::Forward);
        store.advance(Direction::Back);
        assert_eq!(store.active(), 0);
        assert!(store.is_empty());
        assert!(entries.borrow().is_empty(), "empty deck must not persist");
    }
}
