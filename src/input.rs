// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Input routing for carousel navigation.
//!
//! This module translates keyboard arrow presses and horizontal touch
//! swipes into slide transitions. Swipes must travel a minimum distance
//! before they count, so accidental taps never navigate, and a single
//! gesture can fire at most one transition.

use crate::store::Direction;

/// Minimum horizontal travel, in logical pixels, before a touch gesture
/// counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Map an arrow key to a navigation direction. All other keys are ignored.
pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowLeft => Some(Direction::Back),
        egui::Key::ArrowRight => Some(Direction::Forward),
        _ => None,
    }
}

/// Tracks one in-flight horizontal swipe gesture.
///
/// The tracker is passive: it observes touch positions without consuming
/// them, so native scrolling is unaffected.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    /// X coordinate of the first touch point, cleared once the gesture
    /// has fired or ended.
    origin_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a touch inside the carousel.
    pub fn touch_start(&mut self, x: f32) {
        self.origin_x = Some(x);
    }

    /// Feed a touch-move position. Returns a direction exactly once per
    /// gesture, when the displacement from the start point first exceeds
    /// [`SWIPE_THRESHOLD`]. Swiping left (negative displacement) moves to
    /// the next slide.
    pub fn touch_move(&mut self, x: f32) -> Option<Direction> {
        let origin = self.origin_x?;
        let dx = x - origin;
        if dx.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        // Clear the origin so the rest of this gesture is inert.
        self.origin_x = None;
        if dx < 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Back)
        }
    }

    /// End or cancel the current gesture without firing.
    pub fn touch_end(&mut self) {
        self.origin_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key(egui::Key::ArrowLeft), Some(Direction::Back));
        assert_eq!(
            direction_for_key(egui::Key::ArrowRight),
            Some(Direction::Forward)
        );
        assert_eq!(direction_for_key(egui::Key::Space), None);
        assert_eq!(direction_for_key(egui::Key::ArrowUp), None);
    }

    #[test]
    fn test_short_move_does_not_navigate() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_move(90.0), None);
    }

    #[test]
    fn test_threshold_crossing_fires_once() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);

        // 10 px: below threshold, no transition.
        assert_eq!(swipe.touch_move(90.0), None);
        // 45 px total from the original start point: exactly one advance.
        assert_eq!(swipe.touch_move(55.0), Some(Direction::Forward));
        // Continuing the same gesture stays inert.
        assert_eq!(swipe.touch_move(0.0), None);
        assert_eq!(swipe.touch_move(300.0), None);
    }

    #[test]
    fn test_rightward_swipe_goes_back() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_move(145.0), Some(Direction::Back));
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.touch_move(500.0), None);
    }

    #[test]
    fn test_touch_end_clears_gesture() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        swipe.touch_end();
        assert_eq!(swipe.touch_move(0.0), None);
    }

    #[test]
    fn test_new_gesture_after_fire_can_navigate_again() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_move(55.0), Some(Direction::Forward));

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_move(155.0), Some(Direction::Back));
    }

    #[test]
    fn test_exact_threshold_does_not_fire() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(100.0);
        // Displacement must exceed the threshold, not merely reach it.
        assert_eq!(swipe.touch_move(60.0), None);
        assert_eq!(swipe.touch_move(59.0), Some(Direction::Forward));
    }
}
