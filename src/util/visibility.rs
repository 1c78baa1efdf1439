// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport-visibility computation.
//!
//! This module computes how much of the carousel rect is inside the
//! scroll viewport and turns that into an edge-triggered visible /
//! not-visible signal at a fixed threshold.

/// Fraction of the carousel that must be on screen for it to count as
/// visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.2;

/// Fraction of `item` that lies inside `viewport`, in `[0.0, 1.0]`.
///
/// Degenerate item rects report 0.0.
pub fn visible_fraction(item: egui::Rect, viewport: egui::Rect) -> f32 {
    let area = item.width() * item.height();
    if area <= 0.0 {
        return 0.0;
    }

    let overlap = item.intersect(viewport);
    if !overlap.is_positive() {
        return 0.0;
    }

    (overlap.width() * overlap.height() / area).clamp(0.0, 1.0)
}

/// Edge-triggered visibility signal.
///
/// Fed the current visible fraction once per frame; reports `Some(bool)`
/// only when the thresholded boolean changes.
#[derive(Debug)]
pub struct VisibilityWatcher {
    threshold: f32,
    visible: bool,
}

impl Default for VisibilityWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Observe the current fraction; returns the new visibility only on a
    /// transition.
    pub fn update(&mut self, fraction: f32) -> Option<bool> {
        let now_visible = fraction >= self.threshold;
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        Some(now_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rect {
        Rect::from_min_max(pos2(min_x, min_y), pos2(max_x, max_y))
    }

    #[test]
    fn test_fully_inside_is_one() {
        let item = rect(10.0, 10.0, 110.0, 60.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        assert_eq!(visible_fraction(item, viewport), 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let item = rect(0.0, 300.0, 100.0, 400.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        assert_eq!(visible_fraction(item, viewport), 0.0);
    }

    #[test]
    fn test_half_overlap() {
        // Item sticks out of the bottom of the viewport by half its height.
        let item = rect(0.0, 150.0, 100.0, 250.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        let fraction = visible_fraction(item, viewport);
        assert!((fraction - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_degenerate_item_is_zero() {
        let item = rect(50.0, 50.0, 50.0, 50.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        assert_eq!(visible_fraction(item, viewport), 0.0);
    }

    #[test]
    fn test_watcher_fires_only_on_transitions() {
        let mut watcher = VisibilityWatcher::new();
        assert!(watcher.is_visible());

        // Still visible: no edge.
        assert_eq!(watcher.update(1.0), None);
        assert_eq!(watcher.update(0.5), None);

        // Drops below 20%: one edge.
        assert_eq!(watcher.update(0.1), Some(false));
        assert_eq!(watcher.update(0.0), None);

        // Comes back: one edge.
        assert_eq!(watcher.update(0.2), Some(true));
        assert_eq!(watcher.update(0.9), None);
    }
}
