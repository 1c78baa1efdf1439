// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel viewport rendering.
//!
//! This module renders the slide strip, navigation arrows, transport
//! control and caption panel. It is a pure function of the deck and the
//! active index: it never mutates carousel state itself, it only reports
//! the user's intent back as a [`CarouselAction`].

use crate::input::SwipeTracker;
use crate::io::media::SlideMedia;
use crate::models::slide::{Slide, SlideDeck};
use crate::playback::MediaHandle;
use crate::store::Direction;

/// Duration of the strip slide animation on an active-index change.
pub const SLIDE_ANIM_SECS: f32 = 0.35;

/// Height of the media viewport.
const VIEWPORT_HEIGHT: f32 = 360.0;

/// Fraction of the slide area the poster occupies.
const MEDIA_FILL: f32 = 0.75;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x43, 0xb1, 0xcb);

/// Result of carousel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    /// A nav button, arrow key or swipe asked for an adjacent slide.
    Navigate(Direction),
    /// The transport control on the active slide was pressed.
    TogglePlayback,
}

/// Display the carousel and handle its interactions.
///
/// Returns the action to route into the slide store plus the viewport
/// rect, which the caller feeds to the visibility watcher.
pub fn show(
    ui: &mut egui::Ui,
    deck: &SlideDeck,
    active: usize,
    media: &[SlideMedia],
    posters: &[Option<egui::TextureHandle>],
    swipe: &mut SwipeTracker,
) -> (CarouselAction, egui::Rect) {
    let mut action = CarouselAction::None;

    // An empty deck contributes nothing to the page.
    if deck.is_empty() {
        return (action, egui::Rect::NOTHING);
    }

    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, VIEWPORT_HEIGHT), egui::Sense::hover());

    // Route touch input through the swipe tracker. Tracking is passive:
    // the events are observed, never consumed, so scrolling still works.
    let touches: Vec<(egui::TouchPhase, egui::Pos2)> = ui.ctx().input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { phase, pos, .. } => Some((*phase, *pos)),
                _ => None,
            })
            .collect()
    });

    for (phase, pos) in touches {
        match phase {
            egui::TouchPhase::Start => {
                // Only gestures that begin inside the carousel count.
                if rect.contains(pos) {
                    swipe.touch_start(pos.x);
                }
            }
            egui::TouchPhase::Move => {
                if let Some(direction) = swipe.touch_move(pos.x) {
                    action = CarouselAction::Navigate(direction);
                }
            }
            egui::TouchPhase::End | egui::TouchPhase::Cancel => swipe.touch_end(),
        }
    }

    // The strip is offset by one viewport width per slide; the offset is
    // animated so index changes glide instead of jumping.
    let target_offset = -(active as f32) * rect.width();
    let offset =
        ui.ctx()
            .animate_value_with_time(ui.id().with("strip_offset"), target_offset, SLIDE_ANIM_SECS);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 12.0, egui::Color32::from_gray(24));

    for (index, slide) in deck.slides.iter().enumerate() {
        let slide_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(offset + index as f32 * rect.width(), 0.0),
            rect.size(),
        );
        if !slide_rect.intersects(rect) {
            continue;
        }

        let poster = posters.get(index).and_then(|texture| texture.as_ref());
        draw_slide(&painter, slide_rect, slide, poster);
    }

    // Progress line along the bottom of the viewport for the active slide.
    if let Some(progress) = media.get(active).and_then(|m| m.progress()) {
        let track = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - 4.0),
            rect.max,
        );
        painter.rect_filled(track, 0.0, egui::Color32::from_gray(60));
        let filled = egui::Rect::from_min_max(
            track.min,
            egui::pos2(track.left() + track.width() * progress, track.bottom()),
        );
        painter.rect_filled(filled, 0.0, ACCENT);
    }

    // Transport control, standing in for the platform's native controls.
    let is_paused = media.get(active).map(|m| m.is_paused()).unwrap_or(true);
    let toggle_rect = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 32.0, rect.bottom() - 32.0),
        egui::vec2(36.0, 36.0),
    );
    let toggle_label = if is_paused { "▶" } else { "⏸" };
    if ui.put(toggle_rect, egui::Button::new(toggle_label)).clicked() {
        action = CarouselAction::TogglePlayback;
    }

    // Navigation arrows, unconditional advance on click.
    let prev_rect = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 28.0, rect.center().y),
        egui::vec2(36.0, 36.0),
    );
    if ui.put(prev_rect, egui::Button::new("‹")).clicked() {
        action = CarouselAction::Navigate(Direction::Back);
    }

    let next_rect = egui::Rect::from_center_size(
        egui::pos2(rect.right() - 28.0, rect.center().y),
        egui::vec2(36.0, 36.0),
    );
    if ui.put(next_rect, egui::Button::new("›")).clicked() {
        action = CarouselAction::Navigate(Direction::Forward);
    }

    // Caption panel below the viewport, only when there is content.
    if let Some(slide) = deck.slides.get(active) {
        if slide.has_caption_content() {
            ui.add_space(10.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width() * MEDIA_FILL);
                if let Some(title) = &slide.title {
                    ui.label(egui::RichText::new(title).strong().size(16.0));
                }
                if let Some(caption) = &slide.caption {
                    ui.label(
                        egui::RichText::new(caption)
                            .size(13.0)
                            .color(egui::Color32::from_gray(190)),
                    );
                }
            });
        }
    }

    (action, rect)
}

/// Draw one slide: poster frame aspect-fit at 75% of the area, or a
/// placeholder with the slide title while no poster is available.
fn draw_slide(
    painter: &egui::Painter,
    slide_rect: egui::Rect,
    slide: &Slide,
    poster: Option<&egui::TextureHandle>,
) {
    painter.rect_filled(slide_rect.shrink(1.0), 12.0, egui::Color32::from_gray(18));

    if let Some(texture) = poster {
        let size = texture.size_vec2();
        let max = slide_rect.size() * MEDIA_FILL;

        // Aspect-fit the poster inside the media area.
        let poster_aspect = size.x / size.y;
        let area_aspect = max.x / max.y;
        let (display_width, display_height) = if poster_aspect > area_aspect {
            (max.x, max.x / poster_aspect)
        } else {
            (max.y * poster_aspect, max.y)
        };

        let poster_rect = egui::Rect::from_center_size(
            slide_rect.center(),
            egui::vec2(display_width, display_height),
        );
        painter.image(
            texture.id(),
            poster_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    } else {
        let label = slide.title.as_deref().unwrap_or(slide.source.as_str());
        painter.text(
            slide_rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(18.0),
            egui::Color32::from_gray(150),
        );
    }
}
