// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback coordination across slides.
//!
//! This module enforces the one rule of the carousel: at most one slide's
//! media may be playing, and only while the carousel is on screen. Media
//! control calls are best-effort UI affordances; any one the platform
//! rejects is ignored without blocking the transition that triggered it.

use crate::store::Direction;

/// Seek offset applied to a newly active slide once its metadata is
/// known, so the platform renders a representative first frame instead of
/// a blank one. Tunable; the exact value carries no meaning.
pub const POSTER_SEEK_OFFSET: f64 = 0.001;

/// Playback state of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Off screen: paused and rewound to the start.
    Dormant,
    /// The active slide, paused; waiting for the user to press play.
    /// Position is preserved, not rewound.
    Armed,
    /// The active slide, rolling after a user-initiated play.
    Playing,
}

/// Notification from a media handle, polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and poster data are available; seeking is now possible.
    MetadataLoaded,
    /// Playback reached the end of the media.
    Ended,
}

/// Failure from a media control call. Callers catch and ignore these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The resource's metadata has not arrived yet.
    NotLoaded,
}

impl std::fmt::Display for MediaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaError::NotLoaded => write!(f, "media not loaded yet"),
        }
    }
}

impl std::error::Error for MediaError {}

/// The platform media primitive for one slide, as seen by the
/// coordinator. The render layer owns the concrete handles; the
/// coordinator only looks them up by slide index.
pub trait MediaHandle {
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self) -> Result<(), MediaError>;
    /// Seek to an absolute position in seconds.
    fn seek(&mut self, seconds: f64) -> Result<(), MediaError>;
    fn position(&self) -> f64;
    fn is_paused(&self) -> bool;
    /// Drain pending notifications.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Per-slide playback state machine.
pub struct PlaybackCoordinator {
    states: Vec<PlaybackState>,
}

impl PlaybackCoordinator {
    pub fn new(slide_count: usize) -> Self {
        Self {
            states: vec![PlaybackState::Dormant; slide_count],
        }
    }

    pub fn state(&self, index: usize) -> PlaybackState {
        self.states.get(index).copied().unwrap_or(PlaybackState::Dormant)
    }

    /// True when the active slide's media is rolling.
    pub fn is_playing(&self, index: usize) -> bool {
        self.state(index) == PlaybackState::Playing
    }

    /// Apply an active-index change: every other slide is forced Dormant
    /// (paused, rewound to the start), which guarantees at most one slide
    /// can ever be playing. The active slide arms if it was dormant.
    pub fn activate<H: MediaHandle>(&mut self, active: usize, handles: &mut [H]) {
        for (index, handle) in handles.iter_mut().enumerate() {
            if index == active {
                continue;
            }
            // Best-effort: a not-yet-loaded handle rejects these.
            if let Err(e) = handle.pause() {
                log::debug!("Pause rejected for slide {}: {}", index, e);
            }
            if let Err(e) = handle.seek(0.0) {
                log::debug!("Rewind rejected for slide {}: {}", index, e);
            }
            self.states[index] = PlaybackState::Dormant;
        }

        if let Some(state) = self.states.get_mut(active) {
            if *state == PlaybackState::Dormant {
                *state = PlaybackState::Armed;
            }
        }
    }

    /// React to a media notification from slide `index`.
    ///
    /// Returns a transition request for the slide store: the only
    /// automatic navigation the carousel ever performs is advancing by
    /// one when the active slide finishes naturally.
    pub fn handle_event<H: MediaHandle>(
        &mut self,
        index: usize,
        event: MediaEvent,
        active: usize,
        handles: &mut [H],
    ) -> Option<Direction> {
        if index != active {
            return None;
        }

        match event {
            MediaEvent::MetadataLoaded => {
                // Poster-frame affordance: nudge off zero while staying
                // paused. Not a state transition.
                if let Some(handle) = handles.get_mut(index) {
                    if let Err(e) = handle.seek(POSTER_SEEK_OFFSET) {
                        log::debug!("Poster seek rejected for slide {}: {}", index, e);
                    }
                }
                None
            }
            MediaEvent::Ended => {
                if let Some(state) = self.states.get_mut(index) {
                    *state = PlaybackState::Armed;
                }
                log::info!("Slide {} finished, advancing", index);
                Some(Direction::Forward)
            }
        }
    }

    /// User pressed the transport control on the active slide.
    pub fn toggle<H: MediaHandle>(&mut self, active: usize, handles: &mut [H]) {
        let Some(handle) = handles.get_mut(active) else {
            return;
        };

        match self.states[active] {
            PlaybackState::Playing => {
                if let Err(e) = handle.pause() {
                    log::debug!("Pause rejected for slide {}: {}", active, e);
                }
                self.states[active] = PlaybackState::Armed;
            }
            PlaybackState::Armed | PlaybackState::Dormant => {
                // Play only succeeds once metadata is in; until then the
                // slide just stays armed.
                match handle.play() {
                    Ok(()) => self.states[active] = PlaybackState::Playing,
                    Err(e) => log::debug!("Play rejected for slide {}: {}", active, e),
                }
            }
        }
    }

    /// React to the carousel entering or leaving the viewport.
    ///
    /// Leaving pauses a playing slide but preserves its position, so the
    /// user can resume where they left off. Returning does nothing;
    /// resuming is always user-initiated.
    pub fn visibility_changed<H: MediaHandle>(
        &mut self,
        visible: bool,
        active: usize,
        handles: &mut [H],
    ) {
        if visible {
            return;
        }

        if self.state(active) == PlaybackState::Playing {
            if let Some(handle) = handles.get_mut(active) {
                if let Err(e) = handle.pause() {
                    log::debug!("Pause rejected for slide {}: {}", active, e);
                }
            }
            self.states[active] = PlaybackState::Armed;
            log::info!("Carousel left the viewport, paused slide {}", active);
        }
    }
}
