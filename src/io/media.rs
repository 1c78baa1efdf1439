// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media handles and poster-frame loading.
//!
//! Actual decoding and rendering of the slide media is delegated to the
//! platform; [`SlideMedia`] models the observable surface of that
//! primitive: position against a declared duration, paused state, and
//! "metadata loaded" / "ended" notifications. Poster images are decoded
//! off-thread with the image crate.

use crate::playback::{MediaError, MediaEvent, MediaHandle};
use anyhow::Result;
use std::path::Path;

/// Decoded poster frame, ready to be uploaded as an egui texture.
pub struct LoadedPoster {
    pub slide_index: usize,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and decode a poster image into RGBA pixels.
pub fn load_poster(path: &Path, slide_index: usize) -> Result<LoadedPoster> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedPoster {
        slide_index,
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// The application's concrete media handle for one slide.
///
/// Until metadata (the duration) arrives, every control call is rejected
/// with [`MediaError::NotLoaded`]. Once loaded, the position advances
/// with frame delta time while playing and an [`MediaEvent::Ended`]
/// notification fires when it reaches the duration.
pub struct SlideMedia {
    duration: Option<f64>,
    position: f64,
    playing: bool,
    pending: Vec<MediaEvent>,
}

impl SlideMedia {
    /// Create a handle. A known duration counts as metadata and is
    /// announced on the first event poll, like a media element that has
    /// its metadata cached.
    pub fn new(duration_secs: Option<f64>) -> Self {
        let duration = duration_secs.filter(|d| *d > 0.0);
        let pending = if duration.is_some() {
            vec![MediaEvent::MetadataLoaded]
        } else {
            Vec::new()
        };

        Self {
            duration,
            position: 0.0,
            playing: false,
            pending,
        }
    }

    /// Advance the playback clock by one frame's delta time.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(duration) = self.duration else {
            return;
        };

        self.position += dt as f64;
        if self.position >= duration {
            self.position = duration;
            self.playing = false;
            self.pending.push(MediaEvent::Ended);
        }
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Playback progress in `[0.0, 1.0]`, or `None` before metadata.
    pub fn progress(&self) -> Option<f32> {
        let duration = self.duration?;
        Some((self.position / duration).clamp(0.0, 1.0) as f32)
    }
}

impl MediaHandle for SlideMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        if self.duration.is_none() {
            return Err(MediaError::NotLoaded);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        if self.duration.is_none() {
            return Err(MediaError::NotLoaded);
        }
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> Result<(), MediaError> {
        let Some(duration) = self.duration else {
            return Err(MediaError::NotLoaded);
        };
        self.position = seconds.clamp(0.0, duration);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }
}
