// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide and slide-deck data structures.
//!
//! This module defines the descriptors for carousel entries: a media
//! source plus optional title, caption, poster image and duration.

use serde::{Deserialize, Serialize};

/// One carousel entry.
///
/// The `source` names the media resource; playback of it is delegated
/// entirely to the platform media primitive. `duration_secs` mirrors the
/// metadata the primitive would report; slides without it never finish
/// loading and stay non-playable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// Optional poster image shown in the slide viewport.
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

impl Slide {
    /// Create a slide with just a media source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: None,
            caption: None,
            poster: None,
            duration_secs: None,
        }
    }

    /// True when the slide has neither a title nor a caption to display.
    pub fn has_caption_content(&self) -> bool {
        self.title.is_some() || self.caption.is_some()
    }
}

/// An ordered, fixed-after-load collection of slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDeck {
    #[serde(default)]
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    /// Create an empty deck with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            slides: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The built-in student-showcase deck used when no deck file is loaded.
    pub fn default_deck() -> Self {
        Self {
            title: Some("Student Highlights".to_string()),
            slides: vec![
                Slide {
                    source: "otr.mov".to_string(),
                    title: Some("Original Song Showcase".to_string()),
                    caption: Some(
                        "An original song performance - songwriting is part of \
                         the curriculum for students who want it."
                            .to_string(),
                    ),
                    poster: Some("otr.jpg".to_string()),
                    duration_secs: Some(148.0),
                },
                Slide {
                    source: "abby1.mp4".to_string(),
                    title: Some("Student Showcase".to_string()),
                    caption: Some(
                        "A student performing a Christmas tune, strumming and \
                         plucking melody over the harmony at once."
                            .to_string(),
                    ),
                    poster: Some("abby1.jpg".to_string()),
                    duration_secs: Some(95.0),
                },
                Slide {
                    source: "andrews.mp4".to_string(),
                    title: Some("Parent / Student Testimonial".to_string()),
                    caption: Some(
                        "An exit interview with one of my longtime families, \
                         on what years of lessons felt like."
                            .to_string(),
                    ),
                    poster: Some("andrews.jpg".to_string()),
                    duration_secs: Some(212.0),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_content_detection() {
        let mut slide = Slide::new("clip.mp4");
        assert!(!slide.has_caption_content());

        slide.title = Some("Recital".to_string());
        assert!(slide.has_caption_content());

        slide.title = None;
        slide.caption = Some("Spring 2025".to_string());
        assert!(slide.has_caption_content());
    }

    #[test]
    fn test_default_deck_is_usable() {
        let deck = SlideDeck::default_deck();
        assert_eq!(deck.len(), 3);
        assert!(deck.slides.iter().all(|s| !s.source.is_empty()));
        assert!(deck.slides.iter().all(|s| s.duration_secs.is_some()));
    }
}
