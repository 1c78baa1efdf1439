// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module hosts the carousel inside a scrollable page and routes
//! every input source - keyboard, touch, nav buttons, media events,
//! viewport visibility - into the slide store, which is the single point
//! of mutation for the active index.

use crate::input::{self, SwipeTracker};
use crate::io::deck;
use crate::io::media::{LoadedPoster, SlideMedia};
use crate::io::session::FileSession;
use crate::models::slide::SlideDeck;
use crate::playback::MediaHandle;
use crate::playback::{MediaEvent, PlaybackCoordinator};
use crate::store::{Direction, SlideStore};
use crate::ui::carousel::{self, CarouselAction};
use crate::util::visibility::{visible_fraction, VisibilityWatcher};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Session-storage key for this carousel instance. Multiple instances
/// would each pick their own key.
const PERSIST_KEY: &str = "student-highlights";

/// Main application state.
pub struct ShowreelApp {
    /// The slide deck, fixed until a new deck file is loaded
    deck: SlideDeck,

    /// Single source of truth for the active slide index
    store: SlideStore,

    /// Per-slide playback state machine
    coordinator: PlaybackCoordinator,

    /// One media handle per slide, index-aligned with the deck
    media: Vec<SlideMedia>,

    /// Poster textures, filled in as background decoding completes
    posters: Vec<Option<egui::TextureHandle>>,

    /// Receiver for background poster loading
    poster_loader: Option<Receiver<Result<LoadedPoster, String>>>,

    /// In-flight swipe gesture
    swipe: SwipeTracker,

    /// Edge-triggered viewport visibility signal
    visibility: VisibilityWatcher,
}

impl Default for ShowreelApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowreelApp {
    /// Create the application with the built-in showcase deck.
    pub fn new() -> Self {
        Self::with_deck(SlideDeck::default_deck())
    }

    /// Create the application around a specific deck. Loading a new deck
    /// goes through here too: the carousel is fully re-initialized when
    /// the slide list changes.
    pub fn with_deck(deck: SlideDeck) -> Self {
        let session = FileSession::open(session_path());
        let store = SlideStore::restore(Box::new(session), PERSIST_KEY, deck.len());
        let media: Vec<SlideMedia> = deck
            .slides
            .iter()
            .map(|slide| SlideMedia::new(slide.duration_secs))
            .collect();
        let posters = (0..deck.len()).map(|_| None).collect();

        let mut app = Self {
            coordinator: PlaybackCoordinator::new(deck.len()),
            deck,
            store,
            media,
            posters,
            poster_loader: None,
            swipe: SwipeTracker::new(),
            visibility: VisibilityWatcher::new(),
        };

        if !app.store.is_empty() {
            let active = app.store.active();
            app.coordinator.activate(active, &mut app.media);
        }
        app.spawn_poster_loader();
        app
    }

    /// Decode poster images on a background thread, one result per slide
    /// that declares a poster.
    fn spawn_poster_loader(&mut self) {
        let jobs: Vec<(usize, PathBuf)> = self
            .deck
            .slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                slide.poster.as_ref().map(|p| (index, PathBuf::from(p)))
            })
            .collect();

        if jobs.is_empty() {
            self.poster_loader = None;
            return;
        }

        let (sender, receiver) = channel();
        self.poster_loader = Some(receiver);

        std::thread::spawn(move || {
            for (index, path) in jobs {
                let result = crate::io::media::load_poster(&path, index)
                    .map_err(|e| format!("Failed to load poster {}: {}", path.display(), e));
                let _ = sender.send(result);
            }
        });
    }

    /// Apply one slide transition and re-sync playback state.
    fn apply_advance(&mut self, direction: Direction) {
        if self.store.is_empty() {
            return;
        }

        self.store.advance(direction);
        let active = self.store.active();
        self.coordinator.activate(active, &mut self.media);
        log::info!("Showing slide {} of {}", active + 1, self.store.slide_count());
    }

    /// Load a deck file and rebuild the carousel around it.
    fn load_deck_file(&mut self, path: PathBuf) {
        match deck::import(&path) {
            Ok(new_deck) => {
                log::info!(
                    "Loaded deck with {} slides from {}",
                    new_deck.len(),
                    path.display()
                );
                *self = Self::with_deck(new_deck);
            }
            Err(e) => log::error!("Failed to load deck: {}", e),
        }
    }

    /// Export the current deck to a file.
    fn export_deck(&self, path: PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => deck::export_yaml(&self.deck, &path),
            Some("json") => deck::export_json(&self.deck, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Exported deck to {}", path.display()),
            Err(e) => log::error!("Failed to export deck: {}", e),
        }
    }

    /// Upload finished poster decodes as egui textures.
    fn poll_poster_loader(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.poster_loader else {
            return;
        };

        let mut disconnected = false;
        loop {
            match receiver.try_recv() {
                Ok(Ok(poster)) => {
                    let size = [poster.width as usize, poster.height as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, &poster.pixels);
                    let texture = ctx.load_texture(
                        format!("poster-{}", poster.slide_index),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    if let Some(slot) = self.posters.get_mut(poster.slide_index) {
                        *slot = Some(texture);
                    }
                    log::info!("Loaded poster for slide {}", poster.slide_index);
                }
                Ok(Err(e)) => log::error!("{}", e),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            self.poster_loader = None;
        }
    }
}

/// Session state lives next to the temp files for this user; the index
/// is a convenience, so a throwaway location is fine.
fn session_path() -> PathBuf {
    std::env::temp_dir().join("showreel-session.json")
}

impl eframe::App for ShowreelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_poster_loader(ctx);

        // Advance the media clocks by one frame.
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        for media in &mut self.media {
            media.tick(dt);
        }

        // Drain media notifications, then route any transition requests
        // they produced. Each callback applies at most one transition.
        let active = self.store.active();
        let events: Vec<(usize, MediaEvent)> = self
            .media
            .iter_mut()
            .enumerate()
            .flat_map(|(index, media)| {
                media
                    .poll_events()
                    .into_iter()
                    .map(move |event| (index, event))
            })
            .collect();

        let mut requests: Vec<Direction> = Vec::new();
        for (index, event) in events {
            if let Some(direction) =
                self.coordinator
                    .handle_event(index, event, active, &mut self.media)
            {
                requests.push(direction);
            }
        }
        for direction in requests {
            self.apply_advance(direction);
        }

        // Keyboard navigation is application-wide, not focus-scoped.
        if !self.store.is_empty() {
            for key in [egui::Key::ArrowLeft, egui::Key::ArrowRight] {
                if ctx.input(|i| i.key_pressed(key)) {
                    if let Some(direction) = input::direction_for_key(key) {
                        self.apply_advance(direction);
                    }
                }
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Slide decks", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_deck_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Deck", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("deck.yaml")
                                .save_file()
                            {
                                self.export_deck(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("deck.json")
                                .save_file()
                            {
                                self.export_deck(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });

        // The page: heading and blurb above the carousel, more content
        // below, so the carousel can actually scroll out of the viewport.
        let mut carousel_result: Option<(CarouselAction, egui::Rect, egui::Rect)> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                let title = self.deck.title.as_deref().unwrap_or("Showreel");
                ui.heading(title);
                ui.label(
                    egui::RichText::new(
                        "Performances and testimonials from current and former students. \
                         Use the arrows, the arrow keys, or swipe to browse.",
                    )
                    .color(egui::Color32::from_gray(180)),
                );
                ui.add_space(20.0);

                if self.store.is_empty() {
                    ui.label(
                        egui::RichText::new("No slides loaded. File → Open Deck...")
                            .italics()
                            .color(egui::Color32::from_gray(140)),
                    );
                } else {
                    let (action, rect) = carousel::show(
                        ui,
                        &self.deck,
                        self.store.active(),
                        &self.media,
                        &self.posters,
                        &mut self.swipe,
                    );
                    carousel_result = Some((action, rect, ui.clip_rect()));
                }

                ui.add_space(40.0);
                ui.separator();
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "Each clip keeps its place while you browse; playback pauses \
                         automatically when the reel scrolls off screen and picks up \
                         where you left it.",
                    )
                    .color(egui::Color32::from_gray(160)),
                );
                // Tail space so the carousel can leave the viewport entirely.
                ui.add_space(500.0);
            });
        });

        if let Some((action, rect, viewport)) = carousel_result {
            match action {
                CarouselAction::Navigate(direction) => self.apply_advance(direction),
                CarouselAction::TogglePlayback => {
                    let active = self.store.active();
                    self.coordinator.toggle(active, &mut self.media);
                }
                CarouselAction::None => {}
            }

            // Intersection signal at the 20% threshold, edge-triggered.
            let fraction = visible_fraction(rect, viewport);
            if let Some(visible) = self.visibility.update(fraction) {
                let active = self.store.active();
                self.coordinator
                    .visibility_changed(visible, active, &mut self.media);
            }
        }

        // Keep painting while anything is rolling so positions update.
        if self.media.iter().any(|media| !media.is_paused()) {
            ctx.request_repaint();
        }
    }
}
