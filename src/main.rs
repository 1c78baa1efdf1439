// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Showreel - a student-showcase media carousel.
//!
//! A cross-platform desktop application that presents a deck of showcase
//! clips in a swipeable carousel with session-persisted navigation and
//! visibility-aware playback.

mod app;
mod input;
mod io;
mod models;
mod playback;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::ShowreelApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Showreel - Student Highlights"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Showreel",
        options,
        Box::new(|_cc| Ok(Box::new(ShowreelApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
