// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide-deck serialization and deserialization.
//!
//! This module handles importing and exporting slide decks in YAML and
//! JSON formats.

use crate::models::slide::SlideDeck;
use anyhow::Result;
use std::path::Path;

/// Import a slide deck, dispatching on the file extension.
pub fn import(path: &Path) -> Result<SlideDeck> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => anyhow::bail!("Unsupported deck file extension: {:?}", extension),
    }
}

/// Export a slide deck to YAML format.
pub fn export_yaml(deck: &SlideDeck, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(deck)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a slide deck to JSON format.
pub fn export_json(deck: &SlideDeck, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(deck)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a slide deck from YAML format.
pub fn import_yaml(path: &Path) -> Result<SlideDeck> {
    let yaml = std::fs::read_to_string(path)?;
    let deck = serde_yaml::from_str(&yaml)?;
    Ok(deck)
}

/// Import a slide deck from JSON format.
pub fn import_json(path: &Path) -> Result<SlideDeck> {
    let json = std::fs::read_to_string(path)?;
    let deck = serde_json::from_str(&json)?;
    Ok(deck)
}
