// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media, decks, and session state.

pub mod deck;
pub mod media;
pub mod session;
