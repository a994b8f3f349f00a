// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music value types.
//!
//! This module provides the `Song` entity stored by playlists and the
//! `Genre` tag used for filtering.

pub mod genre;
pub mod song;

pub use genre::Genre;
pub use song::Song;
