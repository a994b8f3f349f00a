// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory song collections and a capacity-bounded stack.
//!
//! - `music`: the `Song` value type and its `Genre`
//! - `stack`: a fixed-capacity LIFO container
//! - `playlist`: a duplicate-free song collection with filtered, ordered views
//! - `config`: YAML/TOML settings for building stacks and playlists
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod music;
pub mod playlist;
pub mod stack;

pub use config::Settings;
pub use music::{Genre, Song};
pub use playlist::{FilteredSongs, OrderedSongs, Playlist, PlaylistError, ScanningOrder, SongFilter};
pub use stack::{BoundedStack, Stack, StackError};
