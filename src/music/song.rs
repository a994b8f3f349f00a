// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song value type.
//!
//! A song is identified by its name and artist. Genre and duration are
//! descriptive only and never take part in equality or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Genre;

/// A single song
#[derive(Debug, Clone)]
pub struct Song {
    /// Song title
    name: String,
    /// Performing artist
    artist: String,
    /// Genre, fixed at construction
    genre: Genre,
    /// Length in seconds
    duration: u32,
}

impl Song {
    /// Create a new song
    pub fn new(name: impl Into<String>, artist: impl Into<String>, genre: Genre, duration: u32) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre,
            duration,
        }
    }

    /// Get song name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Get genre
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Get duration in seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Set duration in seconds
    pub fn set_duration(&mut self, seconds: u32) {
        self.duration = seconds;
    }

    /// Format duration as m:ss
    pub fn format_duration(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }

    /// Check whether this song has the given identity
    pub fn is(&self, name: &str, artist: &str) -> bool {
        self.name == name && self.artist == artist
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.artist == other.artist
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name,
            self.artist,
            self.genre,
            self.format_duration()
        )
    }
}
