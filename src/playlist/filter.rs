// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Filter criteria for a playlist's derived view.
//!
//! Each criterion is optional and independent; a song passes when it
//! satisfies every criterion that is set.

use serde::{Deserialize, Serialize};

use crate::music::{Genre, Song};

/// Active filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongFilter {
    /// Exact artist match
    #[serde(default)]
    pub artist: Option<String>,
    /// Exact genre match
    #[serde(default)]
    pub genre: Option<Genre>,
    /// Inclusive upper bound on duration in seconds
    #[serde(default)]
    pub max_duration: Option<u32>,
}

impl SongFilter {
    /// Create a filter with no criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: require artist
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Builder: require genre
    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    /// Builder: require duration at most `seconds`
    pub fn with_max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    /// Check whether any criterion is set
    pub fn is_active(&self) -> bool {
        self.artist.is_some() || self.genre.is_some() || self.max_duration.is_some()
    }

    /// Check whether a song satisfies every active criterion
    pub fn matches(&self, song: &Song) -> bool {
        if let Some(artist) = &self.artist {
            if song.artist() != artist {
                return false;
            }
        }
        if let Some(genre) = self.genre {
            if song.genre() != genre {
                return false;
            }
        }
        if let Some(max) = self.max_duration {
            if song.duration() > max {
                return false;
            }
        }
        true
    }
}
