// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlists with cumulative filtering and selectable scanning order.
//!
//! This module provides:
//! - `Playlist`: an insertion-ordered, duplicate-free song collection
//! - `SongFilter`: optional artist, genre and max-duration criteria
//! - `ScanningOrder`: adding, name or duration order for iteration
//!
//! Filters and order never touch stored songs. Each call to
//! `Playlist::iter` builds a fresh snapshot from the current state.

pub mod collection;
pub mod filter;
pub mod order;

pub use collection::{Playlist, PlaylistIter};
pub use filter::SongFilter;
pub use order::ScanningOrder;

use thiserror::Error;

use crate::music::Genre;

/// Playlist error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// An equal song (same name and artist) is already stored
    #[error("song already exists in playlist: {name} by {artist}")]
    SongAlreadyExists { name: String, artist: String },
}

/// Song collections whose iteration can be narrowed by criteria
pub trait FilteredSongs {
    /// Get the active criteria
    fn filter(&self) -> &SongFilter;

    /// Keep only songs by this artist; `None` disables the criterion
    fn set_artist_filter(&mut self, artist: Option<&str>);

    /// Keep only songs of this genre; `None` disables the criterion
    fn set_genre_filter(&mut self, genre: Option<Genre>);

    /// Keep only songs no longer than `max_seconds`; `None` disables the criterion
    fn set_duration_filter(&mut self, max_seconds: Option<u32>);

    /// Disable every criterion
    fn clear_filters(&mut self) {
        self.set_artist_filter(None);
        self.set_genre_filter(None);
        self.set_duration_filter(None);
    }
}

/// Song collections whose iteration order can be selected
pub trait OrderedSongs {
    /// Get the active scanning order
    fn scanning_order(&self) -> ScanningOrder;

    /// Replace the scanning order used by the next iteration
    fn set_scanning_order(&mut self, order: ScanningOrder);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Song;

    #[test]
    fn test_playlist_creation() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.scanning_order(), ScanningOrder::Adding);
        assert!(!playlist.filter().is_active());
    }

    #[test]
    fn test_clear_filters_default_method() {
        let mut playlist = Playlist::new();
        playlist.add_song(Song::new("A", "X", Genre::Pop, 200)).unwrap();
        playlist.add_song(Song::new("B", "Y", Genre::Rock, 100)).unwrap();

        playlist.set_artist_filter(Some("X"));
        playlist.set_genre_filter(Some(Genre::Rock));
        playlist.set_duration_filter(Some(50));
        assert_eq!(playlist.iter().count(), 0);

        playlist.clear_filters();
        assert_eq!(playlist.filter(), &SongFilter::default());
        assert_eq!(playlist.iter().count(), 2);
    }

    #[test]
    fn test_error_message() {
        let err = PlaylistError::SongAlreadyExists {
            name: "Vogue".to_string(),
            artist: "Madonna".to_string(),
        };
        assert_eq!(err.to_string(), "song already exists in playlist: Vogue by Madonna");
    }
}
