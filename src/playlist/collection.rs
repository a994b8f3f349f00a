// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlist storage and derived views.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::vec;

use tracing::{debug, trace, warn};

use super::{FilteredSongs, OrderedSongs, PlaylistError, ScanningOrder, SongFilter};
use crate::music::{Genre, Song};

/// An ordered collection of unique songs
///
/// Songs are stored in insertion order. Equality between playlists
/// compares stored songs as sets; filters and order are ignored.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Stored songs in insertion order
    songs: Vec<Song>,
    /// Active criteria
    filter: SongFilter,
    /// Active scanning order
    order: ScanningOrder,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist with preset criteria and order
    pub fn with_view(filter: SongFilter, order: ScanningOrder) -> Self {
        Self {
            songs: Vec::new(),
            filter,
            order,
        }
    }

    /// Append a song
    ///
    /// Fails with `PlaylistError::SongAlreadyExists` if an equal song is
    /// stored; the playlist is left unchanged.
    pub fn add_song(&mut self, song: Song) -> Result<(), PlaylistError> {
        if self.songs.contains(&song) {
            warn!(name = song.name(), artist = song.artist(), "duplicate song rejected");
            return Err(PlaylistError::SongAlreadyExists {
                name: song.name().to_string(),
                artist: song.artist().to_string(),
            });
        }
        debug!(name = song.name(), artist = song.artist(), "song added");
        self.songs.push(song);
        Ok(())
    }

    /// Remove the stored song equal to `song`, returns whether one was removed
    pub fn remove_song(&mut self, song: &Song) -> bool {
        match self.songs.iter().position(|s| s == song) {
            Some(index) => {
                self.songs.remove(index);
                debug!(name = song.name(), artist = song.artist(), "song removed");
                true
            }
            None => false,
        }
    }

    /// Check if an equal song is stored
    pub fn contains(&self, song: &Song) -> bool {
        self.songs.contains(song)
    }

    /// Get stored songs in insertion order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Get mutable access to a stored song, e.g. to change its duration
    pub fn song_mut(&mut self, name: &str, artist: &str) -> Option<&mut Song> {
        self.songs.iter_mut().find(|s| s.is(name, artist))
    }

    /// Number of stored songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if no songs are stored
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Replace all criteria at once
    pub fn set_filter(&mut self, filter: SongFilter) {
        self.filter = filter;
    }

    /// Build the filtered and ordered snapshot
    pub fn derived_view(&self) -> Vec<Song> {
        let mut view: Vec<Song> = self
            .songs
            .iter()
            .filter(|s| self.filter.matches(s))
            .cloned()
            .collect();
        self.order.sort(&mut view);
        trace!(
            stored = self.songs.len(),
            matched = view.len(),
            order = %self.order,
            "derived view built"
        );
        view
    }

    /// Iterate the derived view
    ///
    /// The iterator owns its snapshot; later changes to the playlist are
    /// not observed.
    pub fn iter(&self) -> PlaylistIter {
        PlaylistIter {
            inner: self.derived_view().into_iter(),
        }
    }

    /// Order-independent hash of the stored songs
    ///
    /// Sum of each song's hash, so equal playlists hash equally regardless
    /// of insertion order.
    pub fn content_hash(&self) -> u64 {
        self.songs
            .iter()
            .map(|song| {
                let mut hasher = DefaultHasher::new();
                song.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add)
    }
}

impl FilteredSongs for Playlist {
    fn filter(&self) -> &SongFilter {
        &self.filter
    }

    fn set_artist_filter(&mut self, artist: Option<&str>) {
        self.filter.artist = artist.map(str::to_string);
    }

    fn set_genre_filter(&mut self, genre: Option<Genre>) {
        self.filter.genre = genre;
    }

    fn set_duration_filter(&mut self, max_seconds: Option<u32>) {
        self.filter.max_duration = max_seconds;
    }
}

impl OrderedSongs for Playlist {
    fn scanning_order(&self) -> ScanningOrder {
        self.order
    }

    fn set_scanning_order(&mut self, order: ScanningOrder) {
        self.order = order;
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        if self.songs.len() != other.songs.len() {
            return false;
        }
        let theirs: HashSet<&Song> = other.songs.iter().collect();
        self.songs.iter().all(|s| theirs.contains(s))
    }
}

impl Eq for Playlist {}

impl Hash for Playlist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, song) in self.songs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({})", song)?;
        }
        write!(f, "]")
    }
}

impl IntoIterator for &Playlist {
    type Item = Song;
    type IntoIter = PlaylistIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a playlist snapshot
#[derive(Debug, Clone)]
pub struct PlaylistIter {
    inner: vec::IntoIter<Song>,
}

impl Iterator for PlaylistIter {
    type Item = Song;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PlaylistIter {}

impl FusedIterator for PlaylistIter {}
