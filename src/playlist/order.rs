// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scanning orders applied to a playlist's derived view.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::Song;

/// Order in which a playlist's filtered songs are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanningOrder {
    /// Insertion order
    #[default]
    Adding,
    /// By name, then artist
    Name,
    /// By duration, then name, then artist
    Duration,
}

impl ScanningOrder {
    /// Compare two songs under this order
    ///
    /// `Adding` treats every pair as equal so a stable sort keeps
    /// insertion order.
    pub fn compare(self, a: &Song, b: &Song) -> Ordering {
        match self {
            ScanningOrder::Adding => Ordering::Equal,
            ScanningOrder::Name => a
                .name()
                .cmp(b.name())
                .then_with(|| a.artist().cmp(b.artist())),
            ScanningOrder::Duration => a
                .duration()
                .cmp(&b.duration())
                .then_with(|| a.name().cmp(b.name()))
                .then_with(|| a.artist().cmp(b.artist())),
        }
    }

    /// Sort songs in place; stable, so `Adding` is a no-op
    pub fn sort(self, songs: &mut [Song]) {
        if self != ScanningOrder::Adding {
            songs.sort_by(|a, b| self.compare(a, b));
        }
    }

    /// Parse order from string (e.g., "adding", "NAME", "duration")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ADDING" => Some(ScanningOrder::Adding),
            "NAME" => Some(ScanningOrder::Name),
            "DURATION" => Some(ScanningOrder::Duration),
            _ => None,
        }
    }
}

impl fmt::Display for ScanningOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanningOrder::Adding => write!(f, "ADDING"),
            ScanningOrder::Name => write!(f, "NAME"),
            ScanningOrder::Duration => write!(f, "DURATION"),
        }
    }
}
