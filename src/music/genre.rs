// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Genre tags attached to songs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Musical genre of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Country,
    Jazz,
    Disco,
}

impl Genre {
    /// All genres in declaration order
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Country,
        Genre::Jazz,
        Genre::Disco,
    ];

    /// Upper-case tag used for display and config files
    pub fn tag(self) -> &'static str {
        match self {
            Genre::Pop => "POP",
            Genre::Rock => "ROCK",
            Genre::HipHop => "HIP_HOP",
            Genre::Country => "COUNTRY",
            Genre::Jazz => "JAZZ",
            Genre::Disco => "DISCO",
        }
    }

    /// Parse genre from string (e.g., "POP", "hip-hop", "Hip_Hop")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase().replace(['-', ' '], "_");
        match s.as_str() {
            "POP" => Some(Genre::Pop),
            "ROCK" => Some(Genre::Rock),
            "HIP_HOP" | "HIPHOP" => Some(Genre::HipHop),
            "COUNTRY" => Some(Genre::Country),
            "JAZZ" => Some(Genre::Jazz),
            "DISCO" => Some(Genre::Disco),
            _ => None,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_from_str() {
        assert_eq!(Genre::from_str("POP"), Some(Genre::Pop));
        assert_eq!(Genre::from_str("rock"), Some(Genre::Rock));
        assert_eq!(Genre::from_str("hip-hop"), Some(Genre::HipHop));
        assert_eq!(Genre::from_str(" Hip_Hop "), Some(Genre::HipHop));
        assert_eq!(Genre::from_str("polka"), None);
    }

    #[test]
    fn test_genre_display_round_trips() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_str(&genre.to_string()), Some(genre));
        }
        assert_eq!(Genre::HipHop.to_string(), "HIP_HOP");
    }
}
