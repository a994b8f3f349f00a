// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system.
//!
//! Settings select the default stack capacity, the initial playlist
//! criteria and scanning order, and the log level. Files are YAML unless
//! the extension is `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::Genre;
use crate::playlist::{Playlist, ScanningOrder, SongFilter};
use crate::stack::{BoundedStack, StackError};

/// Root settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    /// Stack defaults
    #[serde(default)]
    pub stack: StackConfig,
    /// Playlist defaults
    #[serde(default)]
    pub playlist: PlaylistConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text).context("Failed to parse TOML settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize settings to TOML")
    }

    /// Save settings, format chosen by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write settings file: {:?}", path))
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        self.logging.level()?;
        Ok(())
    }

    /// Build an empty stack with the configured capacity
    pub fn new_stack<E>(&self) -> Result<BoundedStack<E>, StackError> {
        BoundedStack::new(self.stack.capacity)
    }

    /// Build an empty playlist with the configured criteria and order
    pub fn new_playlist(&self) -> Playlist {
        Playlist::with_view(self.playlist.filter(), self.playlist.scanning_order)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

/// Stack configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackConfig {
    /// Capacity of new stacks; negative values are rejected on construction
    #[serde(default = "default_capacity")]
    pub capacity: i64,
}

fn default_capacity() -> i64 {
    16
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Playlist configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlaylistConfig {
    /// Initial scanning order
    #[serde(default)]
    pub scanning_order: ScanningOrder,
    /// Initial artist criterion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Initial genre criterion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    /// Initial max-duration criterion in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
}

impl PlaylistConfig {
    /// Criteria described by this section
    pub fn filter(&self) -> SongFilter {
        SongFilter {
            artist: self.artist.clone(),
            genre: self.genre,
            max_duration: self.max_duration,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Max level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .trim()
            .parse()
            .map_err(|_| anyhow!("Unknown log level: {}", self.level))
    }
}
