//! Persisted game options.
//!
//! A tiny JSON file holding the two toggles the engine's surroundings care
//! about. Loading is fail-soft: a missing, unreadable or corrupt file yields
//! defaults, and save failures are reported but never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct OptionsFile {
    show_hints: bool,
    sound_enabled: bool,
}

impl Default for OptionsFile {
    fn default() -> Self {
        let s = Settings::default();
        Self {
            show_hints: s.show_hints,
            sound_enabled: s.sound_enabled,
        }
    }
}

/// Settings plus the path they persist to.
#[derive(Debug, Clone)]
pub struct Options {
    path: PathBuf,
    pub settings: Settings,
}

impl Options {
    /// Load from `path`, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        let file = fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str::<OptionsFile>(&text).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            settings: Settings {
                show_hints: file.show_hints,
                sound_enabled: file.sound_enabled,
            },
        }
    }

    /// Write the current settings back to disk.
    pub fn save(&self) -> Result<()> {
        let file = OptionsFile {
            show_hints: self.settings.show_hints,
            sound_enabled: self.settings.sound_enabled,
        };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing options to {}", self.path.display()))
    }
}
