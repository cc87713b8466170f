//! # Configuration
//!
//! notekit configuration is managed by [`confique`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NOTEKIT_PRIMARY_EXTENSION`, `NOTEKIT_NOTE_TYPES_PATH`.
//! 2. **Explicit file**: a `notekit.toml` handed to [`NotekitConfig::load`] by the host.
//! 3. **User config**: `notekit.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `primary_extension` | `md` | Extension of primary (note) documents |
//! | `image_extensions` | `["png", "jpg", "jpeg", "gif", "svg"]` | Attachments embedded with `!` |
//! | `note_types_path` | `Toolbox/Lookups/noteTypeOptions.json` | Note type catalogue |
//! | `note_types_field` | `noteTypes` | Top-level field holding the catalogue array |
//! | `id_marker` | `🆔` | Glyph in front of generated identifiers |
//! | `default_scheme` | `https` | Scheme assumed for scheme-less URLs |

use crate::error::{NotekitError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "notekit.toml";

/// Configuration for notekit, stored in `notekit.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotekitConfig {
    /// Extension of primary documents, without the dot.
    #[config(default = "md", env = "NOTEKIT_PRIMARY_EXTENSION")]
    pub primary_extension: String,

    /// Attachment extensions rendered as embeds.
    #[config(default = ["png", "jpg", "jpeg", "gif", "svg"])]
    pub image_extensions: Vec<String>,

    /// Vault path of the note type catalogue.
    #[config(
        default = "Toolbox/Lookups/noteTypeOptions.json",
        env = "NOTEKIT_NOTE_TYPES_PATH"
    )]
    pub note_types_path: String,

    /// Top-level field of the catalogue holding the records.
    #[config(default = "noteTypes")]
    pub note_types_field: String,

    /// Marker glyph for generated identifiers. Empty disables it.
    #[config(default = "🆔")]
    pub id_marker: String,

    /// Scheme prepended before parsing scheme-less URLs.
    #[config(default = "https")]
    pub default_scheme: String,
}

impl Default for NotekitConfig {
    fn default() -> Self {
        Self {
            primary_extension: "md".to_string(),
            image_extensions: ["png", "jpg", "jpeg", "gif", "svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            note_types_path: "Toolbox/Lookups/noteTypeOptions.json".to_string(),
            note_types_field: "noteTypes".to_string(),
            id_marker: "🆔".to_string(),
            default_scheme: "https".to_string(),
        }
    }
}

impl NotekitConfig {
    /// Loads the layered configuration. `explicit` is an optional file the host
    /// points at (e.g. inside the vault).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| NotekitError::Config(e.to_string()))
    }

    /// Primary extension, lowercased and without a leading dot.
    pub fn primary_extension(&self) -> String {
        self.primary_extension
            .trim_start_matches('.')
            .to_lowercase()
    }

    pub fn is_primary(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case(&self.primary_extension())
    }

    pub fn is_image(&self, extension: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// The identifier marker, `None` when disabled.
    pub fn id_marker(&self) -> Option<&str> {
        Some(self.id_marker.as_str()).filter(|m| !m.is_empty())
    }
}

/// `notekit.toml` in the OS-appropriate user config directory.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "notekit").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
