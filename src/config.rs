//! Board configuration
//!
//! Title, free-tile label, header image and color palette. Every field has a
//! default; a JSON file may override any subset of them.

use crate::core::DEFAULT_FREE_LABEL;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Color palette, each entry a CSS-style hex color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colors {
    pub bg: String,
    pub card: String,
    pub accent: String,
    pub marked: String,
    pub text: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            bg: "#0f1724".to_string(),
            card: "#0b1220".to_string(),
            accent: "#ffca28".to_string(),
            marked: "#1f8a70".to_string(),
            text: "#e6eef8".to_string(),
        }
    }
}

/// Resolved configuration used by the controller and presenters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub board_title: String,
    pub free_tile_name: String,
    /// Image reference shown above the board; empty means none
    pub header_image: String,
    pub colors: Colors,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            board_title: "Bingo!".to_string(),
            free_tile_name: DEFAULT_FREE_LABEL.to_string(),
            header_image: String::new(),
            colors: Colors::default(),
        }
    }
}

/// Partial configuration as read from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub board_title: Option<String>,
    pub free_tile_name: Option<String>,
    pub header_image: Option<String>,
    pub colors: Option<ColorOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub bg: Option<String>,
    pub card: Option<String>,
    pub accent: Option<String>,
    pub marked: Option<String>,
    pub text: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from a parsed config document
    ///
    /// Keys are taken one at a time: a key whose value is not a string (or,
    /// for `colors`, not an object) is logged and skipped while the others
    /// still apply. `null` counts as absent and unknown keys are ignored.
    #[must_use]
    pub fn from_document(document: &Map<String, Value>) -> Self {
        let colors = match document.get("colors") {
            None | Some(Value::Null) => None,
            Some(Value::Object(colors)) => Some(ColorOverrides {
                bg: string_key(colors, "bg"),
                card: string_key(colors, "card"),
                accent: string_key(colors, "accent"),
                marked: string_key(colors, "marked"),
                text: string_key(colors, "text"),
            }),
            Some(other) => {
                warn!(key = "colors", value = %other, "ignoring config key, expected an object");
                None
            }
        };

        Self {
            board_title: string_key(document, "boardTitle"),
            free_tile_name: string_key(document, "freeTileName"),
            header_image: string_key(document, "headerImage"),
            colors,
        }
    }
}

fn string_key(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Null => None,
        other => {
            warn!(key, value = %other, "ignoring config key, expected a string");
            None
        }
    }
}

impl Configuration {
    /// Apply overrides on top of this configuration
    ///
    /// Top-level keys replace wholesale; `colors` is merged key by key.
    ///
    /// # Examples
    /// ```
    /// use bingo_board::config::{ColorOverrides, Configuration, ConfigOverrides};
    ///
    /// let overrides = ConfigOverrides {
    ///     board_title: Some("Office".to_string()),
    ///     colors: Some(ColorOverrides {
    ///         accent: Some("#ff0000".to_string()),
    ///         ..ColorOverrides::default()
    ///     }),
    ///     ..ConfigOverrides::default()
    /// };
    /// let config = Configuration::default().merged(overrides);
    ///
    /// assert_eq!(config.board_title, "Office");
    /// assert_eq!(config.colors.accent, "#ff0000");
    /// assert_eq!(config.colors.bg, "#0f1724");
    /// ```
    #[must_use]
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(title) = overrides.board_title {
            self.board_title = title;
        }
        if let Some(label) = overrides.free_tile_name {
            self.free_tile_name = label;
        }
        if let Some(image) = overrides.header_image {
            self.header_image = image;
        }
        if let Some(colors) = overrides.colors {
            let merge = |slot: &mut String, value: Option<String>| {
                if let Some(value) = value {
                    *slot = value;
                }
            };
            merge(&mut self.colors.bg, colors.bg);
            merge(&mut self.colors.card, colors.card);
            merge(&mut self.colors.accent, colors.accent);
            merge(&mut self.colors.marked, colors.marked);
            merge(&mut self.colors.text, colors.text);
        }
        self
    }

    /// Parse a JSON config document and merge it over the defaults
    ///
    /// Badly typed keys are skipped individually; see
    /// [`ConfigOverrides::from_document`].
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `text` is not JSON or not a JSON object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self::default().merged(ConfigOverrides::from_document(&document)))
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// A missing file or an unparsable document is logged and yields
    /// [`Configuration::default`].
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load config, using defaults");
                return Self::default();
            }
        };

        match Self::from_json(&text) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Label for the free cell; an empty name falls back to `FREE`
    #[must_use]
    pub fn free_label(&self) -> &str {
        if self.free_tile_name.is_empty() {
            DEFAULT_FREE_LABEL
        } else {
            &self.free_tile_name
        }
    }

    /// Header image reference, if one is configured
    #[must_use]
    pub fn header_image(&self) -> Option<&str> {
        if self.header_image.is_empty() {
            None
        } else {
            Some(&self.header_image)
        }
    }
}
