//! Arabic-keyboard configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libkeyboard_core::Config` (flattened via serde)
//! - Listing options for the command-line front end
//!
//! # Example
//!
//! ```rust
//! use libarabic::ArabicConfig;
//!
//! let config = ArabicConfig::from_toml_str("display_mode = \"latin\"\nshow_shortcuts = false\n").unwrap();
//! assert!(!config.show_shortcuts);
//! let base = config.into_base();
//! assert_eq!(base.display_mode, libkeyboard_core::DisplayMode::Latin);
//! ```
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Options for the Arabic keyboard and its command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArabicConfig {
    /// Base configuration fields (display mode, delete granularity, ...)
    #[serde(flatten)]
    pub base: libkeyboard_core::Config,

    /// Print the mnemonic shortcut label next to each diacritic in listings
    pub show_shortcuts: bool,

    /// Print the Arabic glyph next to each Latin key in listings
    pub show_glyphs: bool,
}

impl Default for ArabicConfig {
    fn default() -> Self {
        Self {
            base: libkeyboard_core::Config::default(),
            show_shortcuts: true,
            show_glyphs: true,
        }
    }
}

impl ArabicConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Convert this config into the base config for use with `KeyboardEngine`.
    pub fn into_base(self) -> libkeyboard_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libkeyboard_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libkeyboard_core::Config {
        &mut self.base
    }
}
