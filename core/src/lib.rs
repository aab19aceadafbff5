//! libkeyboard-core
//!
//! Layout-agnostic key mapping and dual-buffer text composition shared by
//! language-specific keyboard crates (libarabic).
//!
//! Public API:
//! - `Layout` - Static key table, diacritics and on-screen rows of a keyboard
//! - `Composer` - Two synchronized buffers (native script and Latin keys)
//! - `KeyboardEngine` - Routes `KeyEvent`s to composer operations
//! - `KeyboardContext` - State snapshot for the presentation layer
//! - `Config` - Configuration and feature flags
//!
//! ```
//! use libkeyboard_core::{fold_key, DiacriticEntry, KeyEvent, KeyboardEngine, Layout, TextDirection};
//!
//! struct Tiny;
//!
//! impl Layout for Tiny {
//!     fn name(&self) -> &'static str { "tiny" }
//!     fn lang_tag(&self) -> &'static str { "ar" }
//!     fn direction(&self) -> TextDirection { TextDirection::Rtl }
//!     fn resolve(&self, key: char) -> Option<&'static str> {
//!         (fold_key(key) == 'h').then_some("ا")
//!     }
//!     fn diacritics(&self) -> &'static [DiacriticEntry] { &[] }
//! }
//!
//! let mut kb = KeyboardEngine::new(Tiny);
//! kb.process_key(KeyEvent::Char('H'));
//! assert_eq!(kb.composer().buffers(), ("ا", "h"));
//! ```

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub mod layout;
pub use layout::{fold_key, DiacriticEntry, KeyCap, KeyMapping, Layout, LayoutRow, TextDirection};

pub mod text_buffer;
pub use text_buffer::{DeleteGranularity, TextBuffer};

pub mod composer;
pub use composer::{Composer, DIACRITIC_PLACEHOLDER};

pub mod session;
pub use session::{DisplayMode, KeyboardSession};

pub mod context;
pub use context::KeyboardContext;

pub mod engine;
pub use engine::{KeyEvent, KeyResult, KeyboardEngine};

/// Generic configuration for keyboard core functionality.
///
/// Layout-specific options belong in the layout crate's own config
/// (e.g. `ArabicConfig`), which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Buffer shown when a session starts or is reset
    pub display_mode: DisplayMode,

    /// Let Ctrl/Alt/Meta chords through to the application untouched.
    /// When false they are typed as if unmodified.
    pub pass_modified_keys: bool,

    /// What `delete_last` removes: a whole glyph or a single code point
    pub delete_granularity: DeleteGranularity,

    /// Terminate exported text with a newline
    pub export_trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Native,
            pass_modified_keys: true,
            delete_granularity: DeleteGranularity::Unit,
            export_trailing_newline: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
