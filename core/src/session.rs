//! Keyboard session management.
//!
//! The `KeyboardSession` couples the `Composer` with the display-mode flag
//! that decides which of the two buffers the presentation layer shows.
//! The flag never affects composition; it only selects a view.

use serde::{Deserialize, Serialize};

use crate::composer::Composer;
use crate::layout::{Layout, TextDirection};

/// Which buffer the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Show the native-script buffer
    #[default]
    Native,
    /// Show the Latin transliteration buffer
    Latin,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Native => DisplayMode::Latin,
            DisplayMode::Latin => DisplayMode::Native,
        }
    }
}

/// Session state: composer plus display mode.
#[derive(Debug, Clone)]
pub struct KeyboardSession<L: Layout> {
    composer: Composer<L>,
    mode: DisplayMode,
}

impl<L: Layout> KeyboardSession<L> {
    /// Create a new session starting in `mode`.
    pub fn new(composer: Composer<L>, mode: DisplayMode) -> Self {
        Self { composer, mode }
    }

    /// Get the composer.
    pub fn composer(&self) -> &Composer<L> {
        &self.composer
    }

    /// Get a mutable reference to the composer.
    pub fn composer_mut(&mut self) -> &mut Composer<L> {
        &mut self.composer
    }

    /// Get the current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Set the display mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Flip between native and Latin display. Returns the new mode.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Text of the buffer selected by the display mode.
    pub fn visible_text(&self) -> &str {
        match self.mode {
            DisplayMode::Native => self.composer.arabic_buffer(),
            DisplayMode::Latin => self.composer.latin_buffer(),
        }
    }

    /// Writing direction of the visible buffer.
    pub fn visible_direction(&self) -> TextDirection {
        match self.mode {
            DisplayMode::Native => self.composer.layout().direction(),
            DisplayMode::Latin => TextDirection::Ltr,
        }
    }

    /// Language tag of the visible buffer.
    pub fn visible_lang_tag(&self) -> &'static str {
        match self.mode {
            DisplayMode::Native => self.composer.layout().lang_tag(),
            DisplayMode::Latin => "en",
        }
    }

    /// Clear both buffers and return to `mode`.
    pub fn clear(&mut self, mode: DisplayMode) {
        self.composer.clear_all();
        self.mode = mode;
    }
}
