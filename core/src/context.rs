//! Keyboard context for platform communication.
//!
//! The `KeyboardContext` struct is a plain data container with public fields.
//! After calling `process_key()` on a `KeyboardEngine`, the platform reads
//! these fields to redraw the output pane.

use serde::Serialize;

use crate::engine::KeyResult;
use crate::layout::TextDirection;
use crate::session::DisplayMode;

/// Keyboard context for platform communication.
///
/// # Fields
///
/// - `visible_text`: Buffer selected by the display mode
/// - `native_text` / `latin_text`: Both buffers, for platforms that show them side by side
/// - `display_mode`: Which buffer is visible
/// - `direction`: Writing direction of `visible_text`
/// - `lang_tag`: Language tag of `visible_text`
/// - `last_result`: Outcome of the most recent key event
#[derive(Debug, Clone, Serialize)]
pub struct KeyboardContext {
    pub visible_text: String,
    pub native_text: String,
    pub latin_text: String,
    pub display_mode: DisplayMode,
    pub direction: TextDirection,
    pub lang_tag: &'static str,
    pub last_result: KeyResult,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        Self {
            visible_text: String::new(),
            native_text: String::new(),
            latin_text: String::new(),
            display_mode: DisplayMode::Native,
            direction: TextDirection::Ltr,
            lang_tag: "",
            last_result: KeyResult::NotHandled,
        }
    }
}

impl KeyboardContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's any text to show.
    pub fn has_visible_text(&self) -> bool {
        !self.visible_text.is_empty()
    }

    /// Number of lines in the visible text (an empty buffer has one line).
    pub fn line_count(&self) -> usize {
        self.visible_text.split('\n').count()
    }
}
