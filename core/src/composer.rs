//! Dual-buffer text composition.
//!
//! The `Composer` keeps two buffers in lockstep: the native buffer receives
//! the glyphs a layout produces, the Latin buffer receives the keys that
//! were typed. Every operation touches both buffers except that a
//! diacritic only has a space placeholder on the Latin side, so the two
//! buffers drift apart character-wise once marks are used. `delete_last`
//! works on each buffer independently and does not try to realign them.

use crate::layout::{KeyCap, Layout, fold_key};
use crate::text_buffer::{DeleteGranularity, TextBuffer};

/// Placeholder written to the Latin buffer for every diacritic.
pub const DIACRITIC_PLACEHOLDER: char = ' ';

/// Mutable composition state for one keyboard session.
#[derive(Debug, Clone)]
pub struct Composer<L: Layout> {
    layout: L,
    arabic: TextBuffer,
    latin: TextBuffer,
    granularity: DeleteGranularity,
}

impl<L: Layout> Composer<L> {
    /// Create an empty composer over `layout`.
    pub fn new(layout: L) -> Self {
        Self::with_granularity(layout, DeleteGranularity::default())
    }

    /// Create an empty composer with an explicit delete granularity.
    pub fn with_granularity(layout: L, granularity: DeleteGranularity) -> Self {
        Self {
            layout,
            arabic: TextBuffer::new(),
            latin: TextBuffer::new(),
            granularity,
        }
    }

    /// The layout used to resolve keys.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Native-script buffer contents.
    pub fn arabic_buffer(&self) -> &str {
        self.arabic.text()
    }

    /// Latin transliteration buffer contents.
    pub fn latin_buffer(&self) -> &str {
        self.latin.text()
    }

    /// Both buffers as `(native, latin)`.
    pub fn buffers(&self) -> (&str, &str) {
        (self.arabic.text(), self.latin.text())
    }

    pub fn granularity(&self) -> DeleteGranularity {
        self.granularity
    }

    pub fn set_granularity(&mut self, granularity: DeleteGranularity) {
        self.granularity = granularity;
    }

    /// Check if both buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.arabic.is_empty() && self.latin.is_empty()
    }

    /// Resolve `latin_key` and append it to both buffers.
    ///
    /// The Latin buffer receives the case-folded key. Returns `false`, and
    /// leaves both buffers untouched, when the key is not in the layout.
    pub fn append_mapped(&mut self, latin_key: char) -> bool {
        let Some(glyph) = self.layout.resolve(latin_key) else {
            tracing::debug!(key = ?latin_key, layout = self.layout.name(), "unmapped key ignored");
            return false;
        };

        self.arabic.push_unit(glyph);
        self.latin.push_char(fold_key(latin_key));
        tracing::trace!(key = ?latin_key, glyph, "append mapped");
        true
    }

    /// Append a space to both buffers.
    pub fn append_space(&mut self) {
        self.arabic.push_char(' ');
        self.latin.push_char(' ');
    }

    /// Append a newline to both buffers.
    pub fn append_newline(&mut self) {
        self.arabic.push_char('\n');
        self.latin.push_char('\n');
    }

    /// Append a combining mark to the native buffer and a space placeholder
    /// to the Latin buffer.
    pub fn append_diacritic(&mut self, glyph: char) {
        self.arabic.push_char(glyph);
        self.latin.push_char(DIACRITIC_PLACEHOLDER);
        tracing::trace!(glyph = ?glyph, "append diacritic");
    }

    /// Append an on-screen key verbatim, bypassing the physical key table.
    pub fn append_keycap(&mut self, cap: &KeyCap) {
        self.arabic.push_unit(cap.glyph);
        self.latin.push_unit(cap.latin);
        tracing::trace!(label = cap.latin, glyph = cap.glyph, "append keycap");
    }

    /// Remove the last unit of each buffer independently.
    pub fn delete_last(&mut self) {
        self.arabic.delete_last(self.granularity);
        self.latin.delete_last(self.granularity);
    }

    /// Reset both buffers to empty.
    pub fn clear_all(&mut self) {
        self.arabic.clear();
        self.latin.clear();
    }
}
