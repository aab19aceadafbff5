//! Append-only text buffer with per-unit deletion.
//!
//! Each composer operation appends one *unit* (a glyph, a Latin key, a
//! space, a newline) to a buffer. The buffer remembers the byte length of
//! every unit so that `delete_last` can remove a whole multi-code-point
//! glyph such as the lam-alef ligature in one step. Editing always happens
//! at the end of the buffer; there is no cursor.

use serde::{Deserialize, Serialize};

/// How much `delete_last` removes from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteGranularity {
    /// Remove the last appended unit (the whole glyph).
    #[default]
    Unit,
    /// Remove the last code point only, splitting multi-code-point glyphs.
    Char,
}

/// Append-only text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
    units: Vec<usize>, // Byte length of each appended unit
}

impl TextBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (Unicode scalar values).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of units appended and not yet deleted.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append one unit. Empty strings are ignored.
    pub fn push_unit(&mut self, unit: &str) {
        if unit.is_empty() {
            return;
        }
        self.text.push_str(unit);
        self.units.push(unit.len());
    }

    /// Append a single character as one unit.
    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
        self.units.push(ch.len_utf8());
    }

    /// Remove the last unit (or code point, depending on `granularity`).
    /// Returns the removed text, or `None` if the buffer was empty.
    pub fn delete_last(&mut self, granularity: DeleteGranularity) -> Option<String> {
        let last_unit = self.units.pop()?;

        match granularity {
            DeleteGranularity::Unit => {
                let start = self.text.len() - last_unit;
                let removed = self.text.split_off(start);
                Some(removed)
            }
            DeleteGranularity::Char => {
                let ch = self.text.pop()?;
                // The rest of a split glyph stays behind as its own unit.
                let remaining = last_unit - ch.len_utf8();
                if remaining > 0 {
                    self.units.push(remaining);
                }
                Some(ch.to_string())
            }
        }
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.units.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut buf = TextBuffer::new();
        assert!(buf.is_empty());
        buf.push_unit("ا");
        buf.push_unit("لا");
        buf.push_char('h');
        assert_eq!(buf.text(), "الاh");
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.unit_count(), 3);
    }

    #[test]
    fn test_empty_unit_ignored() {
        let mut buf = TextBuffer::new();
        buf.push_unit("");
        assert!(buf.is_empty());
        assert_eq!(buf.unit_count(), 0);
    }

    #[test]
    fn test_delete_last_unit_removes_whole_glyph() {
        let mut buf = TextBuffer::new();
        buf.push_unit("ا");
        buf.push_unit("لا");
        assert_eq!(buf.delete_last(DeleteGranularity::Unit).as_deref(), Some("لا"));
        assert_eq!(buf.text(), "ا");
        assert_eq!(buf.delete_last(DeleteGranularity::Unit).as_deref(), Some("ا"));
        assert!(buf.is_empty());
        assert_eq!(buf.delete_last(DeleteGranularity::Unit), None);
    }

    #[test]
    fn test_delete_last_char_splits_glyph() {
        let mut buf = TextBuffer::new();
        buf.push_unit("لا");
        assert_eq!(buf.delete_last(DeleteGranularity::Char).as_deref(), Some("ا"));
        assert_eq!(buf.text(), "ل");
        assert_eq!(buf.unit_count(), 1);
        assert_eq!(buf.delete_last(DeleteGranularity::Char).as_deref(), Some("ل"));
        assert!(buf.is_empty());
        assert_eq!(buf.unit_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut buf = TextBuffer::new();
        buf.push_unit("abc");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.unit_count(), 0);
    }
}
