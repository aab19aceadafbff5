//! Keyboard layout abstraction.
//!
//! A `Layout` is the immutable half of a virtual keyboard: it resolves a
//! Latin key identity to the glyph(s) it produces and enumerates the
//! diacritical marks and on-screen rows a presentation layer can draw.
//! Language crates (e.g. `libarabic`) provide concrete layouts; the
//! `Composer` and `KeyboardEngine` are generic over this trait.

use serde::{Deserialize, Serialize};

/// Writing direction of a layout's native script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right (Latin transliteration)
    Ltr,
    /// Right-to-left (Arabic, Hebrew, ...)
    Rtl,
}

impl TextDirection {
    /// HTML/CSS style name (`"ltr"` or `"rtl"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// One entry of a layout's physical key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyMapping {
    /// Latin key identity (always lower-case)
    pub latin_key: char,
    /// Glyph produced by the key (one or more code points)
    pub glyph: &'static str,
}

/// A named combining mark offered by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiacriticEntry {
    /// Display label (e.g. "Fatha")
    pub name: &'static str,
    /// The mark itself
    pub glyph: char,
    /// Mnemonic label shown on the on-screen key. Presentation only.
    pub shortcut: char,
}

impl DiacriticEntry {
    pub const fn new(name: &'static str, glyph: char, shortcut: char) -> Self {
        Self {
            name,
            glyph,
            shortcut,
        }
    }
}

/// One key of the on-screen keyboard.
///
/// Tapping a cap appends `latin` and `glyph` verbatim, which is how caps
/// absent from the physical key table (such as `-` and `=`) still type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyCap {
    pub latin: &'static str,
    pub glyph: &'static str,
}

impl KeyCap {
    pub const fn new(latin: &'static str, glyph: &'static str) -> Self {
        Self { latin, glyph }
    }
}

/// A row of the on-screen keyboard, left to right.
pub type LayoutRow = &'static [KeyCap];

/// Static description of a virtual keyboard layout.
///
/// Implementations must be pure: the same input always resolves to the
/// same output and `diacritics()` returns the same entries in the same
/// order on every call.
pub trait Layout {
    /// Human-readable layout name.
    fn name(&self) -> &'static str;

    /// BCP 47 language tag of the native script (e.g. `"ar"`).
    fn lang_tag(&self) -> &'static str;

    /// Writing direction of the native script.
    fn direction(&self) -> TextDirection;

    /// Resolve a key identity to its glyph.
    ///
    /// Lookup is case-insensitive. `None` means the key is not part of the
    /// layout; callers must treat it as a no-op.
    fn resolve(&self, key: char) -> Option<&'static str>;

    /// Diacritical marks in display order.
    fn diacritics(&self) -> &'static [DiacriticEntry];

    /// On-screen rows, top to bottom. Layouts without an on-screen form
    /// may return an empty slice.
    fn rows(&self) -> &'static [LayoutRow] {
        &[]
    }

    /// Find a diacritic by display name or shortcut label (case-insensitive).
    fn find_diacritic(&self, query: &str) -> Option<&'static DiacriticEntry> {
        let query = query.trim();
        let mut chars = query.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        self.diacritics().iter().find(|entry| {
            entry.name.eq_ignore_ascii_case(query)
                || single.map_or(false, |c| {
                    c == entry.glyph || c.eq_ignore_ascii_case(&entry.shortcut)
                })
        })
    }

    /// Find an on-screen key by its Latin label.
    fn find_keycap(&self, label: &str) -> Option<&'static KeyCap> {
        self.rows()
            .iter()
            .flat_map(|row| row.iter())
            .find(|cap| cap.latin == label)
    }
}

/// Fold a key identity the way every layout lookup does.
///
/// Only single-code-point lower-case forms are used; characters whose
/// lower-case form expands (e.g. `'İ'`) are left unchanged and therefore
/// stay unmapped.
pub fn fold_key(key: char) -> char {
    let mut lower = key.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKS: [DiacriticEntry; 2] = [
        DiacriticEntry::new("Acute", '\u{0301}', 'A'),
        DiacriticEntry::new("Grave", '\u{0300}', 'G'),
    ];

    const ROW: [KeyCap; 2] = [KeyCap::new("x", "ξ"), KeyCap::new("-", "-")];
    const ROWS: [LayoutRow; 1] = [&ROW];

    struct TinyLayout;

    impl Layout for TinyLayout {
        fn name(&self) -> &'static str {
            "tiny"
        }
        fn lang_tag(&self) -> &'static str {
            "el"
        }
        fn direction(&self) -> TextDirection {
            TextDirection::Ltr
        }
        fn resolve(&self, key: char) -> Option<&'static str> {
            match fold_key(key) {
                'x' => Some("ξ"),
                _ => None,
            }
        }
        fn diacritics(&self) -> &'static [DiacriticEntry] {
            &MARKS
        }
        fn rows(&self) -> &'static [LayoutRow] {
            &ROWS
        }
    }

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key('Q'), 'q');
        assert_eq!(fold_key('q'), 'q');
        assert_eq!(fold_key('1'), '1');
        assert_eq!(fold_key('İ'), 'İ');
    }

    #[test]
    fn test_find_diacritic_by_name_and_shortcut() {
        let layout = TinyLayout;
        assert_eq!(layout.find_diacritic("acute").unwrap().glyph, '\u{0301}');
        assert_eq!(layout.find_diacritic("g").unwrap().name, "Grave");
        assert_eq!(layout.find_diacritic("\u{0300}").unwrap().name, "Grave");
        assert!(layout.find_diacritic("circumflex").is_none());
        assert!(layout.find_diacritic("").is_none());
    }

    #[test]
    fn test_find_keycap() {
        let layout = TinyLayout;
        assert_eq!(layout.find_keycap("-").unwrap().glyph, "-");
        assert!(layout.find_keycap("=").is_none());
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
    }
}
