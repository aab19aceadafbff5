// libarabic/src/keymap.rs
//
// Arabic keyboard layout: QWERTY key identities to Arabic letters, the
// tashkeel (diacritic) set and the on-screen rows.
//
// The physical key table follows the common Arabic PC layout as printed on
// bilingual keyboards: each Latin key produces the Arabic letter engraved
// on the same key. Digits produce Arabic-Indic digits, `b` produces the
// lam-alef ligature (two code points) and space maps to itself.

use std::collections::HashMap;

use libkeyboard_core::{
    fold_key, DiacriticEntry, KeyCap, KeyMapping, Layout, LayoutRow, TextDirection,
};
use once_cell::sync::Lazy;
use phf::phf_map;

/// Physical key table, keyed by lower-case Latin key.
static KEY_TABLE: phf::Map<char, &'static str> = phf_map! {
    '1' => "١", '2' => "٢", '3' => "٣", '4' => "٤", '5' => "٥",
    '6' => "٦", '7' => "٧", '8' => "٨", '9' => "٩", '0' => "٠",
    'q' => "ض", 'w' => "ص", 'e' => "ث", 'r' => "ق", 't' => "ف",
    'y' => "غ", 'u' => "ع", 'i' => "ه", 'o' => "خ", 'p' => "ح",
    '[' => "ج", ']' => "د", '\\' => "\\",
    'a' => "ش", 's' => "س", 'd' => "ي", 'f' => "ب", 'g' => "ل",
    'h' => "ا", 'j' => "ت", 'k' => "ن", 'l' => "م", ';' => "ك",
    '\'' => "ط",
    'z' => "ئ", 'x' => "ء", 'c' => "ؤ", 'v' => "ر", 'b' => "لا",
    'n' => "ى", 'm' => "ة", ',' => "و", '.' => "ز", '/' => "ظ",
    ' ' => " ",
};

/// Tashkeel in display order.
static DIACRITICS: [DiacriticEntry; 9] = [
    DiacriticEntry::new("Fatha", '\u{064E}', 'F'),
    DiacriticEntry::new("Damma", '\u{064F}', 'D'),
    DiacriticEntry::new("Kasra", '\u{0650}', 'K'),
    DiacriticEntry::new("Sukoon", '\u{0652}', 'S'),
    DiacriticEntry::new("Shadda", '\u{0651}', 'H'),
    DiacriticEntry::new("Tanween Fath", '\u{064B}', 'T'),
    DiacriticEntry::new("Tanween Damm", '\u{064C}', 'G'),
    DiacriticEntry::new("Tanween Kasr", '\u{064D}', 'J'),
    // Alef with madda above; precomposed, not a combining mark.
    DiacriticEntry::new("Maddah", '\u{0622}', 'M'),
];

// On-screen rows. The digit row carries `-` and `=`, which only type when
// tapped: they are not part of the physical key table.
static DIGIT_ROW: [KeyCap; 12] = [
    KeyCap::new("1", "١"),
    KeyCap::new("2", "٢"),
    KeyCap::new("3", "٣"),
    KeyCap::new("4", "٤"),
    KeyCap::new("5", "٥"),
    KeyCap::new("6", "٦"),
    KeyCap::new("7", "٧"),
    KeyCap::new("8", "٨"),
    KeyCap::new("9", "٩"),
    KeyCap::new("0", "٠"),
    KeyCap::new("-", "-"),
    KeyCap::new("=", "="),
];

static UPPER_ROW: [KeyCap; 13] = [
    KeyCap::new("q", "ض"),
    KeyCap::new("w", "ص"),
    KeyCap::new("e", "ث"),
    KeyCap::new("r", "ق"),
    KeyCap::new("t", "ف"),
    KeyCap::new("y", "غ"),
    KeyCap::new("u", "ع"),
    KeyCap::new("i", "ه"),
    KeyCap::new("o", "خ"),
    KeyCap::new("p", "ح"),
    KeyCap::new("[", "ج"),
    KeyCap::new("]", "د"),
    KeyCap::new("\\", "\\"),
];

static HOME_ROW: [KeyCap; 11] = [
    KeyCap::new("a", "ش"),
    KeyCap::new("s", "س"),
    KeyCap::new("d", "ي"),
    KeyCap::new("f", "ب"),
    KeyCap::new("g", "ل"),
    KeyCap::new("h", "ا"),
    KeyCap::new("j", "ت"),
    KeyCap::new("k", "ن"),
    KeyCap::new("l", "م"),
    KeyCap::new(";", "ك"),
    KeyCap::new("'", "ط"),
];

static LOWER_ROW: [KeyCap; 10] = [
    KeyCap::new("z", "ئ"),
    KeyCap::new("x", "ء"),
    KeyCap::new("c", "ؤ"),
    KeyCap::new("v", "ر"),
    KeyCap::new("b", "لا"),
    KeyCap::new("n", "ى"),
    KeyCap::new("m", "ة"),
    KeyCap::new(",", "و"),
    KeyCap::new(".", "ز"),
    KeyCap::new("/", "ظ"),
];

static ROWS: [LayoutRow; 4] = [&DIGIT_ROW, &UPPER_ROW, &HOME_ROW, &LOWER_ROW];

/// Key table in on-screen order (row by row, then space).
static MAPPINGS: Lazy<Vec<KeyMapping>> = Lazy::new(|| {
    let mut out: Vec<KeyMapping> = ROWS
        .iter()
        .flat_map(|row| row.iter())
        .filter_map(|cap| {
            let mut chars = cap.latin.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return None,
            };
            KEY_TABLE.get(&key).map(|&glyph| KeyMapping {
                latin_key: key,
                glyph,
            })
        })
        .collect();
    out.push(KeyMapping {
        latin_key: ' ',
        glyph: " ",
    });
    out
});

/// Glyph -> Latin key, for `latin_for` and `reverse_transliterate`.
static REVERSE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    KEY_TABLE
        .entries()
        .map(|(&key, &glyph)| (glyph, key))
        .collect()
});

/// The Arabic virtual keyboard layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArabicLayout;

impl ArabicLayout {
    pub fn new() -> Self {
        Self
    }

    /// All physical key mappings in on-screen order.
    pub fn mappings(&self) -> &'static [KeyMapping] {
        &MAPPINGS
    }

    /// Number of keys in the physical table.
    pub fn key_count(&self) -> usize {
        KEY_TABLE.len()
    }

    /// Latin key that produces `glyph`, if any.
    pub fn latin_for(&self, glyph: &str) -> Option<char> {
        REVERSE.get(glyph).copied()
    }

    /// Convert a whole Latin string, key by key.
    ///
    /// Characters without a mapping (newlines, `!`, ...) are copied through
    /// unchanged.
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);
        for ch in input.chars() {
            match self.resolve(ch) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(ch),
            }
        }
        out
    }

    /// Recover the Latin keys that type `input`.
    ///
    /// Two-code-point glyphs (`لا`) are matched before single ones, so the
    /// result can differ from the original keys when `g` was followed by `h`.
    /// Characters no key produces (diacritics, `!`, ...) are copied through.
    pub fn reverse_transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(first) = rest.chars().next() {
            let single = first.len_utf8();
            let pair = rest
                .char_indices()
                .nth(1)
                .map(|(at, second)| at + second.len_utf8());
            if let Some(end) = pair {
                if let Some(key) = self.latin_for(&rest[..end]) {
                    out.push(key);
                    rest = &rest[end..];
                    continue;
                }
            }
            out.push(self.latin_for(&rest[..single]).unwrap_or(first));
            rest = &rest[single..];
        }
        out
    }
}

impl Layout for ArabicLayout {
    fn name(&self) -> &'static str {
        "arabic"
    }

    fn lang_tag(&self) -> &'static str {
        "ar"
    }

    fn direction(&self) -> TextDirection {
        TextDirection::Rtl
    }

    fn resolve(&self, key: char) -> Option<&'static str> {
        KEY_TABLE.get(&fold_key(key)).copied()
    }

    fn diacritics(&self) -> &'static [DiacriticEntry] {
        &DIACRITICS
    }

    fn rows(&self) -> &'static [LayoutRow] {
        &ROWS
    }
}

/// Resolve a key against the Arabic layout.
pub fn resolve(key: char) -> Option<&'static str> {
    ArabicLayout.resolve(key)
}

/// The Arabic diacritics in display order.
pub fn list_diacritics() -> &'static [DiacriticEntry] {
    ArabicLayout.diacritics()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_letters() {
        assert_eq!(resolve('h'), Some("ا"));
        assert_eq!(resolve('j'), Some("ت"));
        assert_eq!(resolve('q'), Some("ض"));
        assert_eq!(resolve('/'), Some("ظ"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve('Q'), resolve('q'));
        assert_eq!(resolve('H'), Some("ا"));
    }

    #[test]
    fn test_resolve_special_entries() {
        assert_eq!(resolve(' '), Some(" "));
        assert_eq!(resolve('\\'), Some("\\"));
        assert_eq!(resolve('b'), Some("\u{0644}\u{0627}"));
        assert_eq!(resolve('7'), Some("٧"));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ['!', '-', '=', '`', '{', '\n', 'é', 'ض'] {
            assert_eq!(resolve(key), None, "{key:?} should be unmapped");
        }
    }

    #[test]
    fn test_diacritics_fixed_order() {
        let names: Vec<&str> = list_diacritics().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "Fatha",
                "Damma",
                "Kasra",
                "Sukoon",
                "Shadda",
                "Tanween Fath",
                "Tanween Damm",
                "Tanween Kasr",
                "Maddah",
            ]
        );
        assert_eq!(list_diacritics(), list_diacritics());
        assert_eq!(list_diacritics()[0].glyph, '\u{064E}');
        assert_eq!(list_diacritics()[8].shortcut, 'M');
    }

    #[test]
    fn test_mappings_cover_table_in_row_order() {
        let layout = ArabicLayout;
        let mappings = layout.mappings();
        assert_eq!(mappings.len(), layout.key_count());
        assert_eq!(mappings.len(), 45);
        assert_eq!(mappings[0].latin_key, '1');
        assert_eq!(mappings[10].latin_key, 'q');
        assert_eq!(mappings.last().map(|m| m.latin_key), Some(' '));
    }

    #[test]
    fn test_rows_shape() {
        let rows = ArabicLayout.rows();
        let lens: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![12, 13, 11, 10]);
        assert!(ArabicLayout.find_keycap("-").is_some());
        assert!(resolve('-').is_none());
    }

    #[test]
    fn test_reverse_lookup() {
        let layout = ArabicLayout;
        assert_eq!(layout.latin_for("ا"), Some('h'));
        assert_eq!(layout.latin_for("لا"), Some('b'));
        assert_eq!(layout.latin_for("ل"), Some('g'));
        assert_eq!(layout.latin_for("x"), None);
    }

    #[test]
    fn test_reverse_transliterate() {
        let layout = ArabicLayout;
        assert_eq!(layout.reverse_transliterate("ات"), "hj");
        assert_eq!(layout.reverse_transliterate("لا ١٢"), "b 12");
        // Marks and unknown characters pass through
        assert_eq!(layout.reverse_transliterate("ات\u{064E}!"), "hj\u{064E}!");
        // A lone lam still maps back to its own key
        assert_eq!(layout.reverse_transliterate("ل"), "g");

        let keys = "salam world";
        let arabic = layout.transliterate(keys);
        assert_eq!(layout.reverse_transliterate(&arabic), keys);
    }

    #[test]
    fn test_transliterate() {
        let layout = ArabicLayout;
        assert_eq!(layout.transliterate("hj"), "ات");
        assert_eq!(layout.transliterate("Ghl!"), "لام!");
        assert_eq!(layout.transliterate("h\nh"), "ا\nا");
        assert_eq!(layout.transliterate(""), "");
    }

    #[test]
    fn test_find_diacritic_by_shortcut() {
        let layout = ArabicLayout;
        assert_eq!(layout.find_diacritic("f").map(|d| d.name), Some("Fatha"));
        assert_eq!(layout.find_diacritic("Shadda").map(|d| d.shortcut), Some('H'));
        assert_eq!(
            layout.find_diacritic("tanween kasr").map(|d| d.glyph),
            Some('\u{064D}')
        );
        assert!(layout.find_diacritic("Q").is_none());
    }
}
