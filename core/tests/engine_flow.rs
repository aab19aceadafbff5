// core/tests/engine_flow.rs
//
// Integration tests for KeyboardEngine over a custom layout.
//
// Tests cover:
// - Any `Layout` implementation can drive the engine
// - Left-to-right layouts report Ltr in both display modes
// - Context stays in sync with the composer after every event
// - Delete granularity comes from Config

use libkeyboard_core::{
    fold_key, Config, DeleteGranularity, DiacriticEntry, DisplayMode, KeyCap, KeyEvent,
    KeyResult, KeyboardEngine, Layout, LayoutRow, TextDirection,
};

// Mock layout: a Latin-to-Greek keyboard with one digraph key.
#[derive(Debug, Clone)]
struct GreekLayout;

static MARKS: [DiacriticEntry; 1] = [DiacriticEntry::new("Tonos", '\u{0301}', 'T')];
static ROW: [KeyCap; 3] = [
    KeyCap::new("a", "α"),
    KeyCap::new("p", "ψ"),
    KeyCap::new(";", "·"),
];
static ROWS: [LayoutRow; 1] = [&ROW];

impl Layout for GreekLayout {
    fn name(&self) -> &'static str {
        "greek"
    }

    fn lang_tag(&self) -> &'static str {
        "el"
    }

    fn direction(&self) -> TextDirection {
        TextDirection::Ltr
    }

    fn resolve(&self, key: char) -> Option<&'static str> {
        match fold_key(key) {
            'a' => Some("α"),
            'b' => Some("β"),
            // Two code points: psi followed by a combining dot
            'p' => Some("ψ\u{0323}"),
            ' ' => Some(" "),
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

fn assert_context_matches(kb: &KeyboardEngine<GreekLayout>) {
    let ctx = kb.context();
    let (native, latin) = kb.composer().buffers();
    assert_eq!(ctx.native_text, native);
    assert_eq!(ctx.latin_text, latin);
    assert_eq!(ctx.visible_text, kb.visible_text());
    assert_eq!(ctx.display_mode, kb.display_mode());
}

#[test]
fn test_custom_layout_drives_engine() {
    let mut kb = KeyboardEngine::new(GreekLayout);
    let events = [
        KeyEvent::Char('A'),
        KeyEvent::Char('b'),
        KeyEvent::Mark('\u{0301}'),
        KeyEvent::Char('?'),
        KeyEvent::Space,
        KeyEvent::Tap(ROW[2]),
        KeyEvent::ToggleDisplay,
        KeyEvent::Enter,
        KeyEvent::Backspace,
    ];
    for event in events {
        kb.process_key(event);
        assert_context_matches(&kb);
    }
    assert_eq!(kb.composer().buffers(), ("αβ\u{0301} ·", "ab  ;"));
    assert_eq!(kb.visible_text(), "ab  ;");
}

#[test]
fn test_ltr_layout_direction_in_both_modes() {
    let mut kb = KeyboardEngine::new(GreekLayout);
    assert_eq!(kb.context().direction, TextDirection::Ltr);
    assert_eq!(kb.context().lang_tag, "el");
    kb.process_key(KeyEvent::ToggleDisplay);
    assert_eq!(kb.context().direction, TextDirection::Ltr);
    assert_eq!(kb.context().lang_tag, "en");
}

#[test]
fn test_granularity_from_config() {
    let mut kb = KeyboardEngine::new(GreekLayout);
    kb.process_key(KeyEvent::Char('p'));
    kb.process_key(KeyEvent::Backspace);
    assert_eq!(kb.composer().buffers(), ("", ""));

    let mut config = Config::default();
    config.delete_granularity = DeleteGranularity::Char;
    let mut kb = KeyboardEngine::with_config(GreekLayout, config);
    kb.process_key(KeyEvent::Char('p'));
    kb.process_key(KeyEvent::Backspace);
    assert_eq!(kb.composer().buffers(), ("ψ", ""));
}

#[test]
fn test_unmapped_key_reports_not_handled() {
    let mut kb = KeyboardEngine::new(GreekLayout);
    kb.process_key(KeyEvent::Char('a'));
    assert_eq!(kb.process_key(KeyEvent::Char('z')), KeyResult::NotHandled);
    assert_eq!(kb.context().last_result, KeyResult::NotHandled);
    assert_eq!(kb.composer().buffers(), ("α", "a"));
}

#[test]
fn test_set_display_mode_updates_context() {
    let mut kb = KeyboardEngine::new(GreekLayout);
    kb.process_key(KeyEvent::Char('a'));
    kb.set_display_mode(DisplayMode::Latin);
    assert_eq!(kb.context().visible_text, "a");
    kb.set_display_mode(DisplayMode::Native);
    assert_eq!(kb.context().visible_text, "α");
}
