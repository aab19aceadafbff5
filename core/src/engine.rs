//! Keyboard engine with session management and key event processing.
//!
//! The `KeyboardEngine` wraps a `Composer` with the display-mode flag and a
//! platform context, providing a `process_key()` method that routes input
//! events to composer operations. Each call is one complete state
//! transition; nothing is buffered between events.

use std::io::Write;

use anyhow::Context as _;
use serde::Serialize;

use crate::composer::Composer;
use crate::context::KeyboardContext;
use crate::layout::{KeyCap, Layout};
use crate::session::{DisplayMode, KeyboardSession};
use crate::text_buffer::DeleteGranularity;
use crate::Config;

/// Key event types the keyboard can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Physical key press (letters, digits, punctuation, space)
    Char(char),
    /// Ctrl + character
    Ctrl(char),
    /// Alt + character
    Alt(char),
    /// Meta/Super + character
    Meta(char),
    /// Backspace key
    Backspace,
    /// Enter/Return key
    Enter,
    /// On-screen space bar
    Space,
    /// Clear-all button
    Clear,
    /// Diacritic button, identified by its glyph
    Mark(char),
    /// On-screen key tap; only caps from the layout's rows are accepted
    Tap(KeyCap),
    /// Switch between native and Latin display
    ToggleDisplay,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyResult {
    /// Key was handled by the keyboard
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

/// Keyboard engine with session management.
pub struct KeyboardEngine<L: Layout> {
    session: KeyboardSession<L>,
    context: KeyboardContext,
    config: Config,
}

impl<L: Layout> KeyboardEngine<L> {
    /// Create a new engine over `layout` with default configuration.
    pub fn new(layout: L) -> Self {
        Self::with_config(layout, Config::default())
    }

    /// Create a new engine with the given configuration.
    pub fn with_config(layout: L, config: Config) -> Self {
        let composer = Composer::with_granularity(layout, config.delete_granularity);
        let mut engine = Self {
            session: KeyboardSession::new(composer, config.display_mode),
            context: KeyboardContext::new(),
            config,
        };
        engine.sync_context(KeyResult::NotHandled);
        engine
    }

    /// Get a reference to the context for reading keyboard state.
    pub fn context(&self) -> &KeyboardContext {
        &self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &KeyboardSession<L> {
        &self.session
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &Composer<L> {
        self.session.composer()
    }

    /// Get the layout.
    pub fn layout(&self) -> &L {
        self.session.composer().layout()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.session.mode()
    }

    /// Set the display mode explicitly.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.session.set_mode(mode);
        self.sync_context(KeyResult::Handled);
    }

    /// Text of the buffer selected by the display mode.
    pub fn visible_text(&self) -> &str {
        self.session.visible_text()
    }

    /// Reset both buffers and return to the configured display mode.
    pub fn reset(&mut self) {
        self.session.clear(self.config.display_mode);
        self.sync_context(KeyResult::Handled);
    }

    /// Switch how `Backspace` deletes from now on.
    pub fn set_delete_granularity(&mut self, granularity: DeleteGranularity) {
        self.config.delete_granularity = granularity;
        self.session.composer_mut().set_granularity(granularity);
    }

    /// Process a key event and update keyboard state.
    ///
    /// After calling this, the platform should read `context()` to redraw.
    /// Returns `KeyResult::NotHandled` for keys the layout does not map, for
    /// marks and caps the layout does not offer, and for modified keys
    /// (unless `Config::pass_modified_keys` is off); in all these cases the
    /// buffers are unchanged.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        let key = match key {
            KeyEvent::Ctrl(ch) | KeyEvent::Alt(ch) | KeyEvent::Meta(ch) => {
                if self.config.pass_modified_keys {
                    tracing::trace!(?key, "modified key passed through");
                    return self.finish(KeyResult::NotHandled);
                }
                KeyEvent::Char(ch)
            }
            other => other,
        };

        let result = match key {
            KeyEvent::Char(ch) => {
                if self.session.composer_mut().append_mapped(ch) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyEvent::Backspace => {
                self.session.composer_mut().delete_last();
                KeyResult::Handled
            }
            KeyEvent::Enter => {
                self.session.composer_mut().append_newline();
                KeyResult::Handled
            }
            KeyEvent::Space => {
                self.session.composer_mut().append_space();
                KeyResult::Handled
            }
            KeyEvent::Clear => {
                self.session.composer_mut().clear_all();
                KeyResult::Handled
            }
            KeyEvent::Mark(glyph) => {
                let known = self
                    .layout()
                    .diacritics()
                    .iter()
                    .any(|entry| entry.glyph == glyph);
                if known {
                    self.session.composer_mut().append_diacritic(glyph);
                    KeyResult::Handled
                } else {
                    tracing::debug!(glyph = ?glyph, "mark not offered by layout");
                    KeyResult::NotHandled
                }
            }
            KeyEvent::Tap(cap) => {
                let known = self
                    .layout()
                    .find_keycap(cap.latin)
                    .map_or(false, |offered| *offered == cap);
                if known {
                    self.session.composer_mut().append_keycap(&cap);
                    KeyResult::Handled
                } else {
                    tracing::debug!(?cap, "key cap not offered by layout");
                    KeyResult::NotHandled
                }
            }
            KeyEvent::ToggleDisplay => {
                let mode = self.session.toggle_mode();
                tracing::debug!(?mode, "display mode toggled");
                KeyResult::Handled
            }
            // Already translated to `Char` above
            KeyEvent::Ctrl(_) | KeyEvent::Alt(_) | KeyEvent::Meta(_) => KeyResult::NotHandled,
        };

        self.finish(result)
    }

    /// Write the visible buffer as plain text.
    pub fn export<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writer
            .write_all(self.visible_text().as_bytes())
            .context("failed to write visible text")?;
        if self.config.export_trailing_newline && !self.visible_text().ends_with('\n') {
            writer.write_all(b"\n").context("failed to write trailing newline")?;
        }
        writer.flush().context("failed to flush export")?;
        Ok(())
    }

    fn finish(&mut self, result: KeyResult) -> KeyResult {
        self.sync_context(result);
        result
    }

    /// Publish session state to the context.
    fn sync_context(&mut self, result: KeyResult) {
        let composer = self.session.composer();
        self.context.native_text.clear();
        self.context.native_text.push_str(composer.arabic_buffer());
        self.context.latin_text.clear();
        self.context.latin_text.push_str(composer.latin_buffer());
        self.context.visible_text.clear();
        self.context.visible_text.push_str(self.session.visible_text());
        self.context.display_mode = self.session.mode();
        self.context.direction = self.session.visible_direction();
        self.context.lang_tag = self.session.visible_lang_tag();
        self.context.last_result = result;
    }
}
