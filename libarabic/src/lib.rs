//! # libarabic
//!
//! Arabic virtual keyboard built on libkeyboard-core: type on a QWERTY
//! keyboard, get Arabic letters and tashkeel in one buffer and the typed
//! Latin keys in the other.

pub mod config;
pub mod keymap;

// Re-export the composition model from core
pub use libkeyboard_core::*;

pub use config::ArabicConfig;
pub use keymap::{list_diacritics, resolve, ArabicLayout};

/// An engine over the Arabic layout.
pub type ArabicKeyboard = KeyboardEngine<ArabicLayout>;

/// Create an Arabic keyboard engine from a full configuration.
pub fn create_keyboard(config: &ArabicConfig) -> ArabicKeyboard {
    KeyboardEngine::with_config(ArabicLayout, config.base().clone())
}

/// Create an Arabic keyboard engine with default settings.
pub fn create_default_keyboard() -> ArabicKeyboard {
    KeyboardEngine::new(ArabicLayout)
}

/// Create a bare composer over the Arabic layout.
pub fn create_composer() -> Composer<ArabicLayout> {
    Composer::new(ArabicLayout)
}
