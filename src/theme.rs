// src/theme.rs

use ratatui::style::Color;

use crate::config::{PrefStore, DARK_MODE_ENABLED, DARK_MODE_KEY};

/// Color palette for the whole UI. Two fixed variants, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    dark: bool,
    pub background: Color,
    pub text: Color,
    pub user: Color,
    pub assistant: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            dark: false,
            background: Color::White,
            text: Color::Black,
            user: Color::Blue,
            assistant: Color::Rgb(0, 128, 0),
            accent: Color::Magenta,
            dim: Color::Gray,
        }
    }

    pub fn dark() -> Self {
        Palette {
            dark: true,
            background: Color::Black,
            text: Color::White,
            user: Color::Rgb(255, 223, 128),
            assistant: Color::Rgb(144, 238, 144),
            accent: Color::LightMagenta,
            dim: Color::DarkGray,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggled(&self) -> Self {
        if self.dark {
            Palette::light()
        } else {
            Palette::dark()
        }
    }

    /// First restoration hook: picks the stored variant so the very first
    /// draw already uses the right colors.
    pub fn from_preference(prefs: &PrefStore) -> Self {
        if stored_dark_mode(prefs) {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

/// Reads the persisted dark mode flag. Anything other than the enabled
/// marker counts as disabled.
pub fn stored_dark_mode(prefs: &PrefStore) -> bool {
    prefs.get(DARK_MODE_KEY).as_deref() == Some(DARK_MODE_ENABLED)
}
