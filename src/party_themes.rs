// src/party_themes.rs

/// Preset themes offered by the sidebar quick-prompt selector.
pub const PARTY_THEMES: &[&str] = &[
    "Birthday Bash",
    "Beach Party",
    "Space Theme",
    "Tropical Luau",
    "Retro Disco",
    "Enchanted Garden",
    "Masquerade Ball",
    "Winter Wonderland",
];

/// Selector state. Index 0 is the blank default; theme entries follow.
#[derive(Debug, Default)]
pub struct ThemePicker {
    selected: usize,
}

impl ThemePicker {
    pub fn new() -> Self {
        ThemePicker { selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % (PARTY_THEMES.len() + 1);
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = PARTY_THEMES.len();
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the chosen theme and resets the selector to its blank
    /// default, so a selection fires exactly once. The blank default yields
    /// `None`.
    pub fn take_selection(&mut self) -> Option<&'static str> {
        if self.selected == 0 {
            return None;
        }
        let theme = PARTY_THEMES[self.selected - 1];
        self.selected = 0;
        Some(theme)
    }
}

/// Fixed prompt template sent on behalf of the user when a theme is picked.
pub fn theme_prompt(theme: &str) -> String {
    format!(
        "I'd like to plan a party with the theme: \"{}\". Can you give me some decoration and space design ideas?",
        theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_default_yields_nothing() {
        let mut picker = ThemePicker::new();
        assert_eq!(picker.take_selection(), None);
    }

    #[test]
    fn test_take_selection_returns_theme_and_resets() {
        let mut picker = ThemePicker::new();
        picker.select_next();
        assert_eq!(picker.take_selection(), Some(PARTY_THEMES[0]));
        // One-shot: a second take without reselecting does nothing.
        assert_eq!(picker.take_selection(), None);
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut picker = ThemePicker::new();
        picker.select_prev();
        assert_eq!(picker.selected_index(), PARTY_THEMES.len());
        picker.select_next();
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_prompt_embeds_theme_name() {
        let prompt = theme_prompt("Space Theme");
        assert!(prompt.contains("\"Space Theme\""));
        assert!(prompt.contains("decoration and space design ideas"));
    }
}
