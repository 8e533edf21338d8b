use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Background colors
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Button colors
    pub button_increment: Color,
    pub button_decrement: Color,
    pub button_history: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_panel: tailwind::SLATE.c900,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,

            // Buttons
            button_increment: tailwind::GREEN.c700,
            button_decrement: tailwind::RED.c600,
            button_history: tailwind::BLUE.c700,
            button_disabled: tailwind::SLATE.c700,
        }
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the big counter value
    pub fn counter_value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "u" in "u undo")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for an enabled button badge
    pub fn button(&self, bg_color: Color) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a disabled button badge
    pub fn button_disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .bg(self.button_disabled)
            .add_modifier(Modifier::DIM)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panels_paint_panel_background() {
        let theme = Theme::default();
        assert_eq!(theme.panel_background().bg, Some(theme.bg_panel));
    }

    #[test]
    fn test_disabled_button_differs_from_enabled() {
        let theme = Theme::dark();
        let enabled = theme.button(theme.button_history);
        let disabled = theme.button_disabled();

        assert_eq!(disabled.bg, Some(theme.button_disabled));
        assert_eq!(disabled.fg, Some(theme.text_muted));
        assert!(enabled != disabled);
    }
}
