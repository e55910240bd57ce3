use ratatui::style::{Modifier, Style};

use crate::app::config::ColorsConfig;

/// Styles for one bordered pane.
#[derive(Debug, Clone, Copy)]
pub struct PaneTheme {
    pub border: Style,
    pub title: Style,
    pub highlight: Style,
}

/// All widget styles, resolved once from the color config at startup.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub focused: PaneTheme,
    pub unfocused: PaneTheme,
    pub status: Style,
}

impl Theme {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        let accent = colors.accent_color();
        let inactive = colors.inactive_color();
        let selected_text = colors.selected_text_color();
        let title = Style::default().fg(colors.border_title_color());

        Self {
            focused: PaneTheme {
                border: Style::default().fg(accent),
                title,
                highlight: Style::default()
                    .bg(accent)
                    .fg(selected_text)
                    .add_modifier(Modifier::BOLD),
            },
            unfocused: PaneTheme {
                border: Style::default().fg(inactive),
                title,
                highlight: Style::default().bg(inactive).fg(selected_text),
            },
            status: Style::default().fg(colors.status_text_color()),
        }
    }

    /// Pane styles for the given focus state.
    pub fn pane(&self, focused: bool) -> &PaneTheme {
        if focused { &self.focused } else { &self.unfocused }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ColorsConfig::default())
    }
}
