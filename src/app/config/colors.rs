use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ColorsConfig {
    /// Border and selection highlight of the focused pane
    #[serde(default = "ColorsConfig::default_accent")]
    pub accent: String,
    /// Border and selection highlight of the unfocused pane
    #[serde(default = "ColorsConfig::default_inactive")]
    pub inactive: String,
    #[serde(default = "ColorsConfig::default_border_title")]
    pub border_title: String,
    /// Text of the highlighted row
    #[serde(default = "ColorsConfig::default_selected_text")]
    pub selected_text: String,
    #[serde(default = "ColorsConfig::default_status_text")]
    pub status_text: String,
}

impl ColorsConfig {
    fn default_accent() -> String {
        "#1ed760".to_string()
    }
    fn default_inactive() -> String {
        "#585858".to_string()
    }
    fn default_border_title() -> String {
        "#ffffff".to_string()
    }
    fn default_selected_text() -> String {
        "#000000".to_string()
    }
    fn default_status_text() -> String {
        "#ffffff".to_string()
    }

    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    pub fn accent_color(&self) -> ratatui::style::Color {
        Self::parse_hex(&self.accent)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(ratatui::style::Color::Green)
    }

    pub fn inactive_color(&self) -> ratatui::style::Color {
        Self::parse_hex(&self.inactive)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(ratatui::style::Color::DarkGray)
    }

    pub fn border_title_color(&self) -> ratatui::style::Color {
        Self::parse_hex(&self.border_title)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(ratatui::style::Color::White)
    }

    pub fn selected_text_color(&self) -> ratatui::style::Color {
        Self::parse_hex(&self.selected_text)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(ratatui::style::Color::Black)
    }

    pub fn status_text_color(&self) -> ratatui::style::Color {
        Self::parse_hex(&self.status_text)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(ratatui::style::Color::White)
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            accent: Self::default_accent(),
            inactive: Self::default_inactive(),
            border_title: Self::default_border_title(),
            selected_text: Self::default_selected_text(),
            status_text: Self::default_status_text(),
        }
    }
}
