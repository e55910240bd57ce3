use crate::app::config::colors::ColorsConfig;
use crate::app::config::logging::LoggingConfig;
use crate::app::config::spotify::SpotifyConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub spotify: SpotifyConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Use two rows instead of full matrix for memory efficiency
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Find the most similar string from a list of candidates
fn find_similar(unknown: &str, candidates: &[&str]) -> Option<String> {
    let unknown_lower = unknown.to_lowercase();

    let mut best_match: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let distance = levenshtein_distance(&unknown_lower, &candidate.to_lowercase());

        // Only suggest if the distance is reasonable (less than half the length of the longer string)
        let max_len = unknown.len().max(candidate.len());
        let threshold = (max_len / 2).max(3);

        if distance <= threshold {
            if let Some((_, best_distance)) = best_match {
                if distance < best_distance {
                    best_match = Some((candidate, distance));
                }
            } else {
                best_match = Some((candidate, distance));
            }
        }
    }

    best_match.map(|(s, _)| s.to_string())
}

/// Format an unknown config warning with optional "did you mean" suggestion
fn format_unknown_warning(section: &str, key: &str, suggestion: Option<&str>) -> String {
    if section == "section" {
        match suggestion {
            Some(s) => format!("Unknown config section: [{}] (did you mean: [{}]?)", key, s),
            None => format!("Unknown config section: [{}]", key),
        }
    } else {
        match suggestion {
            Some(s) => format!(
                "Unknown option in {}: {} (did you mean: {}?)",
                section, key, s
            ),
            None => format!("Unknown option in {}: {}", section, key),
        }
    }
}

impl Config {
    /// Returns the default config file path based on the platform:
    /// - Linux: ~/.config/spindle/config.toml (XDG_CONFIG_HOME)
    /// - macOS: ~/Library/Application Support/spindle/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\spindle\config.toml
    fn default_config_path() -> color_eyre::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(config_dir.join("spindle").join("config.toml"))
    }

    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<(Self, Vec<String>)> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        // Check if config file exists
        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let default_config = Config::default();

            let toml_string = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_string)?;

            // Note: log_config_loading is called from main.rs after logger is initialized
            eprintln!("Created default config file at: {}", config_path.display());

            return Ok((default_config, Vec::new()));
        }
        let contents = std::fs::read_to_string(&config_path)?;

        // Check for unknown config options before parsing
        let mut warnings = Self::check_unknown_fields(&contents);

        // Fall back to defaults on a malformed file; the warning is replayed
        // once the logger is up.
        let config = match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warnings.push(format!(
                    "Failed to parse config file, using defaults: {}",
                    e
                ));
                Config::default()
            }
        };
        Ok((config, warnings))
    }

    /// Check for unknown fields in the config file and return warnings
    fn check_unknown_fields(contents: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        // Known top-level sections
        const KNOWN_SECTIONS: &[&str] = &["spotify", "colors", "logging"];

        // Known fields per section
        const KNOWN_SPOTIFY_FIELDS: &[&str] = &[
            "client_id",
            "redirect_port",
            "login_timeout",
            "volume_step",
        ];

        const KNOWN_COLORS_FIELDS: &[&str] = &[
            "accent",
            "inactive",
            "border_title",
            "selected_text",
            "status_text",
        ];

        const KNOWN_LOGGING_FIELDS: &[&str] = &[
            "enabled",
            "level",
            "log_to_console",
            "append_to_file",
            "rotate_logs",
            "rotation_size_mb",
            "keep_log_files",
        ];

        // Parse as generic TOML table
        let table: Result<toml::Table, _> = toml::from_str(contents);
        let table = match table {
            Ok(t) => t,
            Err(_) => return warnings, // Let the main parser handle errors
        };

        // Check top-level sections
        for key in table.keys() {
            if !KNOWN_SECTIONS.contains(&key.as_str()) {
                let suggestion = find_similar(key, KNOWN_SECTIONS);
                let msg = format_unknown_warning("section", key, suggestion.as_deref());
                warnings.push(msg);
            }
        }

        // Check fields in each known section
        if let Some(toml::Value::Table(spotify)) = table.get("spotify") {
            for key in spotify.keys() {
                if !KNOWN_SPOTIFY_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_SPOTIFY_FIELDS);
                    let msg = format_unknown_warning("[spotify]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        if let Some(toml::Value::Table(colors)) = table.get("colors") {
            for key in colors.keys() {
                if !KNOWN_COLORS_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_COLORS_FIELDS);
                    let msg = format_unknown_warning("[colors]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        if let Some(toml::Value::Table(logging)) = table.get("logging") {
            for key in logging.keys() {
                if !KNOWN_LOGGING_FIELDS.contains(&key.as_str()) {
                    let suggestion = find_similar(key, KNOWN_LOGGING_FIELDS);
                    let msg = format_unknown_warning("[logging]", key, suggestion.as_deref());
                    warnings.push(msg);
                }
            }
        }

        warnings
    }

    /// Generate a default config file at the specified path
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        // Check if file already exists
        if path.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Config file already exists at: {}",
                path.display()
            ));
        }

        let default_config = Config::default();
        let toml_string = toml::to_string_pretty(&default_config)?;
        std::fs::write(&path, &toml_string)?;

        println!("Generated default config at: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.spotify.redirect_port, 8080);
        assert_eq!(config.spotify.volume_step, 10);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_unknown_section_warning_with_suggestion() {
        let warnings = Config::check_unknown_fields("[spotfy]\nclient_id = \"x\"\n");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[spotfy]"));
        assert!(warnings[0].contains("did you mean: [spotify]"));
    }

    #[test]
    fn test_unknown_option_warning_with_suggestion() {
        let warnings = Config::check_unknown_fields("[spotify]\nvolume_stap = 5\n");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[spotify]"));
        assert!(warnings[0].contains("volume_stap"));
        assert!(warnings[0].contains("did you mean: volume_step"));
    }

    #[test]
    fn test_known_fields_produce_no_warnings() {
        let contents = "[spotify]\nclient_id = \"x\"\nvolume_step = 5\n\n[colors]\naccent = \"#ffffff\"\n";
        assert!(Config::check_unknown_fields(contents).is_empty());
    }

    #[test]
    fn test_malformed_config_warns_and_falls_back() {
        let path = std::env::temp_dir().join("spindle-test-malformed-config.toml");
        std::fs::write(&path, "[spotify]\nvolume_step = \"ten\"\n").unwrap();

        let (config, warnings) = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.spotify.volume_step, 10);
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("Failed to parse config file"))
        );
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.spotify.login_timeout, 120);
        assert_eq!(parsed.colors.accent, "#1ed760");
    }
}
