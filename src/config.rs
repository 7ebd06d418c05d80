/// Application settings
///
/// A small JSON file in the user's config directory. Loading never fails:
/// a missing or unreadable file simply yields the defaults, which run the
/// viewer offline on the embedded catalog.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Absolute URL of the portfolio catalog document. `None` skips the
    /// network entirely and uses the embedded copy.
    pub catalog_url: Option<String>,
    /// Suppresses video autoplay in the lightbox.
    pub reduced_motion: bool,
}

impl Settings {
    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::settings_path();
        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_json(&text).unwrap_or_else(|e| {
                eprintln!("⚠️  Ignoring unreadable settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Where the settings file lives:
    /// - Linux: ~/.config/portfolio-viewer/settings.json
    /// - macOS: ~/Library/Application Support/portfolio-viewer/settings.json
    /// - Windows: %APPDATA%\portfolio-viewer\settings.json
    fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default();

        path.push("portfolio-viewer");
        path.push("settings.json");
        path
    }

    /// Convert to JSON for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from a JSON settings file
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            catalog_url: Some("https://samsinteriors.example/portfolio.json".to_owned()),
            reduced_motion: true,
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_missing_fields_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let partial = Settings::from_json(r#"{"reduced_motion": true}"#).unwrap();
        assert_eq!(partial.catalog_url, None);
        assert!(partial.reduced_motion);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Settings::from_json("not json").is_err());
    }
}
