use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// User preferences stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,

    /// Ambient loop to play while the app is open
    #[serde(default)]
    pub sound_file: Option<PathBuf>,

    /// Dial position on startup (minutes)
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
}

fn default_sound_enabled() -> bool {
    true
}

fn default_minutes() -> u32 {
    25
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: default_sound_enabled(),
            sound_file: None,
            default_minutes: default_minutes(),
        }
    }
}

/// Load settings from a settings.json file.
/// A missing or malformed file yields the defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();

    if !path.exists() {
        return Settings::default();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(anyhow::Error::from));

    match parsed {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to a settings.json file
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(temp_dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
        assert!(settings.sound_enabled);
        assert_eq!(settings.default_minutes, 25);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            sound_enabled: false,
            sound_file: Some(PathBuf::from("/tmp/forest.wav")),
            default_minutes: 45,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "sound_enabled": false }"#).unwrap();

        let settings = load_settings(&path);
        assert!(!settings.sound_enabled);
        assert_eq!(settings.default_minutes, 25);
        assert_eq!(settings.sound_file, None);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }
}
