use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::error::ConfigError;
use crate::version::types::OsVersion;

/// Environment variable holding the log filter directive
pub const LOG_FILTER_ENV: &str = "WINVER_GATE_LOG";

/// Default log filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "winver-gate.log";

const APP_DIR: &str = "winver-gate";

/// winver-gate configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Version substituted for the current one in cosmetic support checks
    pub cosmetic_version: Option<OsVersion>,
    /// Pins the host version instead of querying the operating system
    pub host_version: Option<String>,
}

impl Config {
    /// Load configuration from a JSON file.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns the path to the config directory for winver-gate.
/// Uses $XDG_CONFIG_HOME/winver-gate if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/winver-gate,
/// or ./winver-gate if neither is available.
pub fn config_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory for winver-gate.
/// Uses $XDG_DATA_HOME/winver-gate if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/winver-gate.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn app_dir_with_env(
    xdg_home: Option<String>,
    home_dir: Option<PathBuf>,
    fallback: &str,
) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<Config>(json!({})).unwrap();

        assert_eq!(result, Config::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "cosmeticVersion": "6.1.7601",
            "hostVersion": "10.0.19045"
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                cosmetic_version: Some(OsVersion::new(6, 1, 7601)),
                host_version: Some("10.0.19045".to_string()),
            }
        );
    }

    #[test]
    fn config_with_malformed_cosmetic_version_is_rejected() {
        let result = serde_json::from_value::<Config>(json!({ "cosmeticVersion": "6.1" }));

        assert!(result.is_err());
    }

    #[test]
    fn app_dir_with_env_uses_xdg_home_when_set() {
        let path = app_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
            ".config",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/winver-gate"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_home() {
        let path = app_dir_with_env(None, Some(PathBuf::from("/home/user")), ".local/share");

        assert_eq!(path, PathBuf::from("/home/user/.local/share/winver-gate"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = app_dir_with_env(None, None, ".config");
        assert_eq!(path, PathBuf::from("./winver-gate"));
    }
}
