use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::consts::{DEFAULT_DATE_FORMAT, DEFAULT_STATUS_BAR_KEY, DEFAULT_TIME_FORMAT};

/// Environment variable naming an explicit settings file, checked before the
/// usual config locations
pub(crate) const CONFIG_ENV: &str = "FILE_INFOBAR_CONFIG";

/// Settings recognized in the configuration file. Every key is optional and
/// falls back to the stock infobar look.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Settings {
    #[serde(default = "default_date_format")]
    pub(crate) date_format_string: String,
    #[serde(default = "default_time_format")]
    pub(crate) time_format_string: String,
    #[serde(default = "default_today")]
    pub(crate) today: String,
    #[serde(default = "default_yesterday")]
    pub(crate) yesterday: String,
    #[serde(default = "default_start_marker")]
    pub(crate) filepath_start_marker: String,
    #[serde(default = "default_end_marker")]
    pub(crate) filepath_end_marker: String,
    #[serde(default = "default_symlink_marker")]
    pub(crate) symlink_marker: String,
    #[serde(default = "default_status_bar_key")]
    pub(crate) status_bar_key: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_today() -> String {
    "Today".to_string()
}

fn default_yesterday() -> String {
    "Yesterday".to_string()
}

fn default_start_marker() -> String {
    "[[ ".to_string()
}

fn default_end_marker() -> String {
    " ]]".to_string()
}

fn default_symlink_marker() -> String {
    "-->".to_string()
}

fn default_status_bar_key() -> String {
    DEFAULT_STATUS_BAR_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            date_format_string: default_date_format(),
            time_format_string: default_time_format(),
            today: default_today(),
            yesterday: default_yesterday(),
            filepath_start_marker: default_start_marker(),
            filepath_end_marker: default_end_marker(),
            symlink_marker: default_symlink_marker(),
            status_bar_key: default_status_bar_key(),
        }
    }
}

impl Settings {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Settings>(&content) {
                    Ok(settings) => {
                        if !quiet {
                            eprintln!("Loaded settings from {}", path.display());
                        }
                        return settings;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Explicit override, mainly for editor integrations and tests
        if let Ok(explicit) = env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(explicit));
        }

        // 2. XDG config: ~/.config/file-infobar/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("file-infobar").join("config.toml"));
        }

        // 3. macOS Application Support: ~/Library/Application Support/file-infobar/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("file-infobar").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 4. Home directory: ~/.file-infobar.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".file-infobar.toml"));
        }

        paths
    }
}
