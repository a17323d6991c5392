use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .token-report.toml.
///
/// All fields are optional; the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watchlist: WatchlistConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub logo: LogoConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchlistConfig {
    /// JSON file backing the watchlist. If None, falls back to the
    /// TOKEN_REPORT_WATCHLIST env var, then to an in-memory list.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    /// Program that receives the copied text on stdin
    #[serde(default = "default_clipboard_command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                command: "pbcopy".to_string(),
                args: vec![],
            }
        } else if cfg!(windows) {
            Self {
                command: "clip".to_string(),
                args: vec![],
            }
        } else {
            Self {
                command: "xclip".to_string(),
                args: vec!["-selection".to_string(), "clipboard".to_string()],
            }
        }
    }
}

fn default_clipboard_command() -> String {
    ClipboardConfig::default().command
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoConfig {
    /// Probe the logo URI over HTTP and fall back to a placeholder on failure
    #[serde(default)]
    pub probe: bool,
}

impl Config {
    /// Load configuration from .token-report.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".token-report.toml");
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };

        if config.watchlist.path.is_none() {
            if let Ok(path) = std::env::var("TOKEN_REPORT_WATCHLIST") {
                config.watchlist.path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
