use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub log: LogConfig,
}

/// Where the template lives and icons are written
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding icon-template.svg; defaults to the crate's assets/
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

/// Diagnostic logging configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LogConfig {
    /// "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "icon-forge")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults on error
    ///
    /// Runs before the logger exists, so problems go straight to stderr.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                eprintln!("Failed to read config file {}: {}", path.display(), e);
            }
        }
        eprintln!("Using default configuration");
        Config::default()
    }

    /// Directory containing the template and the generated icons
    pub fn assets_dir(&self) -> PathBuf {
        self.paths
            .assets_dir
            .clone()
            .unwrap_or_else(default_assets_dir)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log.level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// The `assets/` directory shipped next to this crate's manifest
pub fn default_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}
