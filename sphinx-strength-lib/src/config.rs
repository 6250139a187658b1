//src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "sphinx-strength";
const CONFIG_ENV_VAR: &str = "SPHINX_CONFIG_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid color name: {0}")]
    InvalidColor(String),
    #[error("span_cache_capacity must be at least 1 (got {0}).")]
    InvalidCacheCapacity(usize),
}

// Define standard colors using strum for easy iteration/parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
}

// Helper to parse a string into our StandardColor enum
pub fn parse_color(color_str: &str) -> Result<StandardColor, Error> {
    for color in StandardColor::iter() {
        if format!("{:?}", color).eq_ignore_ascii_case(color_str) {
            return Ok(color);
        }
    }
    Err(Error::InvalidColor(color_str.to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Theme {
    pub header_color: String,
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header_color: "White".to_string(),
            accent_color: "Yellow".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Config {
    /// Duration of the window slide transition, in milliseconds.
    pub transition_duration_ms: u64,
    /// Fraction of the visible window width a drag must cross to commit.
    pub swipe_threshold: f32,
    /// Release velocity that commits a swipe regardless of distance.
    pub velocity_threshold: f32,
    /// Multiplier applied to drag translation past the overstretch boundary.
    pub boundary_resistance: f32,
    /// Maximum drag overstretch, as a fraction of the window width.
    pub max_drag_fraction: f32,
    /// Maximum number of memoized day spans kept by the span cache.
    pub span_cache_capacity: usize,

    // Theming
    pub theme: Theme,
}

// Implement Default for Config manually to set defaults correctly
impl Default for Config {
    fn default() -> Self {
        Self {
            transition_duration_ms: 300,
            swipe_threshold: 0.25,
            velocity_threshold: 500.0,
            boundary_resistance: 0.3,
            max_drag_fraction: 0.8,
            span_cache_capacity: 50,
            theme: Theme::default(),
        }
    }
}

impl Config {
    // Helper to create a new instance with defaults
    fn new_default() -> Self {
        Self::default()
    }

    /// Rejects values the calendar unit cannot operate with.
    /// # Errors
    /// Returns `Error::InvalidCacheCapacity` if the cache capacity is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.span_cache_capacity == 0 {
            return Err(Error::InvalidCacheCapacity(self.span_cache_capacity));
        }
        Ok(())
    }
}

/// Determines the path to the configuration file.
/// Exposed at crate root as get_config_path_util
pub fn get_config_path() -> Result<PathBuf, Error> {
    let config_dir_override = std::env::var(CONFIG_ENV_VAR).ok();

    let config_dir_path = if let Some(path_str) = config_dir_override {
        let path = PathBuf::from(path_str);
        if !path.is_dir() {
            eprintln!( // Keep warning, as it's about env var setup
                    "Warning: Environment variable {} points to '{}', which is not a directory. Trying to create it.",
                    CONFIG_ENV_VAR,
                    path.display()
                 );
            fs::create_dir_all(&path)?;
        }
        path
    } else {
        let base_config_dir = dirs::config_dir().ok_or(Error::CannotDetermineConfigDir)?;
        base_config_dir.join(APP_CONFIG_DIR)
    };

    if !config_dir_path.exists() {
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the TOML file at the given path.
/// Exposed at crate root as load_config_util
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let config_content = fs::read_to_string(config_path)?;
        // Use serde(default) to handle missing fields when parsing
        let config: Config = toml::from_str(&config_content).map_err(Error::TomlParse)?;
        config.validate()?;
        Ok(config)
    } else {
        // Don't print here, let caller decide how to inform user
        let default_config = Config::new_default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

/// Saves the configuration to the TOML file.
/// Exposed at crate root as save_config_util
pub fn save(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let config_content = toml::to_string_pretty(config).map_err(Error::TomlSerialize)?;
    fs::write(config_path, config_content)?;
    Ok(())
}
