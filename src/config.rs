//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::editor::{SessionContext, WritingGoals, DAILY_WORD_GOAL, WORDS_PER_MINUTE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Writing goal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_daily_word_goal")]
    pub daily_word_goal: u32,

    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

fn default_daily_word_goal() -> u32 {
    DAILY_WORD_GOAL
}

fn default_words_per_minute() -> u32 {
    WORDS_PER_MINUTE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            daily_word_goal: default_daily_word_goal(),
            words_per_minute: default_words_per_minute(),
        }
    }
}

/// Theme preferences
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("penwise").join("config.toml")),
            Some(PathBuf::from("./penwise.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First candidate that exists and loads wins; otherwise defaults plus
    /// environment, or plain defaults if the environment is invalid
    fn load_first(config_paths: &[PathBuf]) -> Self {
        for path in config_paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        let config = Self::from_env();
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring environment overrides: {}", e);
                Config::default()
            }
        }
    }

    /// Reject goals that would make the derived metrics meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.writing_goals().map(|_| ())
    }

    /// Writing goals described by the `[editor]` section
    pub fn writing_goals(&self) -> Result<WritingGoals, ConfigError> {
        WritingGoals::new(self.editor.daily_word_goal, self.editor.words_per_minute)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Preferences handed to each new editor session
    pub fn session_context(&self) -> Result<SessionContext, ConfigError> {
        Ok(SessionContext::new(
            self.appearance.dark_mode,
            self.writing_goals()?,
        ))
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Editor overrides
        if let Ok(goal) = std::env::var("PENWISE_DAILY_WORD_GOAL") {
            if let Ok(g) = goal.parse() {
                self.editor.daily_word_goal = g;
            }
        }
        if let Ok(wpm) = std::env::var("PENWISE_WORDS_PER_MINUTE") {
            if let Ok(w) = wpm.parse() {
                self.editor.words_per_minute = w;
            }
        }

        // Appearance overrides
        if let Ok(dark) = std::env::var("PENWISE_DARK_MODE") {
            if let Some(d) = parse_flag(&dark) {
                self.appearance.dark_mode = d;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("PENWISE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PENWISE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Penwise Configuration
#
# Environment variables override these settings:
# - PENWISE_DAILY_WORD_GOAL
# - PENWISE_WORDS_PER_MINUTE
# - PENWISE_DARK_MODE
# - PENWISE_LOG_LEVEL
# - PENWISE_LOG_FORMAT

[editor]
# Words per day counted as 100% goal progress
daily_word_goal = 500

# Reading speed used for the reading-time estimate
words_per_minute = 200

[appearance]
# Dark theme for sessions opened from the CLI
dark_mode = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/penwise/penwise.log"
"#
    .to_string()
}
