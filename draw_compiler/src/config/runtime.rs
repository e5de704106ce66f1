// RUNTIME PREFERENCES (User Experience)

use crate::render::TreeStyle;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Errors raised while loading a runtime configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Io { .. } => crate::logging::codes::config::CONFIG_READ_FAILED,
            ConfigError::Parse(_) => crate::logging::codes::config::CONFIG_PARSE_FAILED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-category token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to emit a debug event for every token produced
    pub log_token_details: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_token_details: env::var(env_vars::LEXICAL_LOG_TOKEN_DETAILS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    /// Layout used when printing parse trees
    pub tree_style: TreeStyle,

    /// Whether to print the derivation trace for accepted input
    pub show_derivation: bool,

    /// Whether to print the parse tree for accepted input
    pub show_tree: bool,

    /// Whether to print the token sequence before parsing
    pub show_tokens: bool,

    /// Whether to underline the offending input under each error
    pub show_error_context: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            tree_style: env::var(env_vars::DISPLAY_TREE_STYLE)
                .ok()
                .and_then(|v| TreeStyle::parse(&v))
                .unwrap_or(TreeStyle::Centered),
            show_derivation: env::var(env_vars::DISPLAY_SHOW_DERIVATION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            show_tree: env::var(env_vars::DISPLAY_SHOW_TREE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            show_tokens: env::var(env_vars::DISPLAY_SHOW_TOKENS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            show_error_context: env::var(env_vars::DISPLAY_SHOW_ERROR_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to include timing information in success events
    pub log_performance_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            log_performance_events: env::var(env_vars::LOGGING_LOG_PERFORMANCE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub display: DisplayPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a configuration document; missing tables and keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "DRAW_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_TOKEN_DETAILS: &str = "DRAW_LEXICAL_LOG_TOKEN_DETAILS";

    // Display
    pub const DISPLAY_TREE_STYLE: &str = "DRAW_DISPLAY_TREE_STYLE";
    pub const DISPLAY_SHOW_DERIVATION: &str = "DRAW_DISPLAY_SHOW_DERIVATION";
    pub const DISPLAY_SHOW_TREE: &str = "DRAW_DISPLAY_SHOW_TREE";
    pub const DISPLAY_SHOW_TOKENS: &str = "DRAW_DISPLAY_SHOW_TOKENS";
    pub const DISPLAY_SHOW_ERROR_CONTEXT: &str = "DRAW_DISPLAY_SHOW_ERROR_CONTEXT";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "DRAW_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "DRAW_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "DRAW_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "DRAW_LOGGING_LOG_PERFORMANCE";
}
