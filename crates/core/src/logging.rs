//! cliio diagnostic logging
//!
//! Internal diagnostics go through `tracing`. They are separate from the
//! timestamped user-facing log lines written by `CliIo::log`, and they always
//! go to stderr so they never interleave with application output on stdout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "CLIIO_LOG";

/// Diagnostic logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global level (applies when no module-specific level is set)
    pub global_level: LogLevel,
    /// Whether to include the tracing target in each record
    pub include_target: bool,
    /// Whether to use ANSI colors in diagnostic output (when not JSON)
    pub use_colors: bool,
    /// Whether to emit JSON records instead of human-readable lines
    pub json_format: bool,
    /// Per-module level overrides, keyed by tracing target
    pub module_levels: HashMap<String, LogLevel>,
}

/// Diagnostic log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show all logs including trace
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default)
    Warn,
    /// Show only errors
    Error,
    /// Disable logging for this module
    Off,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: LogLevel::Warn,
            include_target: true,
            use_colors: false,
            json_format: false,
            module_levels: HashMap::new(),
        }
    }
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl From<LogLevel> for Option<Level> {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Some(Level::TRACE),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Off => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Module names for per-module logging configuration
pub mod modules {
    /// Core module logging identifier
    pub const CORE: &str = "cliio_core";
    /// Stream/formatting library logging identifier
    pub const IO: &str = "cliio";
    /// Configuration module logging identifier
    pub const CONFIG: &str = "cliio_config";
    /// CLI module logging identifier
    pub const CLI: &str = "cliio_cli";
}

/// Initialize the diagnostic logging system with the given configuration
pub fn init_logging(config: &LoggingConfig) -> crate::Result<()> {
    let env_filter = build_env_filter(config);
    let registry = Registry::default().with(env_filter);

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_timer(ChronoLocal::rfc_3339());

        registry.with(json_layer).try_init().map_err(|e| {
            crate::CliIoError::Configuration(format!("Failed to initialize JSON logging: {}", e))
        })?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_ansi(config.use_colors)
            .with_timer(ChronoLocal::rfc_3339());

        registry.with(fmt_layer).try_init().map_err(|e| {
            crate::CliIoError::Configuration(format!("Failed to initialize logging: {}", e))
        })?;
    }

    Ok(())
}

/// Build an environment filter from the logging configuration
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::new(format!("cliio={}", config.global_level.as_directive()));

    for (module, level) in &config.module_levels {
        match format!("{}={}", module, level.as_directive()).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => {
                tracing::warn!(module = module.as_str(), error = %e, "Ignoring invalid log directive");
            }
        }
    }

    if let Ok(env_filter) = std::env::var(LOG_ENV_VAR) {
        for part in env_filter.split(',').filter(|p| !p.trim().is_empty()) {
            if let Ok(directive) = part.trim().parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    filter
}

/// Verbose configuration used by `--verbose`
pub fn dev_config() -> LoggingConfig {
    let mut config = LoggingConfig::default();
    config.global_level = LogLevel::Debug;
    config.use_colors = true;
    config
        .module_levels
        .insert(modules::IO.to_string(), LogLevel::Trace);
    config
}

/// Configuration that only reports errors
pub fn quiet_config() -> LoggingConfig {
    LoggingConfig {
        global_level: LogLevel::Error,
        include_target: false,
        ..LoggingConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel::Off);
        assert_eq!(LogLevel::from_str("none").unwrap(), LogLevel::Off);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Off.to_string(), "off");
    }

    #[test]
    fn test_off_has_no_tracing_level() {
        let level: Option<Level> = LogLevel::Off.into();
        assert!(level.is_none());
        let level: Option<Level> = LogLevel::Error.into();
        assert_eq!(level, Some(Level::ERROR));
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.global_level, LogLevel::Warn);
        assert!(config.module_levels.is_empty());
        assert!(!config.json_format);
    }

    #[test]
    fn test_preset_configs() {
        let dev = dev_config();
        assert_eq!(dev.global_level, LogLevel::Debug);
        assert_eq!(dev.module_levels.get(modules::IO), Some(&LogLevel::Trace));

        let quiet = quiet_config();
        assert_eq!(quiet.global_level, LogLevel::Error);
        assert!(!quiet.include_target);
    }

    #[test]
    fn test_config_serialization() {
        let config = dev_config();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"global_level\":\"debug\""));

        let parsed: LoggingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.global_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: LoggingConfig = serde_json::from_str(r#"{"json_format":true}"#).unwrap();
        assert!(parsed.json_format);
        assert_eq!(parsed.global_level, LogLevel::Warn);
    }

    #[test]
    fn test_env_filter_builds_with_module_overrides() {
        let mut config = LoggingConfig::default();
        config
            .module_levels
            .insert(modules::CONFIG.to_string(), LogLevel::Off);
        let filter = build_env_filter(&config);
        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("cliio=warn"));
        assert!(rendered.contains("cliio_config=off"));
    }
}
