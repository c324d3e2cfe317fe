//! cliio configuration
//!
//! TOML configuration for diagnostic logging and log-line styles.

#![warn(missing_docs)]
#![deny(unsafe_code)]

use cliio::{LogStyles, StyleDescriptor};
use cliio_core::logging::{LogLevel, LoggingConfig};
use cliio_core::CliIoError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Main configuration structure for cliio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagnostic logging configuration
    pub logging: LoggingConfig,
    /// Styles applied to user-facing log lines
    pub styles: LogStyles,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    #[instrument(name = "config_load", skip(path))]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> cliio_core::Result<Self> {
        let path = path.as_ref();
        info!(subsystem = "config", config_file = ?path, "Loading configuration from file");

        let content = std::fs::read_to_string(path).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to read configuration file"
            );
            CliIoError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to parse configuration file"
            );
            CliIoError::Configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            subsystem = "config",
            config_file = ?path,
            logging_level = ?config.logging.global_level,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to file
    #[instrument(name = "config_save", skip(self, path))]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> cliio_core::Result<()> {
        let path = path.as_ref();
        info!(subsystem = "config", config_file = ?path, "Saving configuration to file");

        let content = toml::to_string_pretty(self).map_err(|e| {
            error!(subsystem = "config", error = %e, "Failed to serialize configuration");
            CliIoError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to write configuration file"
            );
            CliIoError::Configuration(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("cliio")
        } else {
            warn!(
                subsystem = "config",
                "No standard config directory found, using current directory"
            );
            PathBuf::from(".")
        };

        config_dir.join("config.toml")
    }

    /// Load the default configuration file, falling back to defaults
    #[instrument(name = "config_load_or_default")]
    pub fn load_or_default() -> Self {
        let path = Self::default_config_path();
        if !path.exists() {
            debug!(
                subsystem = "config",
                config_file = ?path,
                "Configuration file does not exist, using defaults"
            );
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    subsystem = "config",
                    config_file = ?path,
                    error = %e,
                    "Failed to load config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Update diagnostic logging level for a specific module
    pub fn update_log_level(&mut self, module: &str, level: LogLevel) {
        debug!(subsystem = "config", module, level = ?level, "Updating log level for module");
        self.logging.module_levels.insert(module.to_string(), level);
    }

    /// Validate configuration values.
    ///
    /// Unlike runtime styling, which ignores unknown names, a configured
    /// style must only use names from the color and attribute tables.
    #[instrument(name = "config_validate", skip(self))]
    pub fn validate(&self) -> cliio_core::Result<()> {
        for (field, descriptor) in self.styles.descriptors() {
            if descriptor.split('|').count() > 3 {
                error!(subsystem = "config", field, descriptor, "Too many style segments");
                return Err(CliIoError::Configuration(format!(
                    "Style '{}' for '{}' has more than three segments",
                    descriptor, field
                )));
            }

            let unknown = StyleDescriptor::unknown_names(descriptor);
            if !unknown.is_empty() {
                error!(subsystem = "config", field, descriptor, ?unknown, "Unknown style names");
                return Err(CliIoError::Configuration(format!(
                    "Style '{}' for '{}' uses unknown names: {}",
                    descriptor,
                    field,
                    unknown.join(", ")
                )));
            }
        }

        debug!(subsystem = "config", "Configuration validation passed");
        Ok(())
    }
}
