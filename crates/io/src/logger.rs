//! Timestamped log lines on the output channel

use crate::stream::CliIo;
use chrono::{DateTime, Local, TimeZone};
use cliio_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `DD.MM.YYYY HH:MM:SS.mmm`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Severity of a user-facing log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Unstyled message
    #[default]
    Default,
    /// Warning
    Warn,
    /// Error
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "info" => Ok(LogLevel::Default),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Default => write!(f, "default"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Style descriptors used for each part of a log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogStyles {
    /// Style of the timestamp prefix
    pub timestamp: Option<String>,
    /// Message style for [`LogLevel::Default`]
    pub default: Option<String>,
    /// Message style for [`LogLevel::Warn`]
    pub warn: Option<String>,
    /// Message style for [`LogLevel::Error`]
    pub error: Option<String>,
}

impl Default for LogStyles {
    fn default() -> Self {
        Self {
            timestamp: Some("dark_gray".to_string()),
            default: None,
            warn: Some("yellow".to_string()),
            error: Some("white|red|bold".to_string()),
        }
    }
}

impl LogStyles {
    /// Message style for `level`
    pub fn for_level(&self, level: LogLevel) -> Option<&str> {
        match level {
            LogLevel::Default => self.default.as_deref(),
            LogLevel::Warn => self.warn.as_deref(),
            LogLevel::Error => self.error.as_deref(),
        }
    }

    /// Every configured descriptor, labelled by field name
    pub fn descriptors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("timestamp", self.timestamp.as_deref()),
            ("default", self.default.as_deref()),
            ("warn", self.warn.as_deref()),
            ("error", self.error.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, style)| style.map(|style| (name, style)))
    }
}

/// Format a timestamp the way log lines show it
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

impl CliIo {
    /// Styles used by [`log`](Self::log)
    pub fn log_styles(&self) -> &LogStyles {
        &self.log_styles
    }

    /// Replace the styles used by [`log`](Self::log)
    pub fn set_log_styles(&mut self, styles: LogStyles) -> &mut Self {
        self.log_styles = styles;
        self
    }

    /// Write `timestamp: message` and a newline, stamped with the local time
    pub fn log(&mut self, message: &str, level: LogLevel) -> Result<&mut Self> {
        self.log_at(message, level, &Local::now())
    }

    /// [`log`](Self::log) with an explicit timestamp
    pub fn log_at<Tz>(
        &mut self,
        message: &str,
        level: LogLevel,
        timestamp: &DateTime<Tz>,
    ) -> Result<&mut Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let styles = self.log_styles.clone();
        self.write(&format_timestamp(timestamp), styles.timestamp.as_deref())?
            .write(": ", None)?
            .write(message, styles.for_level(level))?
            .write("\n", None)
    }
}
