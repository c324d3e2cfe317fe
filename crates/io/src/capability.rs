//! Terminal capability detection
//!
//! A channel accepts ANSI escape codes only when the platform is POSIX-like,
//! a terminal probe exists for it, and that probe answers yes. Anything else,
//! including a probe that fails, resolves to "not capable".

use std::io::{self, IsTerminal};
use tracing::{debug, trace};

/// Identity of the running platform, as far as detection cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// OS identifier, e.g. `linux` or `windows`
    pub os: String,
    /// Value of the `OS` environment variable, if set
    pub os_env: Option<String>,
}

impl Platform {
    /// Describe the platform this process is running on
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            os_env: std::env::var("OS").ok(),
        }
    }

    /// Construct a platform description explicitly
    pub fn new(os: impl Into<String>, os_env: Option<String>) -> Self {
        Self {
            os: os.into(),
            os_env,
        }
    }

    /// Whether this is a Windows-family platform
    pub fn is_windows(&self) -> bool {
        starts_with_ignore_case(&self.os, "win")
            || self
                .os_env
                .as_deref()
                .is_some_and(|value| starts_with_ignore_case(value, "windows"))
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Something that can be asked whether it is an interactive terminal
pub trait TerminalProbe: Send {
    /// Probe the underlying device
    fn probe_terminal(&self) -> io::Result<bool>;
}

impl TerminalProbe for io::Stdin {
    fn probe_terminal(&self) -> io::Result<bool> {
        Ok(self.is_terminal())
    }
}

impl TerminalProbe for io::Stdout {
    fn probe_terminal(&self) -> io::Result<bool> {
        Ok(self.is_terminal())
    }
}

impl TerminalProbe for io::Stderr {
    fn probe_terminal(&self) -> io::Result<bool> {
        Ok(self.is_terminal())
    }
}

impl TerminalProbe for std::fs::File {
    fn probe_terminal(&self) -> io::Result<bool> {
        Ok(self.is_terminal())
    }
}

/// Probe with a fixed answer, for embedders that already know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedProbe(pub bool);

impl TerminalProbe for ForcedProbe {
    fn probe_terminal(&self) -> io::Result<bool> {
        Ok(self.0)
    }
}

/// Whether the host can run a terminal probe at all
const fn probe_supported() -> bool {
    cfg!(unix)
}

/// Decide whether a channel may receive ANSI escape codes.
///
/// Never fails: Windows, a missing probe and a probe error all yield `false`.
pub fn detect(platform: &Platform, probe: Option<&dyn TerminalProbe>) -> bool {
    if platform.is_windows() {
        debug!(subsystem = "capability", os = %platform.os, "Windows platform, ANSI disabled");
        return false;
    }

    let Some(probe) = probe else {
        trace!(subsystem = "capability", "No terminal probe for channel");
        return false;
    };

    if !probe_supported() {
        trace!(subsystem = "capability", os = %platform.os, "Terminal probe unsupported");
        return false;
    }

    match probe.probe_terminal() {
        Ok(is_tty) => {
            trace!(subsystem = "capability", is_tty, "Terminal probe answered");
            is_tty
        }
        Err(e) => {
            debug!(subsystem = "capability", error = %e, "Terminal probe failed, ANSI disabled");
            false
        }
    }
}
