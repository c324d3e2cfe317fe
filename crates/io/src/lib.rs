//! cliio
//!
//! Terminal I/O over three byte channels: ANSI styling, cursor and erase
//! control, and timestamped log lines. Escape codes are only emitted to
//! channels detected as interactive terminals on a POSIX-like platform;
//! everything else receives plain text.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod capability;
pub mod channel;
pub mod control;
pub mod logger;
pub mod stream;
pub mod style;

pub use capability::{ForcedProbe, Platform, TerminalProbe};
pub use channel::{InputChannel, OutputChannel, SharedBuffer};
pub use cliio_core::{CliIoError, Result};
pub use logger::{format_timestamp, LogLevel, LogStyles};
pub use stream::CliIo;
pub use style::{resolve, Attribute, Color, StyleDescriptor};
