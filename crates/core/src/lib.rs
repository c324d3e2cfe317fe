//! cliio Core
//!
//! Error taxonomy and diagnostic logging shared by the cliio crates.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod logging;

pub use error::CliIoError;

/// Core result type for cliio operations
pub type Result<T> = std::result::Result<T, CliIoError>;

/// Version information for cliio
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
