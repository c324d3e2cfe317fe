//! Integration tests for cliio

use cliio::{CliIo, InputChannel, OutputChannel, Platform, SharedBuffer};

pub mod capability_gating;
pub mod log_lines;
pub mod stream_scenarios;

/// Handle over in-memory channels on a POSIX platform.
///
/// `is_terminal` forces the output probe's answer; errors go to a sink.
pub fn posix_io(output: &SharedBuffer, is_terminal: bool, input: &'static [u8]) -> CliIo {
    CliIo::with_platform(
        InputChannel::from_reader(input),
        OutputChannel::forced(output.clone(), is_terminal),
        OutputChannel::from_writer(std::io::sink()),
        Platform::new("linux", None),
    )
}

#[test]
fn test_default_config_drives_default_log_styles() {
    let config = cliio_config::Config::default();
    assert_eq!(config.styles, cliio::LogStyles::default());
    assert!(config.validate().is_ok());
}
