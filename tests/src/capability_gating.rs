//! Capability detection feeding the write path

use crate::posix_io;
use cliio::{CliIo, InputChannel, OutputChannel, Platform, SharedBuffer, TerminalProbe};
use std::io;

struct FailingProbe;

impl TerminalProbe for FailingProbe {
    fn probe_terminal(&self) -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::Other, "bad descriptor"))
    }
}

fn every_control(io: &mut CliIo) -> cliio::Result<()> {
    io.cursor_up(1)?
        .cursor_down(1)?
        .cursor_forward(1)?
        .cursor_backward(1)?
        .erase_line()?
        .erase_to_start()?
        .erase_to_end()?
        .tab()?
        .carriage_return()?
        .new_line()?
        .backspace(3)?
        .hide_cursor()?
        .show_cursor()?;
    Ok(())
}

#[test]
fn test_failing_probe_degrades_to_plain_text() {
    let out = SharedBuffer::new();
    let mut io = CliIo::with_platform(
        InputChannel::from_reader(io::empty()),
        OutputChannel::with_probe(out.clone(), FailingProbe),
        OutputChannel::with_probe(io::sink(), FailingProbe),
        Platform::new("linux", None),
    );
    assert!(!io.is_output_ansi());
    assert!(!io.is_errors_ansi());

    io.write("hi", Some("red|none|bold")).unwrap();
    every_control(&mut io).unwrap();
    assert_eq!(out.contents_string(), "hi");
}

#[test]
fn test_windows_env_disables_even_forced_terminal() {
    let out = SharedBuffer::new();
    let mut io = CliIo::with_platform(
        InputChannel::from_reader(io::empty()),
        OutputChannel::forced(out.clone(), true),
        OutputChannel::from_writer(io::sink()),
        Platform::new("linux", Some("Windows_NT".to_string())),
    );
    assert!(!io.is_output_ansi());
    io.write_line("plain", Some("green")).unwrap();
    every_control(&mut io).unwrap();
    assert_eq!(out.contents_string(), format!("plain{}", cliio::control::LINE_TERMINATOR));
}

#[test]
fn test_non_device_writer_is_never_capable() {
    let out = SharedBuffer::new();
    let io = CliIo::with_channels(
        InputChannel::from_reader(io::empty()),
        OutputChannel::from_writer(out.clone()),
        OutputChannel::from_writer(io::sink()),
    );
    assert!(!io.is_output_ansi());
}

#[test]
fn test_file_channel_is_not_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    {
        let mut io = CliIo::with_platform(
            InputChannel::from_reader(io::empty()),
            OutputChannel::open(&path).unwrap(),
            OutputChannel::from_writer(io::sink()),
            Platform::new("linux", None),
        );
        assert!(!io.is_output_ansi());
        io.write("saved", Some("white|red|bold")).unwrap().erase_line().unwrap();
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved");
}

#[test]
fn test_every_control_is_noop_and_chains() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"");
    every_control(&mut io).unwrap();
    assert!(out.is_empty());
}
