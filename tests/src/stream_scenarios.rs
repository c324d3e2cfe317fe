//! End-to-end write, read and cursor scenarios

use crate::posix_io;
use cliio::control::{HIDE_CURSOR, LINE_TERMINATOR, SHOW_CURSOR};
use cliio::{CliIoError, InputChannel, SharedBuffer};

#[cfg(unix)]
#[test]
fn test_capable_write_bold_red() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, true, b"");
    assert!(io.is_output_ansi());
    io.write("hi", Some("red|none|bold")).unwrap();
    assert_eq!(out.contents(), b"\x1b[1;31mhi\x1b[0m");
}

#[test]
fn test_non_capable_write_bold_red() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"");
    io.write("hi", Some("red|none|bold")).unwrap();
    assert_eq!(out.contents(), b"hi");
}

#[test]
fn test_write_never_appends_newline() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"");
    io.write("a", None).unwrap().write("b", None).unwrap();
    assert_eq!(out.contents_string(), "ab");
}

#[cfg(unix)]
#[test]
fn test_hide_cursor_restored_once_after_many_hides() {
    let out = SharedBuffer::new();
    {
        let mut io = posix_io(&out, true, b"");
        assert!(io.is_output_ansi());
        for _ in 0..5 {
            io.hide_cursor().unwrap();
        }
        io.write("working", None).unwrap();
    }
    let written = out.contents_string();
    assert_eq!(written.matches(HIDE_CURSOR).count(), 5);
    assert_eq!(written.matches(SHOW_CURSOR).count(), 1);
    assert!(written.ends_with(&format!("working{SHOW_CURSOR}")));
}

#[cfg(unix)]
#[test]
fn test_redraw_frame() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, true, b"");
    assert!(io.is_output_ansi());
    io.write("10%", None)
        .unwrap()
        .carriage_return()
        .unwrap()
        .erase_line()
        .unwrap()
        .write("20%", Some("green"))
        .unwrap();
    assert_eq!(out.contents_string(), "10%\r\x1b[2K\x1b[32m20%\x1b[0m");
}

#[test]
fn test_prompt_session() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"yes\nno\n");
    assert_eq!(io.prompt("Continue? ", Some("yellow")).unwrap(), "yes");
    assert_eq!(io.prompt("Really? ", None).unwrap(), "no");
    assert_eq!(io.prompt("Again? ", None).unwrap(), "");
    assert_eq!(out.contents_string(), "Continue? Really? Again? ");
}

#[test]
fn test_input_reattachment() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"old\n");
    io.set_input(InputChannel::from_reader(&b"new\n"[..]));
    assert_eq!(io.read().unwrap(), "new");
}

#[test]
fn test_invalid_input_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = InputChannel::open(dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, CliIoError::InvalidResource { .. }));
}

#[cfg(unix)]
#[test]
fn test_error_channel_line() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let mut io = posix_io(&out, true, b"");
    io.set_errors(cliio::OutputChannel::forced(err.clone(), true));
    assert!(io.is_errors_ansi());
    io.write_error_line("bad", Some("light_red")).unwrap();
    assert!(out.is_empty());
    assert_eq!(
        err.contents_string(),
        format!("\x1b[91mbad\x1b[0m{LINE_TERMINATOR}")
    );
}

#[cfg(unix)]
#[test]
fn test_swapping_output_restores_cursor_on_old_terminal() {
    let terminal = SharedBuffer::new();
    let file = SharedBuffer::new();
    {
        let mut io = posix_io(&terminal, true, b"");
        assert!(io.is_output_ansi());
        io.hide_cursor().unwrap();

        io.set_output(cliio::OutputChannel::from_writer(file.clone()))
            .unwrap();
        assert!(!io.is_output_ansi());
        assert!(!io.is_cursor_hidden());

        io.write("data", None).unwrap().show_cursor().unwrap();
    }
    assert_eq!(terminal.contents_string(), format!("{HIDE_CURSOR}{SHOW_CURSOR}"));
    assert_eq!(file.contents_string(), "data");
}

#[cfg(unix)]
#[test]
fn test_swapping_between_terminals_restores_once() {
    let first = SharedBuffer::new();
    let second = SharedBuffer::new();
    {
        let mut io = posix_io(&first, true, b"");
        io.hide_cursor().unwrap();
        io.set_output(cliio::OutputChannel::forced(second.clone(), true))
            .unwrap();
        io.write("next", None).unwrap();
    }
    assert_eq!(first.contents_string().matches(SHOW_CURSOR).count(), 1);
    assert_eq!(second.contents_string(), "next");
}
