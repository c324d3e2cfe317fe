//! Timestamped log lines

use crate::posix_io;
use chrono::{Local, TimeZone};
use cliio::{LogLevel, SharedBuffer};

/// Check `DD.MM.YYYY HH:MM:SS.mmm: ` at the start of `line`
fn has_timestamp_prefix(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 25 {
        return false;
    }
    let digit_positions = [0, 1, 3, 4, 6, 7, 8, 9, 11, 12, 14, 15, 17, 18, 20, 21, 22];
    let literals = [(2, b'.'), (5, b'.'), (10, b' '), (13, b':'), (16, b':'), (19, b'.'), (23, b':'), (24, b' ')];
    digit_positions.iter().all(|&i| bytes[i].is_ascii_digit())
        && literals.iter().all(|&(i, c)| bytes[i] == c)
}

#[test]
fn test_log_prefix_shape() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"");
    io.log("m", LogLevel::Default).unwrap();
    let line = out.contents_string();
    assert!(has_timestamp_prefix(&line), "unexpected log line: {line:?}");
    assert!(line.ends_with(": m\n"));
}

#[test]
fn test_log_at_fixed_time() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, false, b"");
    let when = Local
        .with_ymd_and_hms(2023, 12, 31, 23, 59, 58)
        .single()
        .unwrap();
    io.log_at("last call", LogLevel::Warn, &when).unwrap();
    assert_eq!(out.contents_string(), "31.12.2023 23:59:58.000: last call\n");
}

#[cfg(unix)]
#[test]
fn test_error_log_styled_on_terminal() {
    let out = SharedBuffer::new();
    let mut io = posix_io(&out, true, b"");
    assert!(io.is_output_ansi());
    io.log("disk full", LogLevel::Error).unwrap();
    let line = out.contents_string();
    assert!(line.starts_with("\x1b[90m"));
    assert!(line.ends_with("\x1b[0m: \x1b[41;1;97mdisk full\x1b[0m\n"));
}
