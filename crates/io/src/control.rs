//! Cursor, erase and whitespace control sequences
//!
//! Pure string builders. Whether a sequence may be emitted is decided by
//! the stream that writes it.

/// Hide the cursor
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the cursor
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Erase the entire current line
pub const ERASE_LINE: &str = "\x1b[2K";
/// Erase from the start of the line to the cursor
pub const ERASE_TO_START: &str = "\x1b[1K";
/// Erase from the cursor to the end of the line
pub const ERASE_TO_END: &str = "\x1b[K";
/// Horizontal tab
pub const TAB: &str = "\t";
/// Carriage return
pub const CARRIAGE_RETURN: &str = "\r";
/// Backspace
pub const BACKSPACE: char = '\x08';

/// Platform line terminator
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Platform line terminator
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

fn csi(count: u32, command: char) -> String {
    format!("\x1b[{count}{command}")
}

/// Move the cursor up `rows` rows
pub fn cursor_up(rows: u32) -> String {
    csi(rows, 'A')
}

/// Move the cursor down `rows` rows
pub fn cursor_down(rows: u32) -> String {
    csi(rows, 'B')
}

/// Move the cursor forward `columns` columns
pub fn cursor_forward(columns: u32) -> String {
    csi(columns, 'C')
}

/// Move the cursor backward `columns` columns
pub fn cursor_backward(columns: u32) -> String {
    csi(columns, 'D')
}

/// `columns` backspace characters
pub fn backspace(columns: u32) -> String {
    std::iter::repeat(BACKSPACE).take(columns as usize).collect()
}
