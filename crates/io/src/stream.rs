//! Styled, capability-gated I/O over three byte channels

use crate::capability::{self, Platform};
use crate::channel::{InputChannel, OutputChannel};
use crate::control;
use crate::logger::LogStyles;
use crate::style;
use cliio_core::Result;
use tracing::{debug, trace};

/// Terminal I/O handle over an input, an output and an error channel.
///
/// Each output-side channel is probed once when it is attached. Channels
/// that are not interactive terminals receive plain text, and cursor or
/// erase operations on them write nothing.
///
/// The handle is meant for a single owner; wrap it in a mutex to share it.
#[derive(Debug)]
pub struct CliIo {
    input: InputChannel,
    output: OutputChannel,
    errors: OutputChannel,
    platform: Platform,
    output_ansi: bool,
    errors_ansi: bool,
    cursor_hidden: bool,
    pub(crate) log_styles: LogStyles,
}

impl CliIo {
    /// Bind stdin, stdout and stderr
    pub fn new() -> Self {
        Self::with_channels(
            InputChannel::stdin(),
            OutputChannel::stdout(),
            OutputChannel::stderr(),
        )
    }

    /// Bind explicit channels on the current platform
    pub fn with_channels(input: InputChannel, output: OutputChannel, errors: OutputChannel) -> Self {
        Self::with_platform(input, output, errors, Platform::current())
    }

    /// Bind explicit channels, detecting capability against `platform`
    pub fn with_platform(
        input: InputChannel,
        output: OutputChannel,
        errors: OutputChannel,
        platform: Platform,
    ) -> Self {
        let output_ansi = capability::detect(&platform, output.probe());
        let errors_ansi = capability::detect(&platform, errors.probe());
        debug!(
            subsystem = "stream",
            os = %platform.os,
            output_ansi,
            errors_ansi,
            "Channels attached"
        );
        Self {
            input,
            output,
            errors,
            platform,
            output_ansi,
            errors_ansi,
            cursor_hidden: false,
            log_styles: LogStyles::default(),
        }
    }

    /// Replace the input channel
    pub fn set_input(&mut self, input: InputChannel) -> &mut Self {
        self.input = input;
        self
    }

    /// Replace the output channel and re-run capability detection for it.
    ///
    /// A cursor hidden on the old channel is shown there before the swap.
    pub fn set_output(&mut self, output: OutputChannel) -> Result<&mut Self> {
        self.restore_cursor()?;
        self.output.flush()?;
        self.output_ansi = capability::detect(&self.platform, output.probe());
        self.output = output;
        debug!(subsystem = "stream", output_ansi = self.output_ansi, "Output channel attached");
        Ok(self)
    }

    /// Replace the error channel and re-run capability detection for it
    pub fn set_errors(&mut self, errors: OutputChannel) -> &mut Self {
        self.errors_ansi = capability::detect(&self.platform, errors.probe());
        self.errors = errors;
        debug!(subsystem = "stream", errors_ansi = self.errors_ansi, "Error channel attached");
        self
    }

    /// Whether the output channel accepts escape codes
    pub fn is_output_ansi(&self) -> bool {
        self.output_ansi
    }

    /// Whether the error channel accepts escape codes
    pub fn is_errors_ansi(&self) -> bool {
        self.errors_ansi
    }

    /// Platform used for capability detection
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Whether a cursor restore is pending
    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Write `text`, styled with `style` when the output is a terminal
    pub fn write(&mut self, text: &str, style: Option<&str>) -> Result<&mut Self> {
        if self.output_ansi {
            let styled = style::resolve(text, style);
            self.write_raw(&styled)
        } else {
            self.write_raw(text)
        }
    }

    /// [`write`](Self::write) followed by an unstyled line terminator
    pub fn write_line(&mut self, text: &str, style: Option<&str>) -> Result<&mut Self> {
        self.write(text, style)?.write_raw(control::LINE_TERMINATOR)
    }

    /// Write `text` to the error channel, styled when it is a terminal
    pub fn write_error(&mut self, text: &str, style: Option<&str>) -> Result<&mut Self> {
        let bytes = if self.errors_ansi {
            style::resolve(text, style)
        } else {
            text.to_string()
        };
        trace!(subsystem = "stream", channel = "errors", bytes = bytes.len(), "write");
        self.errors.write_all(bytes.as_bytes())?;
        Ok(self)
    }

    /// [`write_error`](Self::write_error) followed by an unstyled line terminator
    pub fn write_error_line(&mut self, text: &str, style: Option<&str>) -> Result<&mut Self> {
        self.write_error(text, style)?
            .write_error(control::LINE_TERMINATOR, None)
    }

    /// Read one line from the input, without its terminator.
    ///
    /// Blocks until a line or end of stream; at end of stream whatever was
    /// read (possibly nothing) is returned.
    pub fn read(&mut self) -> Result<String> {
        let bytes = self.input.read_line()?;
        let line = String::from_utf8_lossy(&bytes);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line).to_string();
        trace!(subsystem = "stream", bytes = bytes.len(), "read");
        Ok(line)
    }

    /// Write `text`, flush, then read the answer
    pub fn prompt(&mut self, text: &str, style: Option<&str>) -> Result<String> {
        self.write(text, style)?.flush()?;
        self.read()
    }

    /// Flush the output and error channels
    pub fn flush(&mut self) -> Result<&mut Self> {
        self.output.flush()?;
        self.errors.flush()?;
        Ok(self)
    }

    /// Move the cursor up `rows` rows
    pub fn cursor_up(&mut self, rows: u32) -> Result<&mut Self> {
        self.control(&control::cursor_up(rows))
    }

    /// Move the cursor down `rows` rows
    pub fn cursor_down(&mut self, rows: u32) -> Result<&mut Self> {
        self.control(&control::cursor_down(rows))
    }

    /// Move the cursor forward `columns` columns
    pub fn cursor_forward(&mut self, columns: u32) -> Result<&mut Self> {
        self.control(&control::cursor_forward(columns))
    }

    /// Move the cursor backward `columns` columns
    pub fn cursor_backward(&mut self, columns: u32) -> Result<&mut Self> {
        self.control(&control::cursor_backward(columns))
    }

    /// Erase the entire current line
    pub fn erase_line(&mut self) -> Result<&mut Self> {
        self.control(control::ERASE_LINE)
    }

    /// Erase from the start of the line to the cursor
    pub fn erase_to_start(&mut self) -> Result<&mut Self> {
        self.control(control::ERASE_TO_START)
    }

    /// Erase from the cursor to the end of the line
    pub fn erase_to_end(&mut self) -> Result<&mut Self> {
        self.control(control::ERASE_TO_END)
    }

    /// Horizontal tab
    pub fn tab(&mut self) -> Result<&mut Self> {
        self.control(control::TAB)
    }

    /// Carriage return
    pub fn carriage_return(&mut self) -> Result<&mut Self> {
        self.control(control::CARRIAGE_RETURN)
    }

    /// Platform line terminator
    pub fn new_line(&mut self) -> Result<&mut Self> {
        self.control(control::LINE_TERMINATOR)
    }

    /// `columns` backspaces
    pub fn backspace(&mut self, columns: u32) -> Result<&mut Self> {
        self.control(&control::backspace(columns))
    }

    /// Hide the cursor until [`show_cursor`](Self::show_cursor) or drop.
    ///
    /// The restore sequence is written once no matter how often this is
    /// called. It is not written if the process is killed by a signal or
    /// leaves through `std::process::exit` without dropping this handle.
    pub fn hide_cursor(&mut self) -> Result<&mut Self> {
        if !self.output_ansi {
            return Ok(self);
        }
        if !self.cursor_hidden {
            trace!(subsystem = "stream", "Cursor restore armed");
            self.cursor_hidden = true;
        }
        self.write_raw(control::HIDE_CURSOR)
    }

    /// Show the cursor and disarm the pending restore
    pub fn show_cursor(&mut self) -> Result<&mut Self> {
        if !self.output_ansi {
            return Ok(self);
        }
        self.cursor_hidden = false;
        self.write_raw(control::SHOW_CURSOR)
    }

    fn restore_cursor(&mut self) -> Result<&mut Self> {
        if !self.cursor_hidden {
            return Ok(self);
        }
        self.cursor_hidden = false;
        if !self.output_ansi {
            return Ok(self);
        }
        trace!(subsystem = "stream", "Cursor restored");
        self.write_raw(control::SHOW_CURSOR)
    }

    fn control(&mut self, sequence: &str) -> Result<&mut Self> {
        if !self.output_ansi {
            return Ok(self);
        }
        self.write_raw(sequence)
    }

    fn write_raw(&mut self, text: &str) -> Result<&mut Self> {
        trace!(subsystem = "stream", channel = "output", bytes = text.len(), "write");
        self.output.write_all(text.as_bytes())?;
        Ok(self)
    }
}

impl Default for CliIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliIo {
    fn drop(&mut self) {
        if let Err(e) = self.restore_cursor() {
            debug!(subsystem = "stream", error = %e, "Failed to restore cursor");
        }
        let _ = self.output.flush();
        let _ = self.errors.flush();
    }
}
