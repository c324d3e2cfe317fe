//! Byte channels bound to a [`CliIo`](crate::CliIo)
//!
//! Output channels carry an optional terminal probe alongside the sink. The
//! probe is consulted once, when the channel is attached.

use crate::capability::{ForcedProbe, TerminalProbe};
use cliio_core::{CliIoError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Source of input lines
pub struct InputChannel {
    reader: Box<dyn BufRead + Send>,
}

impl InputChannel {
    /// The process's standard input
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin())
    }

    /// Read from any byte source
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
        }
    }

    /// Open a path (a file, FIFO or device) for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open_checked(path.as_ref(), OpenOptions::new().read(true))?;
        Ok(Self::from_reader(file))
    }

    /// Read one line including its terminator; empty at end of stream
    pub(crate) fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        Ok(line)
    }
}

impl std::fmt::Debug for InputChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputChannel").finish_non_exhaustive()
    }
}

/// Destination for output or error bytes
pub struct OutputChannel {
    sink: Box<dyn Write + Send>,
    probe: Option<Box<dyn TerminalProbe>>,
}

impl OutputChannel {
    /// The process's standard output
    pub fn stdout() -> Self {
        Self::with_probe(io::stdout(), io::stdout())
    }

    /// The process's standard error
    pub fn stderr() -> Self {
        Self::with_probe(io::stderr(), io::stderr())
    }

    /// Write to an arbitrary sink that is never treated as a terminal
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Box::new(writer),
            probe: None,
        }
    }

    /// Write to `writer`, asking `probe` whether it is a terminal
    pub fn with_probe<W, P>(writer: W, probe: P) -> Self
    where
        W: Write + Send + 'static,
        P: TerminalProbe + 'static,
    {
        Self {
            sink: Box::new(writer),
            probe: Some(Box::new(probe)),
        }
    }

    /// Write to `writer` with a fixed terminal answer
    pub fn forced<W: Write + Send + 'static>(writer: W, is_terminal: bool) -> Self {
        Self::with_probe(writer, ForcedProbe(is_terminal))
    }

    /// Write to an open file; the file itself is probed
    pub fn file(file: File) -> Result<Self> {
        let probe = file.try_clone()?;
        Ok(Self::with_probe(file, probe))
    }

    /// Open a path (a file, FIFO or device such as `/dev/tty`) for appending
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open_checked(
            path.as_ref(),
            OpenOptions::new().append(true).create(true),
        )?;
        Self::file(file)
    }

    pub(crate) fn probe(&self) -> Option<&dyn TerminalProbe> {
        self.probe.as_deref()
    }

    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl std::fmt::Debug for OutputChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputChannel")
            .field("has_probe", &self.probe.is_some())
            .finish_non_exhaustive()
    }
}

fn open_checked(path: &Path, options: &OpenOptions) -> Result<File> {
    let resource = path.display().to_string();
    let file = options.open(path).map_err(|e| {
        debug!(subsystem = "channel", path = %resource, error = %e, "Failed to open channel");
        CliIoError::invalid_resource(resource.clone(), e)
    })?;
    let metadata = file
        .metadata()
        .map_err(|e| CliIoError::invalid_resource(resource.clone(), e))?;
    if metadata.is_dir() {
        return Err(CliIoError::invalid_resource(resource, "is a directory"));
    }
    Ok(file)
}

/// Clonable in-memory sink; every clone appends to the same bytes
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
