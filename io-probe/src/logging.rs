//! Stream decorator that traces every read and write as hex.
//!
//! Each call produces one line on the log sink:
//!
//! ```text
//! [name] [WRITE] 48656c6c6f
//! [name] [READ] 48656c6c6f
//! ```
//!
//! The `[name] ` prefix is present only when a non-empty name is set. Hex is
//! lowercase, two digits per byte, followed by a newline.
//!
//! # Read lines show the whole destination buffer
//!
//! A `[READ]` line dumps the *entire* buffer passed to `read`, not only the
//! `n` bytes the call filled in. If the caller reuses a buffer, stale bytes
//! past `n` appear in the trace. Tests asserting on read traces should size
//! their buffers to the expected read.

use alloc::string::String;
use core::fmt;
use embedded_io::{ErrorType, Read, Write};

use crate::hex::Hex;

/// Log sink wrapping the process standard error stream.
#[cfg(feature = "std")]
pub type StderrSink = embedded_io_adapters::std::FromStd<std::io::Stderr>;

/// Decorator around a read/write stream that logs all traffic.
///
/// The delegate does the actual data transfer; `LoggingStream` only observes.
/// Results and errors from the delegate are returned unchanged.
///
/// Both the delegate and the sink may be owned values or `&mut` borrows.
///
/// # Type Parameters
///
/// - `D`: the wrapped stream
/// - `W`: the log sink
pub struct LoggingStream<D, W> {
    inner: D,
    sink: W,
    name: String,
}

#[cfg(feature = "std")]
impl<D> LoggingStream<D, StderrSink> {
    /// Wrap `inner`, logging to standard error.
    pub fn new(inner: D) -> Self {
        Self::with_sink(inner, embedded_io_adapters::std::FromStd::new(std::io::stderr()))
    }
}

impl<D, W> LoggingStream<D, W> {
    /// Wrap `inner`, logging to `sink`.
    pub fn with_sink(inner: D, sink: W) -> Self {
        Self {
            inner,
            sink,
            name: String::new(),
        }
    }

    /// Replace the log sink.
    pub fn set_log_sink(&mut self, sink: W) {
        self.sink = sink;
    }

    /// Move to a log sink of a different type, keeping delegate and name.
    pub fn log_to<W2>(self, sink: W2) -> LoggingStream<D, W2> {
        LoggingStream {
            inner: self.inner,
            sink,
            name: self.name,
        }
    }

    /// Set the name prefixed to every log line. An empty name disables the prefix.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The current name, if one is set.
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    /// Get a reference to the wrapped stream.
    pub fn get_ref(&self) -> &D {
        &self.inner
    }

    /// Get a mutable reference to the wrapped stream.
    ///
    /// Traffic through this reference is not logged.
    pub fn get_mut(&mut self) -> &mut D {
        &mut self.inner
    }

    /// Get a reference to the log sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the wrapper and return the wrapped stream.
    pub fn into_inner(self) -> D {
        self.inner
    }

    /// Consume the wrapper and return the wrapped stream and the log sink.
    pub fn into_parts(self) -> (D, W) {
        (self.inner, self.sink)
    }
}

impl<D, W: Write> LoggingStream<D, W> {
    /// Emit one trace line. Sink failures never reach the caller.
    pub(crate) fn trace(&mut self, op: &str, bytes: &[u8]) {
        let line = Line {
            name: &self.name,
            op,
            bytes,
        };
        if write!(self.sink, "{}", line).is_err() {
            #[cfg(feature = "log")]
            log::warn!("LoggingStream: failed to write trace line to log sink");
        }
    }
}

// A zero-length read into a non-empty buffer is end of stream
pub(crate) fn is_end_of_stream(buf: &[u8], n: usize) -> bool {
    n == 0 && !buf.is_empty()
}

struct Line<'a> {
    name: &'a str,
    op: &'a str,
    bytes: &'a [u8],
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            write!(f, "[{}] ", self.name)?;
        }
        writeln!(f, "[{}] {}", self.op, Hex(self.bytes))
    }
}

impl<D: ErrorType, W> ErrorType for LoggingStream<D, W> {
    type Error = D::Error;
}

impl<D: Read, W: Write> Read for LoggingStream<D, W> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.inner.read(buf)?;
        if !is_end_of_stream(buf, n) {
            self.trace("READ", buf);
        }
        Ok(n)
    }
}

impl<D: Write, W: Write> Write for LoggingStream<D, W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.trace("WRITE", buf);
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}
