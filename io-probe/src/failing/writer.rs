//! Write-only stream with a byte budget.

use embedded_io::{ErrorType, Write};

use crate::error::ProbeError;

/// Writer that accepts at most `limit` bytes, then reports failures.
///
/// No data is stored; only the number of accepted bytes is tracked. The
/// invariant `written() <= limit()` holds after every call.
///
/// # Examples
///
/// ```
/// use embedded_io::Write;
/// use io_probe::FailingWriter;
///
/// let mut w = FailingWriter::new(10);
/// assert_eq!(w.write(&[0; 7]), Ok(7));
/// assert_eq!(w.write(&[0; 5]).unwrap_err().written(), 3);
///
/// w.extend(10);
/// assert_eq!(w.write(&[0; 5]), Ok(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailingWriter {
    current: usize,
    limit: usize,
}

impl FailingWriter {
    /// Create a writer that can accept `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self { current: 0, limit }
    }

    /// Raise the limit by `n` bytes so more data can be written.
    pub fn extend(&mut self, n: usize) {
        self.limit = self.limit.saturating_add(n);
    }

    /// Zero both the limit and the accepted byte count.
    ///
    /// Every non-empty write fails until [`extend`](Self::extend) is called.
    pub fn reset(&mut self) {
        self.limit = 0;
        self.current = 0;
    }

    /// The current byte limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> usize {
        self.current
    }

    /// Bytes that can still be accepted before writes start failing.
    pub fn remaining(&self) -> usize {
        self.limit - self.current
    }

    pub(crate) fn try_write(&mut self, buf: &[u8]) -> Result<usize, ProbeError> {
        if buf.len() <= self.remaining() {
            self.current += buf.len();
            return Ok(buf.len());
        }

        let accepted = self.remaining();
        self.current = self.limit;

        #[cfg(feature = "log")]
        log::debug!(
            "FailingWriter: {} byte write cut short at {} bytes (limit {})",
            buf.len(),
            accepted,
            self.limit
        );

        Err(ProbeError::WriteFailed {
            written: accepted,
            limit: self.limit,
        })
    }
}

impl ErrorType for FailingWriter {
    type Error = ProbeError;
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.try_write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
