//! Read/write stream with a byte budget.

use embedded_io::{ErrorType, Read, Write};

use crate::{buffer::MemBuffer, error::ProbeError};

/// Duplex stream whose writes fail once the unread data reaches `limit`.
///
/// Accepted bytes are buffered and can be read back in FIFO order. The budget
/// applies to the bytes currently held, so reading data back frees room for
/// further writes.
///
/// `bytes_read()` counts everything drained by reads. It is informational
/// only and never affects whether a write is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailingStream {
    limit: usize,
    read_total: usize,
    buf: MemBuffer,
}

impl FailingStream {
    /// Create an empty stream that can hold `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            read_total: 0,
            buf: MemBuffer::new(),
        }
    }

    /// Raise the limit by `n` bytes.
    pub fn extend(&mut self, n: usize) {
        self.limit = self.limit.saturating_add(n);
    }

    /// Discard the buffered data. The limit and `bytes_read()` are kept.
    pub fn reset(&mut self) {
        self.buf.reset();
    }

    /// The current byte limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of bytes written but not yet read.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Total bytes drained by reads over the stream's lifetime.
    pub fn bytes_read(&self) -> usize {
        self.read_total
    }

    /// The buffered, unread bytes.
    pub fn contents(&self) -> &[u8] {
        self.buf.contents()
    }

    pub(crate) fn try_write(&mut self, data: &[u8]) -> Result<usize, ProbeError> {
        let held = self.buf.len();
        if held + data.len() <= self.limit {
            return Ok(self.buf.append(data));
        }

        let remain = self.limit.saturating_sub(held);
        if remain > 0 {
            self.buf.append(&data[..remain]);
        }

        #[cfg(feature = "log")]
        log::debug!(
            "FailingStream: {} byte write cut short at {} bytes ({} of {} held)",
            data.len(),
            remain,
            held,
            self.limit
        );

        Err(ProbeError::WriteFailed {
            written: remain,
            limit: self.limit,
        })
    }

    pub(crate) fn drain_into(&mut self, out: &mut [u8]) -> usize {
        let n = self.buf.drain_into(out);
        self.read_total += n;
        n
    }
}

impl ErrorType for FailingStream {
    type Error = ProbeError;
}

impl Read for FailingStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.drain_into(buf))
    }
}

impl Write for FailingStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.try_write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
