//! Closeable in-memory byte buffer.

use alloc::{string::String, vec::Vec};
use core::convert::Infallible;
use embedded_io::{ErrorType, Read, Write};

use crate::close::Close;

/// Growable in-memory buffer with a no-op [`Close`].
///
/// Writes append to the end, reads drain from the front. Once every byte has
/// been read, further reads return `Ok(0)` (end of stream) until more data is
/// written.
///
/// Neither reads nor writes can fail, so the error type is [`Infallible`].
///
/// # Examples
///
/// ```
/// use embedded_io::Read;
/// use io_probe::MemBuffer;
///
/// let mut buf = MemBuffer::from_string("hello");
/// assert_eq!(buf.contents(), b"hello");
///
/// let mut out = [0u8; 5];
/// assert_eq!(buf.read(&mut out), Ok(5));
/// assert_eq!(buf.read(&mut out), Ok(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemBuffer {
    data: Vec<u8>,
    // Bytes before this offset have already been read.
    pos: usize,
}

impl MemBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer using `bytes` as its initial contents.
    ///
    /// Use this to prepare a buffer holding data to be read. To pre-size a
    /// buffer for writing instead, pass an empty vector with the desired
    /// capacity, e.g. `Vec::with_capacity(4096)`.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { data: bytes, pos: 0 }
    }

    /// Create a buffer holding the UTF-8 bytes of `s`.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self::from_bytes(s.into().into_bytes())
    }

    /// The unread contents of the buffer.
    pub fn contents(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// Number of unread bytes.
    pub fn len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been read.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all contents. Allocated capacity is kept.
    pub fn reset(&mut self) {
        self.data.clear();
        self.pos = 0;
    }

    /// Consume the buffer and return its unread contents.
    pub fn into_inner(mut self) -> Vec<u8> {
        self.data.drain(..self.pos);
        self.data
    }

    /// Append `buf`. Always accepts every byte.
    pub(crate) fn append(&mut self, buf: &[u8]) -> usize {
        // Reclaim the read prefix once it dominates the backing storage
        if self.pos == self.data.len() {
            self.reset();
        } else if self.pos > 0 && self.pos >= self.data.len() / 2 {
            self.data.drain(..self.pos);
            self.pos = 0;
        }
        self.data.extend_from_slice(buf);
        buf.len()
    }

    /// Drain up to `buf.len()` bytes from the front into `buf`.
    pub(crate) fn drain_into(&mut self, buf: &mut [u8]) -> usize {
        let unread = &self.data[self.pos..];
        let n = buf.len().min(unread.len());
        buf[..n].copy_from_slice(&unread[..n]);
        self.pos += n;
        n
    }
}

impl From<Vec<u8>> for MemBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for MemBuffer {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl From<&str> for MemBuffer {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl ErrorType for MemBuffer {
    type Error = Infallible;
}

impl Read for MemBuffer {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.drain_into(buf))
    }
}

impl Write for MemBuffer {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(self.append(buf))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MemBuffer {
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_contents() {
        let buf = MemBuffer::from_string("hello");
        assert_eq!(buf.contents(), b"hello");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_read_drains_then_end_of_stream() {
        let mut buf = MemBuffer::from_string("hello");
        let mut out = [0u8; 5];

        assert_eq!(buf.read(&mut out), Ok(5));
        assert_eq!(&out, b"hello");
        assert!(buf.is_empty());
        assert_eq!(buf.read(&mut out), Ok(0));
    }

    #[test]
    fn test_partial_reads_are_fifo() {
        let mut buf = MemBuffer::from_bytes(vec![1, 2, 3, 4, 5]);
        let mut out = [0u8; 2];

        assert_eq!(buf.read(&mut out), Ok(2));
        assert_eq!(out, [1, 2]);
        assert_eq!(buf.read(&mut out), Ok(2));
        assert_eq!(out, [3, 4]);
        assert_eq!(buf.read(&mut out), Ok(1));
        assert_eq!(out[0], 5);
        assert_eq!(buf.contents(), b"");
    }

    #[test]
    fn test_write_appends_after_unread_data() {
        let mut buf = MemBuffer::from_string("ab");
        let mut out = [0u8; 1];
        buf.read(&mut out).unwrap();

        assert_eq!(buf.write(b"cd"), Ok(2));
        assert_eq!(buf.contents(), b"bcd");
    }

    #[test]
    fn test_write_after_full_drain() {
        let mut buf = MemBuffer::from_string("ab");
        let mut out = [0u8; 2];
        buf.read(&mut out).unwrap();

        buf.write(b"xyz").unwrap();
        assert_eq!(buf.contents(), b"xyz");
        assert_eq!(buf.into_inner(), b"xyz".to_vec());
    }

    #[test]
    fn test_presized_buffer_starts_empty() {
        let mut buf = MemBuffer::from_bytes(Vec::with_capacity(64));
        assert!(buf.is_empty());

        buf.write(&[7u8; 64]).unwrap();
        assert_eq!(buf.len(), 64);
    }

    #[test]
    fn test_reset_discards_contents() {
        let mut buf = MemBuffer::from_string("hello");
        buf.reset();

        assert!(buf.is_empty());
        let mut out = [0u8; 4];
        assert_eq!(buf.read(&mut out), Ok(0));
    }

    #[test]
    fn test_close_is_noop() {
        let mut buf = MemBuffer::from_string("still here");
        assert_eq!(buf.close(), Ok(()));
        assert_eq!(buf.contents(), b"still here");
    }

    #[test]
    fn test_interleaved_io_does_not_grow_storage() {
        let mut buf = MemBuffer::from_string("abc");
        let mut out = [0u8; 2];

        for _ in 0..10_000 {
            assert_eq!(buf.read(&mut out), Ok(2));
            assert_eq!(buf.write(b"xy"), Ok(2));
        }

        assert_eq!(buf.len(), 3);
        assert!(buf.data.len() < 100, "backing storage grew to {}", buf.data.len());
        assert_eq!(buf.contents(), b"yxy");
    }

    #[test]
    fn test_compaction_keeps_unread_order() {
        let mut buf = MemBuffer::from_string("abcdef");
        let mut out = [0u8; 4];
        buf.read(&mut out).unwrap();

        buf.write(b"gh").unwrap();
        assert_eq!(buf.pos, 0);
        assert_eq!(buf.contents(), b"efgh");
    }

    #[test]
    fn test_into_inner_skips_read_prefix() {
        let mut buf = MemBuffer::from_string("abcdef");
        let mut out = [0u8; 3];
        buf.read(&mut out).unwrap();

        assert_eq!(buf.into_inner(), b"def".to_vec());
    }
}
