//! `std::io` implementations for the probe streams.
//!
//! These let the probes stand in wherever code under test takes
//! `impl std::io::Read` or `impl std::io::Write`. A [`ProbeError`] becomes an
//! `std::io::Error` of kind `Other`; use [`ProbeError::from_io`] to get the
//! partial write count back.

use std::io::{self, Read, Write};

use crate::{
    buffer::MemBuffer,
    failing::{FailingStream, FailingWriter},
    logging::{LoggingStream, is_end_of_stream},
};

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.try_write(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for FailingStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.drain_into(buf))
    }
}

impl Write for FailingStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.try_write(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for MemBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.drain_into(buf))
    }
}

impl Write for MemBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.append(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Delegate speaks std::io, sink speaks embedded_io
impl<D: Read, W: embedded_io::Write> Read for LoggingStream<D, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.get_mut().read(buf)?;
        if !is_end_of_stream(buf, n) {
            self.trace("READ", buf);
        }
        Ok(n)
    }
}

impl<D: Write, W: embedded_io::Write> Write for LoggingStream<D, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.trace("WRITE", buf);
        self.get_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.get_mut().flush()
    }
}
