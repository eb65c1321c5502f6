//! Implementations of embedded_io_async traits for the probe streams.
//!
//! Every probe is purely in-memory, so none of these futures ever suspend.
//! `LoggingStream` awaits its delegate but writes trace lines to its sink
//! synchronously.

use embedded_io_async::{Read, Write};

use crate::{
    buffer::MemBuffer,
    failing::{FailingStream, FailingWriter},
    logging::{LoggingStream, is_end_of_stream},
};

impl Write for FailingWriter {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.try_write(buf)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Read for FailingStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.drain_into(buf))
    }
}

impl Write for FailingStream {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.try_write(buf)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Read for MemBuffer {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.drain_into(buf))
    }
}

impl Write for MemBuffer {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(self.append(buf))
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<D: Read, W: embedded_io::Write> Read for LoggingStream<D, W> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.get_mut().read(buf).await?;
        if !is_end_of_stream(buf, n) {
            self.trace("READ", buf);
        }
        Ok(n)
    }
}

impl<D: Write, W: embedded_io::Write> Write for LoggingStream<D, W> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.trace("WRITE", buf);
        self.get_mut().write(buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.get_mut().flush().await
    }
}
