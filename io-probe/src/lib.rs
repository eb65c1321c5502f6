//! Instrumented byte streams for exercising I/O error paths in tests.
//!
//! This crate provides small stand-ins for stream endpoints. None of them touch
//! a real device; they exist so test code can observe how the code under test
//! behaves when a stream fills up, or what bytes actually cross a stream.
//!
//! # Components
//!
//! - **[`FailingWriter`]**: write-only sink that accepts a fixed byte budget and
//!   then reports short writes. Stores nothing.
//! - **[`FailingStream`]**: same budget semantics, backed by a buffer that can
//!   be read back in FIFO order.
//! - **[`MemBuffer`]**: growable in-memory buffer that also satisfies the
//!   [`Close`] capability.
//! - **[`LoggingStream`]**: decorator that mirrors every read and write on a
//!   wrapped stream as a hex trace line on a log sink.
//!
//! All components implement the blocking [`embedded_io`] traits. The `std`
//! feature adds `std::io::{Read, Write}`; the `async` feature adds
//! `embedded_io_async::{Read, Write}`.
//!
//! # Quick Start
//!
//! ```ignore
//! use embedded_io::Write;
//! use io_probe::{FailingWriter, ProbeError};
//!
//! let mut disk = FailingWriter::new(10);
//! assert_eq!(disk.write(&[0u8; 7]), Ok(7));
//!
//! // The "disk" fills up: only 3 of the 5 bytes land.
//! let err = disk.write(&[0u8; 5]).unwrap_err();
//! assert_eq!(err.written(), 3);
//!
//! disk.extend(10);
//! assert_eq!(disk.write(&[0u8; 5]), Ok(5));
//! ```
//!
//! ## Tracing a stream
//!
//! ```ignore
//! use embedded_io::Write;
//! use io_probe::{LoggingStream, MemBuffer};
//!
//! let mut trace = MemBuffer::new();
//! let mut stream = LoggingStream::with_sink(MemBuffer::new(), &mut trace);
//! stream.set_name("x");
//! stream.write(&[0xab, 0xcd])?;
//! drop(stream);
//! assert_eq!(trace.contents(), b"[x] [WRITE] abcd\n");
//! ```
//!
//! # Features
//!
//! - `std`: `std::io` bridges and the standard-error default log sink
//! - `async`: `embedded_io_async` implementations
//! - `log`: report short writes and sink failures through the `log` facade
//! - `defmt`: `defmt::Format` for [`ProbeError`]
//!
//! # Concurrency
//!
//! Every type is meant to be confined to one test. There is no internal
//! locking; share an instance across threads only behind your own
//! synchronization.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod buffer;
pub mod close;
pub mod error;
pub mod failing;
pub mod hex;
pub mod logging;

#[cfg(feature = "std")]
mod std_io;

#[cfg(feature = "async")]
mod async_io;

pub use buffer::MemBuffer;
pub use close::Close;
pub use error::ProbeError;
pub use failing::{FailingStream, FailingWriter};
pub use hex::Hex;
pub use logging::LoggingStream;

#[cfg(feature = "std")]
pub use logging::StderrSink;

// Re-export the trait crates so users can name the traits without extra dependencies
pub use embedded_io;

#[cfg(feature = "async")]
pub use embedded_io_async;
