//! Streams that fail once a byte budget is used up.
//!
//! These simulate a disk filling up or a connection dropping mid-transfer. A
//! write that crosses the budget is a short write: the bytes that fit are
//! accepted and the call fails with [`ProbeError::WriteFailed`] carrying that
//! count. Nothing is retried; recovery belongs to the code under test.
//!
//! - [`FailingWriter`] only counts bytes.
//! - [`FailingStream`] keeps the accepted bytes so they can be read back.
//!
//! [`ProbeError::WriteFailed`]: crate::ProbeError::WriteFailed

mod stream;
mod writer;

pub use stream::FailingStream;
pub use writer::FailingWriter;
