//! Errors reported by the failing streams.

use core::fmt;

/// Error surfaced when a write runs past a configured byte budget.
///
/// A failed write is usually a *short* write: some prefix of the input was
/// accepted before the budget ran out. That count is carried in the error so
/// callers can check their short-write handling.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProbeError {
    /// The write would exceed the byte limit.
    WriteFailed {
        /// Bytes of the failed call that were accepted before the failure.
        written: usize,
        /// The limit in force when the write failed.
        limit: usize,
    },
}

impl ProbeError {
    /// Number of bytes the failed call accepted before failing.
    pub fn written(&self) -> usize {
        match self {
            Self::WriteFailed { written, .. } => *written,
        }
    }

    /// Recover a `ProbeError` from an `std::io::Error` produced by the
    /// `std::io` bridges of this crate.
    #[cfg(feature = "std")]
    pub fn from_io(err: &std::io::Error) -> Option<&ProbeError> {
        err.get_ref().and_then(|inner| inner.downcast_ref::<ProbeError>())
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { written, limit } => write!(
                f,
                "write failed: limit of {} bytes reached after writing {} bytes",
                limit, written
            ),
        }
    }
}

impl core::error::Error for ProbeError {}

// Implement embedded_io::Error so the failing streams can sit behind embedded_io traits
impl embedded_io::Error for ProbeError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::WriteFailed { .. } => embedded_io::ErrorKind::Other,
        }
    }
}

#[cfg(feature = "std")]
impl From<ProbeError> for std::io::Error {
    fn from(err: ProbeError) -> Self {
        std::io::Error::other(err)
    }
}
