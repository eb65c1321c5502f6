//! Lowercase hex rendering for trace lines.

use core::fmt;

/// Displays a byte slice as contiguous lowercase hex, two digits per byte.
///
/// An empty slice renders as nothing.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
