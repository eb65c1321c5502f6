//! The close capability.

use embedded_io::ErrorType;

/// A stream that must be explicitly released when the caller is done with it.
///
/// Some code under test only accepts streams it can close. Implementors that
/// hold no real resource make `close` a no-op.
pub trait Close: ErrorType {
    /// Release the stream.
    fn close(&mut self) -> Result<(), Self::Error>;
}

impl<T: ?Sized + Close> Close for &mut T {
    #[inline]
    fn close(&mut self) -> Result<(), Self::Error> {
        T::close(self)
    }
}
