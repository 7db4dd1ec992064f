use std::fmt;
use std::io;

/// Unified error type for envelope-pool operations.
///
/// Pool acquire/release are infallible by contract; only the
/// acknowledgement path can fail.
#[derive(Debug)]
pub enum Error {
    /// Delivery has no acknowledgement handle attached
    NoAcknowledger,

    /// The channel backing an acknowledgement handle is gone
    ChannelClosed,

    /// I/O error from an acknowledgement round-trip
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoAcknowledger => write!(f, "delivery has no acknowledger"),
            Error::ChannelClosed => write!(f, "channel closed"),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for envelope-pool operations
pub type Result<T> = std::result::Result<T, Error>;
