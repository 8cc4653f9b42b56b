use super::Error;

/// Error when the store configuration is changed after the connection was opened.
#[derive(Debug)]
pub(super) struct AlreadyConnected;

impl std::error::Error for AlreadyConnected {}

impl core::fmt::Display for AlreadyConnected {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("the store is already connected")
    }
}

impl Error {
    /// Creates an error signalling that the store connection is already open.
    pub fn already_connected() -> Error {
        Error::from(super::ErrorKind::AlreadyConnected(AlreadyConnected))
    }

    /// Returns `true` if this error is an already-connected error.
    pub fn is_already_connected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyConnected(_))
    }
}
