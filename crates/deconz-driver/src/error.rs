/// Ways a submitted request can fail.
///
/// Decode errors never show up here: a frame that cannot be decoded is
/// dropped at the boundary and cannot be attributed to any one request.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// The coprocessor answered with a non-zero status byte.
    #[error("command failed with status {status:#04x}")]
    Remote { status: u8 },

    /// The request was cancelled before a response arrived (typically by a
    /// transport-level timeout).
    #[error("request cancelled before a response arrived")]
    Cancelled,

    /// The driver was dropped while the request was still outstanding.
    #[error("driver closed before a response arrived")]
    Closed,
}

pub type Result<T> = std::result::Result<T, RequestError>;
