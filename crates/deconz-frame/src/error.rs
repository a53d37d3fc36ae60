/// Errors that can occur while decoding a response frame.
///
/// All of these are per-frame: the caller logs and drops the frame, no
/// pending request is affected.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer is below the 3-byte minimum header.
    #[error("frame too short ({len} bytes, minimum {min})")]
    TooShort { len: usize, min: usize },

    /// The command id byte is not a known response kind.
    #[error("unknown command id {0:#04x}")]
    UnknownCommand(u8),

    /// The parameter id inside a read-parameter frame is not known.
    #[error("unknown parameter id {0:#04x}")]
    UnknownParameter(u8),

    /// A field extends past the end of the buffer.
    #[error("frame truncated reading {field} ({need} bytes needed, {len} available)")]
    Truncated {
        field: &'static str,
        need: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
