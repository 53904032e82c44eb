//! Error types for textwire-client.

use thiserror::Error;

/// Main error type for all textwire operations.
#[derive(Debug, Error)]
pub enum TextwireError {
    /// I/O error during socket read/write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request payload exceeds the 27-bit length limit.
    #[error("payload of {len} bytes exceeds the {max}-byte request limit")]
    PayloadTooLarge { len: usize, max: usize },

    /// Action tag observed on the wire is not one of the five valid tags.
    #[error("invalid action tag: {0}")]
    InvalidAction(u32),

    /// Action name given by the caller is not one of the five valid names.
    #[error("unknown action name: {0:?}")]
    UnknownAction(String),

    /// A write made zero bytes of progress on a non-empty remaining suffix.
    #[error("write stalled with {remaining} bytes unsent")]
    WriteStalled { remaining: usize },

    /// The stream ended before the handler signaled completion.
    #[error("stream closed before all expected responses arrived")]
    PrematureClose,

    /// A response declared a length past the configured buffer growth cap.
    #[error("declared response length {declared} exceeds maximum {max}")]
    ResponseTooLarge { declared: u32, max: u32 },
}

/// Result type alias using TextwireError.
pub type Result<T> = std::result::Result<T, TextwireError>;
