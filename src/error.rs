//! # Error Types
//!
//! Error handling for the wire codec and the stream layer built on top of it.
//!
//! ## Error Categories
//! - **Codec Errors** ([`CodecError`]): returned by the primitive encoders and
//!   decoders. Exactly three kinds, each carrying the number of bytes read or
//!   written before the failure.
//! - **Protocol Errors** ([`ProtocolError`]): returned by the stream framing
//!   codec and the configuration layer. Wraps codec errors, I/O failures and
//!   frame size violations.
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use mcproto::core::varint::decode_var_int;
//! use mcproto::error::CodecError;
//!
//! match decode_var_int(&[0xff]) {
//!     Err(CodecError::BufferTooSmall { consumed, expected }) => {
//!         assert_eq!(consumed, 1);
//!         assert_eq!(expected, 5);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants shared by the stream and config layers.
pub mod constants {
    pub const ERR_OVERSIZED_PACKET: &str = "Packet exceeds maximum size";
    pub const ERR_INVALID_LENGTH: &str = "Invalid packet length prefix";
    pub const ERR_LOGGING_INIT: &str = "Failed to install tracing subscriber";
}

/// Failure of a single encode or decode call.
///
/// `consumed` is the number of bytes read from (or written to) the caller's
/// buffer before the failure was detected. It never exceeds the slice length,
/// except for [`CodecError::BufferTooSmall`] raised by the string decoder, which
/// reports the span declared by the string's own length prefix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The source lacked bytes to finish a decode, or the destination lacked
    /// room to finish an encode. On decode this usually means more data has to
    /// arrive before retrying.
    #[error("buffer too small: have {consumed} bytes, need {expected}")]
    BufferTooSmall { consumed: usize, expected: usize },

    /// An integer exceeded its maximum encodable width, a position field was out
    /// of range, or a packet length was negative, malformed or above `i32::MAX`.
    #[error("value too large (after {consumed} bytes)")]
    ValueTooLarge { consumed: usize },

    /// String byte length outside `0..=32767`.
    #[error("string too long: {length} bytes (after {consumed} bytes)")]
    StringTooLong { consumed: usize, length: i64 },
}

impl CodecError {
    /// Bytes read or written before the failure.
    pub fn consumed(&self) -> usize {
        match *self {
            CodecError::BufferTooSmall { consumed, .. }
            | CodecError::ValueTooLarge { consumed }
            | CodecError::StringTooLong { consumed, .. } => consumed,
        }
    }

    /// `true` when the input was merely incomplete, `false` for a protocol
    /// violation that no amount of extra data can fix.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, CodecError::BufferTooSmall { .. })
    }
}

/// ProtocolError is the error type for the stream and configuration layers
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Packet too large: {0} bytes")]
    OversizedPacket(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Type alias for Results of the primitive codecs
pub type CodecResult<T> = std::result::Result<T, CodecError>;
