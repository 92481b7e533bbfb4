//! # mcproto
//!
//! Binary codec for a length-prefixed, variable-width game networking wire
//! format.
//!
//! ## Primitives
//! - [`crate::core::varint`]: VarInt (1-5 bytes) and VarLong (1-10 bytes)
//! - [`crate::core::string`]: VarInt length + UTF-8, at most 32767 bytes
//! - [`crate::core::position`]: `x:26 | y:12 | z:26` packed in a big-endian `u64`
//! - [`crate::core::packet`]: `VarInt(length) ++ VarInt(opcode) ++ payload`
//!
//! Decoders return `(value, consumed)`; encoders write into a caller-owned
//! slice and return the bytes written. Errors carry the byte count reached
//! before failing, see [`error::CodecError`].
//!
//! ## Example
//! ```rust
//! use mcproto::{decode_packet, encode_packet, Packet};
//!
//! let packet = Packet::new(4, vec![3, 2, 1, 0]);
//! let mut buf = [0u8; 6];
//! assert_eq!(encode_packet(&mut buf, &packet), Ok(6));
//! assert_eq!(buf, [0x05, 0x04, 0x03, 0x02, 0x01, 0x00]);
//! assert_eq!(decode_packet(&buf), Ok((packet, 6)));
//! ```
//!
//! Stream transports can use [`PacketCodec`] with `tokio_util::codec::Framed`.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::buf::{WireBuf, WireBufMut};
pub use crate::core::codec::PacketCodec;
pub use crate::core::packet::{decode_packet, encode_packet, Packet};
pub use crate::core::position::{decode_position, encode_position, Position};
pub use crate::core::string::{decode_string, encode_string};
pub use crate::core::varint::{
    decode_var_int, decode_var_long, encode_var_int, encode_var_long, var_int_size,
    var_long_size,
};
pub use crate::error::{CodecError, ProtocolError};
