//! # Core Protocol Components
//!
//! The wire primitives and the framing built from them.
//!
//! Every primitive is a pure function over a caller-supplied slice: decoders
//! return `(value, consumed)`, encoders return the number of bytes written,
//! and neither ever touches memory past the end of the slice.
//!
//! ## Components
//! - **VarInt / VarLong**: 7-bit groups, least significant first
//! - **String**: VarInt byte length + UTF-8
//! - **Position**: three bit fields in one big-endian `u64`
//! - **Packet**: length-prefixed opcode + payload
//! - **Buf**: `bytes` extension traits over the above
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(VarInt)] [Opcode(VarInt)] [Payload(N)]
//! ```
//!
//! ## Limits
//! - Strings: 32767 bytes
//! - Packets: `i32::MAX` on the wire, `max_packet_size` in the stream codec

pub mod buf;
pub mod codec;
pub mod packet;
pub mod position;
pub mod string;
pub mod varint;
