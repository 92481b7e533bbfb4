//! # Packets
//!
//! ```text
//! [VarInt length] [VarInt opcode] [payload ...]
//!                 |<-------- length -------->|
//! ```
//!
//! `length` covers the opcode's encoded bytes plus the payload and must fit a
//! non-negative `i32`.

use crate::core::varint::{decode_var_int, encode_var_int, var_int_size};
use crate::error::{CodecError, CodecResult};

/// One framed protocol message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packet {
    pub opcode: i32,
    pub payload: Vec<u8>,
}

impl Packet {
    pub fn new(opcode: i32, payload: Vec<u8>) -> Self {
        Self { opcode, payload }
    }

    /// Value of the length prefix: opcode bytes plus payload bytes.
    pub fn frame_len(&self) -> usize {
        var_int_size(self.opcode) + self.payload.len()
    }

    /// Total encoded size including the length prefix.
    ///
    /// Only meaningful when `frame_len()` fits an `i32`; callers that may hold
    /// oversized payloads should go through [`encode_packet`].
    pub fn encoded_len(&self) -> usize {
        let frame_len = self.frame_len();
        var_int_size(frame_len as i32) + frame_len
    }

    /// Serialize into a freshly allocated buffer.
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        if self.frame_len() > i32::MAX as usize {
            return Err(CodecError::ValueTooLarge { consumed: 0 });
        }
        let mut buf = vec![0u8; self.encoded_len()];
        encode_packet(&mut buf, self)?;
        Ok(buf)
    }

    /// Deserialize one packet from the front of `data`; trailing bytes are
    /// ignored.
    pub fn from_bytes(data: &[u8]) -> CodecResult<Self> {
        decode_packet(data).map(|(packet, _)| packet)
    }
}

/// Decode one packet from the front of `buf`, returning it with the total bytes
/// consumed (prefix plus frame).
///
/// The payload is copied out, so `buf` may be reused once this returns.
pub fn decode_packet(buf: &[u8]) -> CodecResult<(Packet, usize)> {
    let (length, n) = decode_var_int(buf)?;
    if length < 0 {
        return Err(CodecError::ValueTooLarge { consumed: n });
    }

    let end = n + length as usize;
    let Some(frame) = buf.get(n..end) else {
        return Err(CodecError::BufferTooSmall {
            consumed: buf.len(),
            expected: end,
        });
    };

    // The whole frame is present, so an opcode that runs past it means the
    // declared length is wrong, not that more data is due.
    let (opcode, m) =
        decode_var_int(frame).map_err(|_| CodecError::ValueTooLarge { consumed: end })?;

    let packet = Packet {
        opcode,
        payload: frame[m..].to_vec(),
    };
    Ok((packet, end))
}

/// Encode `packet` into the front of `buf`, returning the bytes written.
///
/// When `buf` is too short everything that fits is written and the partial
/// count is reported in the error.
pub fn encode_packet(buf: &mut [u8], packet: &Packet) -> CodecResult<usize> {
    let frame_len = packet.frame_len();
    if frame_len > i32::MAX as usize {
        return Err(CodecError::ValueTooLarge { consumed: 0 });
    }
    let expected = var_int_size(frame_len as i32) + frame_len;
    let short = |consumed| CodecError::BufferTooSmall { consumed, expected };

    let mut n = encode_var_int(buf, frame_len as i32).map_err(|e| short(e.consumed()))?;
    let m = encode_var_int(&mut buf[n..], packet.opcode).map_err(|e| short(n + e.consumed()))?;
    n += m;

    let rest = &mut buf[n..];
    let m = rest.len().min(packet.payload.len());
    rest[..m].copy_from_slice(&packet.payload[..m]);
    if m < packet.payload.len() {
        return Err(short(n + m));
    }

    Ok(n + m)
}
