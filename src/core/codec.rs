//! # Packet Stream Codec
//!
//! `tokio_util` framing for [`Packet`]s over a byte stream.
//!
//! The decoder peeks at the length prefix, waits until the whole frame has
//! arrived, then decodes it and advances the source by exactly one frame. Frames
//! declaring more than `max_packet_size` bytes are rejected before any payload
//! is buffered.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

use crate::config::{FramingConfig, DEFAULT_MAX_PACKET_SIZE};
use crate::core::packet::{decode_packet, encode_packet, Packet};
use crate::core::varint::{decode_var_int, var_int_size};
use crate::error::constants::{ERR_INVALID_LENGTH, ERR_OVERSIZED_PACKET};
use crate::error::{CodecError, ProtocolError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketCodec {
    max_packet_size: usize,
}

impl PacketCodec {
    pub fn new() -> Self {
        Self::with_max_packet_size(DEFAULT_MAX_PACKET_SIZE)
    }

    /// Limit on the length prefix (opcode plus payload), in bytes.
    pub fn with_max_packet_size(max_packet_size: usize) -> Self {
        Self { max_packet_size }
    }

    pub fn from_config(config: &FramingConfig) -> Self {
        Self::with_max_packet_size(config.max_packet_size)
    }

    pub fn max_packet_size(&self) -> usize {
        self.max_packet_size
    }

    fn write(&self, item: &Packet, dst: &mut BytesMut) -> Result<()> {
        let frame_len = item.frame_len();
        if frame_len > self.max_packet_size {
            warn!(frame_len, limit = self.max_packet_size, "{}", ERR_OVERSIZED_PACKET);
            return Err(ProtocolError::OversizedPacket(frame_len));
        }
        if frame_len > i32::MAX as usize {
            return Err(CodecError::ValueTooLarge { consumed: 0 }.into());
        }

        let total = var_int_size(frame_len as i32) + frame_len;
        let start = dst.len();
        dst.resize(start + total, 0);
        if let Err(e) = encode_packet(&mut dst[start..], item) {
            dst.truncate(start);
            return Err(e.into());
        }

        trace!(opcode = item.opcode, len = total, "Encoded packet");
        Ok(())
    }
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let (length, n) = match decode_var_int(src) {
            Ok(header) => header,
            Err(CodecError::BufferTooSmall { .. }) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "{}", ERR_INVALID_LENGTH);
                return Err(e.into());
            }
        };

        if length < 0 {
            warn!(length, "{}", ERR_INVALID_LENGTH);
            return Err(CodecError::ValueTooLarge { consumed: n }.into());
        }
        let frame_len = length as usize;
        if frame_len > self.max_packet_size {
            warn!(frame_len, limit = self.max_packet_size, "{}", ERR_OVERSIZED_PACKET);
            return Err(ProtocolError::OversizedPacket(frame_len));
        }

        let total = n + frame_len;
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        let (packet, consumed) = decode_packet(&src[..total])?;
        src.advance(consumed);

        trace!(opcode = packet.opcode, len = consumed, "Decoded packet");
        Ok(Some(packet))
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<()> {
        self.write(&item, dst)
    }
}

impl Encoder<&Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: &Packet, dst: &mut BytesMut) -> Result<()> {
        self.write(item, dst)
    }
}
