//! # Buffer Extensions
//!
//! `bytes` adapters over the slice codecs, for transports that already keep
//! their data in [`BytesMut`].
//!
//! Reads never advance the buffer on error, so an incomplete message can be
//! retried after more bytes arrive.

use bytes::{Buf, BufMut, BytesMut};

use crate::core::packet::{decode_packet, encode_packet, Packet};
use crate::core::position::{decode_position, encode_position, Position, POSITION_LEN};
use crate::core::string::{decode_string, encode_string, string_size};
use crate::core::varint::{
    decode_var_int, decode_var_long, encode_var_int, encode_var_long, MAX_VAR_INT_LEN,
    MAX_VAR_LONG_LEN,
};
use crate::error::{CodecError, CodecResult};

/// Writers for the wire primitives on any [`BufMut`].
///
/// Fallible writers validate the value first and write nothing on error.
pub trait WireBufMut: BufMut {
    fn put_var_int(&mut self, value: i32) {
        let mut tmp = [0u8; MAX_VAR_INT_LEN];
        if let Ok(n) = encode_var_int(&mut tmp, value) {
            self.put_slice(&tmp[..n]);
        }
    }

    fn put_var_long(&mut self, value: i64) {
        let mut tmp = [0u8; MAX_VAR_LONG_LEN];
        if let Ok(n) = encode_var_long(&mut tmp, value) {
            self.put_slice(&tmp[..n]);
        }
    }

    fn put_string(&mut self, value: &str) -> CodecResult<usize> {
        let mut tmp = vec![0u8; string_size(value)];
        let n = encode_string(&mut tmp, value)?;
        self.put_slice(&tmp[..n]);
        Ok(n)
    }

    fn put_position(&mut self, position: &Position) -> CodecResult<usize> {
        let mut tmp = [0u8; POSITION_LEN];
        let n = encode_position(&mut tmp, position)?;
        self.put_slice(&tmp);
        Ok(n)
    }

    fn put_packet(&mut self, packet: &Packet) -> CodecResult<usize> {
        if packet.frame_len() > i32::MAX as usize {
            return Err(CodecError::ValueTooLarge { consumed: 0 });
        }
        let mut tmp = vec![0u8; packet.encoded_len()];
        let n = encode_packet(&mut tmp, packet)?;
        self.put_slice(&tmp[..n]);
        Ok(n)
    }
}

impl<B: BufMut + ?Sized> WireBufMut for B {}

/// Readers for the wire primitives from the front of a [`BytesMut`].
pub trait WireBuf {
    fn try_get_var_int(&mut self) -> CodecResult<i32>;
    fn try_get_var_long(&mut self) -> CodecResult<i64>;
    fn try_get_string(&mut self) -> CodecResult<String>;
    fn try_get_position(&mut self) -> CodecResult<Position>;
    fn try_get_packet(&mut self) -> CodecResult<Packet>;
}

impl WireBuf for BytesMut {
    fn try_get_var_int(&mut self) -> CodecResult<i32> {
        let (value, n) = decode_var_int(self)?;
        self.advance(n);
        Ok(value)
    }

    fn try_get_var_long(&mut self) -> CodecResult<i64> {
        let (value, n) = decode_var_long(self)?;
        self.advance(n);
        Ok(value)
    }

    fn try_get_string(&mut self) -> CodecResult<String> {
        let (value, n) = decode_string(self)?;
        self.advance(n);
        Ok(value)
    }

    fn try_get_position(&mut self) -> CodecResult<Position> {
        let (value, n) = decode_position(self)?;
        self.advance(n);
        Ok(value)
    }

    fn try_get_packet(&mut self) -> CodecResult<Packet> {
        let (value, n) = decode_packet(self)?;
        self.advance(n);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_write_then_read_mixed_fields() {
        let mut buf = BytesMut::new();
        buf.put_var_int(300);
        buf.put_var_long(-2);
        buf.put_string("steve").unwrap();
        buf.put_position(&Position::new(257, 42, -513)).unwrap();

        assert_eq!(buf.try_get_var_int(), Ok(300));
        assert_eq!(buf.try_get_var_long(), Ok(-2));
        assert_eq!(buf.try_get_string().unwrap(), "steve");
        assert_eq!(buf.try_get_position(), Ok(Position::new(257, 42, -513)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failed_read_does_not_advance() {
        let mut buf = BytesMut::from(&[0x05, 0x04, 0x03][..]);
        assert_eq!(
            buf.try_get_packet(),
            Err(CodecError::BufferTooSmall {
                consumed: 3,
                expected: 6
            })
        );
        assert_eq!(buf.len(), 3);

        buf.extend_from_slice(&[0x02, 0x01, 0x00]);
        assert_eq!(buf.try_get_packet(), Ok(Packet::new(4, vec![3, 2, 1, 0])));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failed_write_leaves_buffer_untouched() {
        let mut buf = Vec::new();
        assert!(buf.put_position(&Position::new(0, 4096, 0)).is_err());
        assert!(buf.put_string(&"x".repeat(40_000)).is_err());
        assert!(buf.is_empty());

        assert_eq!(buf.put_packet(&Packet::new(4, vec![3, 2, 1, 0])), Ok(6));
        assert_eq!(buf, vec![0x05, 0x04, 0x03, 0x02, 0x01, 0x00]);
    }
}
