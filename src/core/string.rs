//! # Strings
//!
//! `VarInt(byte_length) ++ UTF-8 bytes`, with the byte length capped at
//! [`MAX_STRING_LEN`].

use crate::core::varint::{decode_var_int, encode_var_int, var_int_size};
use crate::error::{CodecError, CodecResult};

/// Largest string byte length the wire format accepts (`i16::MAX`)
pub const MAX_STRING_LEN: usize = i16::MAX as usize;

/// Decode a length-prefixed string from the front of `buf`.
///
/// The bytes are not validated as UTF-8; malformed sequences are replaced with
/// U+FFFD and the full declared length is still consumed.
pub fn decode_string(buf: &[u8]) -> CodecResult<(String, usize)> {
    let (length, n) = decode_var_int(buf)?;
    if length < 0 || length as usize > MAX_STRING_LEN {
        return Err(CodecError::StringTooLong {
            consumed: n,
            length: i64::from(length),
        });
    }

    let end = n + length as usize;
    let Some(bytes) = buf.get(n..end) else {
        return Err(CodecError::BufferTooSmall {
            consumed: end,
            expected: end,
        });
    };

    Ok((String::from_utf8_lossy(bytes).into_owned(), end))
}

/// Encode `value` into the front of `buf`, returning the bytes written.
///
/// When `buf` is too short the prefix and as many bytes as fit are written and
/// the partial count is reported in the error.
pub fn encode_string(buf: &mut [u8], value: &str) -> CodecResult<usize> {
    let bytes = value.as_bytes();
    if bytes.len() > MAX_STRING_LEN {
        return Err(CodecError::StringTooLong {
            consumed: 0,
            length: bytes.len() as i64,
        });
    }

    let expected = string_size(value);
    let n = encode_var_int(buf, bytes.len() as i32).map_err(|e| match e {
        CodecError::BufferTooSmall { consumed, .. } => CodecError::BufferTooSmall {
            consumed,
            expected,
        },
        other => other,
    })?;

    let rest = &mut buf[n..];
    let m = rest.len().min(bytes.len());
    rest[..m].copy_from_slice(&bytes[..m]);
    if m < bytes.len() {
        return Err(CodecError::BufferTooSmall {
            consumed: n + m,
            expected,
        });
    }

    Ok(n + m)
}

/// Encoded size of `value`: length prefix plus UTF-8 bytes.
pub fn string_size(value: &str) -> usize {
    var_int_size(value.len() as i32) + value.len()
}
