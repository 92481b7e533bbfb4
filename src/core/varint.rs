//! # VarInt / VarLong
//!
//! Variable-length integers: 7 data bits per byte, least significant group
//! first, continuation flag in the top bit. Signed values are encoded through
//! their two's-complement bit pattern (no zig-zag), so every negative number
//! takes the full width.
//!
//! ```text
//! 127          -> 7f
//! 128          -> 80 01
//! i32::MAX     -> ff ff ff ff 07
//! -1 (i32)     -> ff ff ff ff 0f
//! ```

use crate::error::{CodecError, CodecResult};

/// Data bits per byte
const CHUNK_BITS: u32 = 7;

/// Continuation flag
const CONTINUE_BIT: u8 = 1 << CHUNK_BITS;

/// Data mask
const CHUNK_MASK: u8 = CONTINUE_BIT - 1;

/// Maximum encoded width of a VarInt
pub const MAX_VAR_INT_LEN: usize = 5;

/// Maximum encoded width of a VarLong
pub const MAX_VAR_LONG_LEN: usize = 10;

fn get_var(buf: &[u8], max_len: usize) -> CodecResult<(u64, usize)> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().take(max_len).enumerate() {
        value |= u64::from(byte & CHUNK_MASK) << (i as u32 * CHUNK_BITS);
        if byte & CONTINUE_BIT == 0 {
            return Ok((value, i + 1));
        }
    }

    if buf.len() < max_len {
        Err(CodecError::BufferTooSmall {
            consumed: buf.len(),
            expected: max_len,
        })
    } else {
        Err(CodecError::ValueTooLarge { consumed: max_len })
    }
}

fn put_var(buf: &mut [u8], mut value: u64, max_len: usize) -> CodecResult<usize> {
    let needed = var_size(value);
    let limit = buf.len().min(max_len);
    for (i, slot) in buf.iter_mut().take(limit).enumerate() {
        if value & !u64::from(CHUNK_MASK) == 0 {
            *slot = value as u8;
            return Ok(i + 1);
        }
        *slot = (value as u8 & CHUNK_MASK) | CONTINUE_BIT;
        value >>= CHUNK_BITS;
    }

    if buf.len() < max_len {
        Err(CodecError::BufferTooSmall {
            consumed: buf.len(),
            expected: needed,
        })
    } else {
        Err(CodecError::ValueTooLarge { consumed: max_len })
    }
}

fn var_size(value: u64) -> usize {
    let bit_len = (u64::BITS - value.leading_zeros()).max(1);
    1 + ((bit_len - 1) / CHUNK_BITS) as usize
}

/// Decode a VarInt from the front of `buf`, returning the value and the bytes
/// consumed.
///
/// A truncated buffer yields [`CodecError::BufferTooSmall`] with `consumed`
/// set to the bytes available; five continuation-flagged bytes yield
/// [`CodecError::ValueTooLarge`].
pub fn decode_var_int(buf: &[u8]) -> CodecResult<(i32, usize)> {
    let (value, n) = get_var(buf, MAX_VAR_INT_LEN)?;
    // Bits above 32 come from the fifth byte's spare nibble and are dropped.
    Ok((value as u32 as i32, n))
}

/// Decode a VarLong from the front of `buf`.
pub fn decode_var_long(buf: &[u8]) -> CodecResult<(i64, usize)> {
    let (value, n) = get_var(buf, MAX_VAR_LONG_LEN)?;
    Ok((value as i64, n))
}

/// Encode `value` into the front of `buf`, returning the bytes written.
pub fn encode_var_int(buf: &mut [u8], value: i32) -> CodecResult<usize> {
    // Through u32 first so the sign is not extended into 64 bits.
    put_var(buf, u64::from(value as u32), MAX_VAR_INT_LEN)
}

/// Encode `value` into the front of `buf`, returning the bytes written.
pub fn encode_var_long(buf: &mut [u8], value: i64) -> CodecResult<usize> {
    put_var(buf, value as u64, MAX_VAR_LONG_LEN)
}

/// Encoded width of `value` as a VarInt.
pub fn var_int_size(value: i32) -> usize {
    var_size(u64::from(value as u32))
}

/// Encoded width of `value` as a VarLong.
pub fn var_long_size(value: i64) -> usize {
    var_size(value as u64)
}
