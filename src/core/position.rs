//! # Positions
//!
//! Three signed coordinates packed into one big-endian 64-bit word:
//!
//! ```text
//!  63                    38 37        26 25                     0
//! +------------------------+------------+------------------------+
//! |        x (26 bits)     | y (12 bits)|       z (26 bits)      |
//! +------------------------+------------+------------------------+
//! ```
//!
//! Each field is two's complement within its own width. Decoding shifts the
//! field's top bit up to bit 63 and arithmetic-shifts it back down, which
//! sign-extends it in one step. For `y` (width 12, offset 26):
//!
//! ```text
//! v << (64 - 38)   puts y's top bit at bit 63
//! (.. as i64) >> 52 moves y to bits 11..0, copying its sign bit above
//! ```

use crate::error::{CodecError, CodecResult};

/// Encoded width of a position
pub const POSITION_LEN: usize = 8;

const X_WIDTH: u32 = 26;
const X_OFFSET: u32 = 38;
const Y_WIDTH: u32 = 12;
const Y_OFFSET: u32 = 26;
const Z_WIDTH: u32 = 26;
const Z_OFFSET: u32 = 0;

/// A block coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i16,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i16, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Whether every coordinate fits its field, i.e. whether
    /// [`encode_position`] will accept this value.
    pub fn is_packable(&self) -> bool {
        fits(i64::from(self.x), X_WIDTH)
            && fits(i64::from(self.y), Y_WIDTH)
            && fits(i64::from(self.z), Z_WIDTH)
    }
}

fn fits(n: i64, width: u32) -> bool {
    let bound = 1i64 << (width - 1);
    (-bound..bound).contains(&n)
}

/// Extract the signed field of `width` bits starting `offset` bits above the
/// least significant bit of `word`.
///
/// `get_field(0x0000_4040_abff_fdff, 12, 26) == 42`
pub fn get_field(word: u64, width: u32, offset: u32) -> i64 {
    ((word << (64 - (width + offset))) as i64) >> (64 - width)
}

/// Place the low `width` bits of `n` at `offset`. Bits of `n` above `width`
/// are discarded, so out-of-range values alias silently.
///
/// `put_field(-513, 26, 0) == 0x3ff_fdff`
pub fn put_field(n: i64, width: u32, offset: u32) -> u64 {
    (n as u64) << (64 - width) >> (64 - (width + offset))
}

/// Decode a position from the first [`POSITION_LEN`] bytes of `buf`.
pub fn decode_position(buf: &[u8]) -> CodecResult<(Position, usize)> {
    let Some(bytes) = buf
        .get(..POSITION_LEN)
        .and_then(|b| <[u8; POSITION_LEN]>::try_from(b).ok())
    else {
        return Err(CodecError::BufferTooSmall {
            consumed: buf.len(),
            expected: POSITION_LEN,
        });
    };

    let word = u64::from_be_bytes(bytes);
    let position = Position {
        x: get_field(word, X_WIDTH, X_OFFSET) as i32,
        y: get_field(word, Y_WIDTH, Y_OFFSET) as i16,
        z: get_field(word, Z_WIDTH, Z_OFFSET) as i32,
    };
    Ok((position, POSITION_LEN))
}

/// Encode `position` into the first [`POSITION_LEN`] bytes of `buf`.
///
/// Coordinates outside their field range are rejected with
/// [`CodecError::ValueTooLarge`] and nothing is written.
pub fn encode_position(buf: &mut [u8], position: &Position) -> CodecResult<usize> {
    if buf.len() < POSITION_LEN {
        return Err(CodecError::BufferTooSmall {
            consumed: buf.len(),
            expected: POSITION_LEN,
        });
    }
    if !position.is_packable() {
        return Err(CodecError::ValueTooLarge { consumed: 0 });
    }

    let word = put_field(i64::from(position.x), X_WIDTH, X_OFFSET)
        | put_field(i64::from(position.y), Y_WIDTH, Y_OFFSET)
        | put_field(i64::from(position.z), Z_WIDTH, Z_OFFSET);
    buf[..POSITION_LEN].copy_from_slice(&word.to_be_bytes());
    Ok(POSITION_LEN)
}
