//! Property-based tests using proptest
//!
//! These tests validate codec invariants across randomly generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use mcproto::core::position::{get_field, put_field};
use mcproto::core::string::string_size;
use mcproto::core::varint::{MAX_VAR_INT_LEN, MAX_VAR_LONG_LEN};
use mcproto::{
    decode_packet, decode_position, decode_string, decode_var_int, decode_var_long,
    encode_packet, encode_position, encode_string, encode_var_int, encode_var_long, var_int_size,
    var_long_size, CodecError, Packet, Position,
};
use proptest::prelude::*;

// Property: every i32 survives a VarInt round trip and the size function agrees
proptest! {
    #[test]
    fn prop_var_int_roundtrip(value in any::<i32>()) {
        let mut buf = [0u8; MAX_VAR_INT_LEN];
        let n = encode_var_int(&mut buf, value).expect("encode should not fail");

        prop_assert_eq!(n, var_int_size(value));
        prop_assert_eq!(decode_var_int(&buf[..n]), Ok((value, n)));
    }
}

// Property: every i64 survives a VarLong round trip and the size function agrees
proptest! {
    #[test]
    fn prop_var_long_roundtrip(value in any::<i64>()) {
        let mut buf = [0u8; MAX_VAR_LONG_LEN];
        let n = encode_var_long(&mut buf, value).expect("encode should not fail");

        prop_assert_eq!(n, var_long_size(value));
        prop_assert_eq!(decode_var_long(&buf[..n]), Ok((value, n)));
    }
}

// Property: only the final byte of an encoding lacks the continuation bit
proptest! {
    #[test]
    fn prop_var_long_continuation_bits(value in any::<i64>()) {
        let mut buf = [0u8; MAX_VAR_LONG_LEN];
        let n = encode_var_long(&mut buf, value).unwrap();

        for byte in &buf[..n - 1] {
            prop_assert!(byte & 0x80 != 0);
        }
        prop_assert!(buf[n - 1] & 0x80 == 0);
    }
}

// Property: decoding arbitrary bytes never panics and never over-reports
proptest! {
    #[test]
    fn prop_decoders_stay_in_bounds(data in prop::collection::vec(any::<u8>(), 0..64)) {
        match decode_var_int(&data) {
            Ok((_, n)) => prop_assert!(n >= 1 && n <= MAX_VAR_INT_LEN && n <= data.len()),
            Err(e) => prop_assert!(e.consumed() <= MAX_VAR_INT_LEN),
        }
        match decode_var_long(&data) {
            Ok((_, n)) => prop_assert!(n <= MAX_VAR_LONG_LEN && n <= data.len()),
            Err(e) => prop_assert!(e.consumed() <= MAX_VAR_LONG_LEN),
        }
        if let Ok((_, n)) = decode_packet(&data) {
            prop_assert!(n <= data.len());
        }
        if let Ok((_, n)) = decode_string(&data) {
            prop_assert!(n <= data.len());
        }
    }
}

// Property: strings within the limit round trip with byte-length prefixes
proptest! {
    #[test]
    fn prop_string_roundtrip(value in "\\PC{0,256}") {
        let mut buf = vec![0u8; string_size(&value)];
        let n = encode_string(&mut buf, &value).expect("encode should not fail");

        prop_assert_eq!(n, buf.len());
        prop_assert_eq!(decode_var_int(&buf), Ok((value.len() as i32, var_int_size(value.len() as i32))));
        prop_assert_eq!(decode_string(&buf), Ok((value, n)));
    }
}

// Property: any in-range position round trips through its 8-byte form
proptest! {
    #[test]
    fn prop_position_roundtrip(
        x in -(1i32 << 25)..(1i32 << 25),
        y in -2048i16..2048,
        z in -(1i32 << 25)..(1i32 << 25),
    ) {
        let position = Position::new(x, y, z);
        let mut buf = [0u8; 8];

        prop_assert_eq!(encode_position(&mut buf, &position), Ok(8));
        prop_assert_eq!(decode_position(&buf), Ok((position, 8)));
    }
}

// Property: out-of-range positions are refused instead of aliasing
proptest! {
    #[test]
    fn prop_position_out_of_range_rejected(x in (1i32 << 25)..i32::MAX) {
        let mut buf = [0u8; 8];
        prop_assert_eq!(
            encode_position(&mut buf, &Position::new(x, 0, 0)),
            Err(CodecError::ValueTooLarge { consumed: 0 })
        );
    }
}

// Property: field helpers invert each other for any in-range value
proptest! {
    #[test]
    fn prop_field_helpers_invert(value in -(1i64 << 11)..(1i64 << 11), offset in 0u32..52) {
        prop_assert_eq!(get_field(put_field(value, 12, offset), 12, offset), value);
    }
}

// Property: any packet round trips and its prefix equals opcode size plus payload
proptest! {
    #[test]
    fn prop_packet_roundtrip(
        opcode in any::<i32>(),
        payload in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let packet = Packet::new(opcode, payload);
        let bytes = packet.to_bytes().expect("serialization should not fail");

        prop_assert_eq!(bytes.len(), packet.encoded_len());
        let (length, _) = decode_var_int(&bytes).unwrap();
        prop_assert_eq!(length as usize, var_int_size(opcode) + packet.payload.len());
        prop_assert_eq!(decode_packet(&bytes), Ok((packet, bytes.len())));
    }
}

// Property: every strict prefix of a packet is reported as incomplete
proptest! {
    #[test]
    fn prop_packet_prefixes_incomplete(
        opcode in 0i32..1024,
        payload in prop::collection::vec(any::<u8>(), 0..300),
        cut in any::<prop::sample::Index>(),
    ) {
        let bytes = Packet::new(opcode, payload).to_bytes().unwrap();
        let cut = cut.index(bytes.len());
        let err = decode_packet(&bytes[..cut]).expect_err("truncated packet must fail");

        prop_assert!(err.is_incomplete());
        prop_assert_eq!(err.consumed(), cut);
    }
}

// Property: encoding into a short buffer reports exactly what fit
proptest! {
    #[test]
    fn prop_packet_short_buffer_partial(
        payload in prop::collection::vec(any::<u8>(), 0..300),
        room in any::<prop::sample::Index>(),
    ) {
        let packet = Packet::new(7, payload);
        let full = packet.to_bytes().unwrap();
        let room = room.index(full.len());
        let mut buf = vec![0u8; room];

        let err = encode_packet(&mut buf, &packet).expect_err("short buffer must fail");
        prop_assert_eq!(err, CodecError::BufferTooSmall { consumed: room, expected: full.len() });
        prop_assert_eq!(&buf[..], &full[..room]);
    }
}
