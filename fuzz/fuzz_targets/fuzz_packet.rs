#![no_main]

use libfuzzer_sys::fuzz_target;
use mcproto::{decode_packet, encode_packet};

fuzz_target!(|data: &[u8]| {
    // Any successfully decoded packet must re-encode to the bytes it came from
    if let Ok((packet, n)) = decode_packet(data) {
        assert!(n <= data.len());
        let mut buf = vec![0u8; packet.encoded_len()];
        if let Ok(m) = encode_packet(&mut buf, &packet) {
            // Non-canonical length prefixes decode fine but re-encode shorter
            assert!(m <= n);
        }
    }
});
