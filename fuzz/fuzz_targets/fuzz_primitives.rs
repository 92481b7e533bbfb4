#![no_main]

use libfuzzer_sys::fuzz_target;
use mcproto::{decode_position, decode_string, decode_var_int, decode_var_long};

fuzz_target!(|data: &[u8]| {
    // Decoders must never panic or report more than they were given
    if let Ok((_, n)) = decode_var_int(data) {
        assert!(n <= data.len());
    }
    if let Ok((_, n)) = decode_var_long(data) {
        assert!(n <= data.len());
    }
    if let Ok((_, n)) = decode_string(data) {
        assert!(n <= data.len());
    }
    let _ = decode_position(data);
});
