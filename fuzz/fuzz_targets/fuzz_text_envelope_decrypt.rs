//! Fuzz target for the base64 text envelope wrapper.
//!
//! Arbitrary strings must fail cleanly at the base64 or envelope layer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use loki_crypto::{dh_envelope, SymmetricKey};

fuzz_target!(|text: &str| {
    let key = SymmetricKey::from_bytes(&[0x5au8; 32]).unwrap();

    let _ = dh_envelope::decrypt_base64(&key, text);
});
