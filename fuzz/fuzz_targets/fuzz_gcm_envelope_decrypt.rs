//! Fuzz target for GCM envelope decryption.
//!
//! Arbitrary blobs must produce a Format or Authentication error, never a
//! panic, and undersized blobs must never reach the AEAD.

#![no_main]

use libfuzzer_sys::fuzz_target;
use loki_crypto::{gcm_envelope, CryptoError, SymmetricKey};

fuzz_target!(|data: &[u8]| {
    let key = SymmetricKey::from_bytes(&[0x5au8; 32]).unwrap();

    match gcm_envelope::decrypt(&key, data) {
        // A random blob passing tag verification would be a miracle worth
        // flagging.
        Ok(_) => panic!("fuzz input authenticated under a fixed key"),
        Err(CryptoError::Format(_)) => {
            assert!(data.len() < gcm_envelope::MIN_ENVELOPE_LENGTH);
        }
        Err(CryptoError::Authentication) => {
            assert!(data.len() >= gcm_envelope::MIN_ENVELOPE_LENGTH);
        }
        Err(_) => unreachable!("unexpected error kind from gcm decrypt"),
    }
});
