//! Fuzz target for hex signature parsing and verification.
//!
//! Arbitrary hex-ish strings and message fields must be rejected with an
//! error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use loki_protocol::signing::{verify_message, AdnMessage, MessageSigningKey, NoteValue};

fuzz_target!(|input: (String, String, u64)| {
    let (hex_sig, text, timestamp) = input;

    let key = MessageSigningKey::from_bytes(&[0x5au8; 32]).unwrap();
    let note = NoteValue {
        timestamp,
        quote: None,
    };
    let message = AdnMessage {
        text,
        reply_to: None,
    };

    let _ = verify_message(1, &key.public_key(), &note, &message, &hex_sig);
});
