//! Message signing for the Loki protocol.
//!
//! Signatures cover a canonical, order-fixed concatenation of the message
//! fields rather than a structured serialization; see
//! [`message_sig::canonical_payload`] for the exact layout.
//!
//! ## Usage
//!
//! ```
//! use loki_protocol::signing::{
//!     sign_message, verify_message, AdnMessage, MessageSigningKey, NoteValue,
//! };
//!
//! let key = MessageSigningKey::generate();
//! let note = NoteValue { timestamp: 1234567890, quote: None };
//! let message = AdnMessage { text: "Hello, Loki!".to_string(), reply_to: None };
//!
//! let signature = sign_message(1, &key, &note, &message);
//! verify_message(1, &key.public_key(), &note, &message, &signature).unwrap();
//! ```

pub mod message_sig;

pub use message_sig::{
    canonical_payload, sign_message, verify_message, AdnMessage, MessageSigningKey,
    MessageVerifyingKey, NoteQuote, NoteValue, SIGNATURE_SIZE, SIGNING_KEY_SIZE,
};
