//! # loki-crypto
//!
//! Cryptographic envelope primitives for the Loki messaging protocol.
//!
//! This crate provides:
//! - **X25519** Diffie-Hellman key agreement
//! - **HMAC-SHA256** symmetric key derivation (domain-separated with the
//!   fixed protocol tag `"LOKI"`)
//! - **DH envelope codec**: IV-prefixed authenticated encryption, with a
//!   base64 text wrapper for text-only transports
//! - **GCM envelope codec**: direct AES-256-GCM with nonce+tag framing
//!
//! The two envelope codecs share the same 32-byte key type but are not
//! interchangeable; which codec applies is fixed by the call site.
//!
//! ## Security
//!
//! All secret data uses `zeroize` for secure memory cleanup. Nothing in
//! this crate logs key material or plaintext.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod derive;
pub mod dh_envelope;
pub mod error;
pub mod gcm_envelope;
pub mod x25519;

#[cfg(test)]
mod proptests;

pub use derive::{derive_symmetric_key, SymmetricKey, KEY_DOMAIN, KEY_SIZE};
pub use error::{CryptoError, Result};
pub use x25519::{
    compute_shared_secret, SharedSecret, X25519PrivateKey, X25519PublicKey, PRIVATE_KEY_SIZE,
    PUBLIC_KEY_SIZE, SHARED_SECRET_SIZE,
};
