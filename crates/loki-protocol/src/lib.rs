//! # loki-protocol
//!
//! Message-level operations for the Loki messaging protocol, used
//! alongside the envelope primitives in `loki-crypto`.
//!
//! This crate provides:
//! - **Canonical payloads**: deterministic, order-fixed serialization of
//!   message fields prior to signing
//! - **Message signing**: Ed25519 signatures rendered as lowercase hex
//!
//! Key storage, transport, and session negotiation are out of scope;
//! callers supply key material and carry the resulting envelopes and
//! signatures themselves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod signing;

pub use error::{ProtocolError, Result};
