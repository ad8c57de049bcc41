//! Deterministic message signing over a canonical payload.
//!
//! A message signature covers a canonical byte string built by strict,
//! order-dependent concatenation of the message fields (see
//! [`canonical_payload`]). The construction is deterministic: the same
//! fields, version, and key always yield the same signature.
//!
//! The canonicalization is deliberately fragile. Field order and trimming
//! rules must be reproduced exactly by every peer or signatures silently
//! diverge; only `sig_version` is carried, not a hash of the field schema.
//! Do not reorder fields without bumping the version.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ProtocolError, Result};

/// Size of a message signing key in bytes.
pub const SIGNING_KEY_SIZE: usize = 32;

/// Size of a raw message signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// A quoted message embedded in a note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteQuote {
    /// Identifier of the quoted message.
    pub id: u64,
    /// Author of the quoted message.
    pub author: String,
    /// Text of the quoted message.
    pub text: String,
}

/// The note annotation carried alongside a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteValue {
    /// Message timestamp in milliseconds.
    pub timestamp: u64,
    /// Optional quote of an earlier message.
    pub quote: Option<NoteQuote>,
}

/// The message body being signed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdnMessage {
    /// Message text. Leading/trailing whitespace is not covered by the
    /// signature.
    pub text: String,
    /// Identifier of the message being replied to, if any. Only covered
    /// by the signature when a quote is also present.
    pub reply_to: Option<u64>,
}

/// A private key for message signing.
pub struct MessageSigningKey {
    key: SigningKey,
}

impl MessageSigningKey {
    /// Generate a new random signing key.
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Signature` if the input is not exactly
    /// 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SIGNING_KEY_SIZE] = bytes.try_into().map_err(|_| {
            ProtocolError::Signature(format!(
                "signing key must be {} bytes, got {}",
                SIGNING_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self {
            key: SigningKey::from_bytes(&arr),
        })
    }

    /// Get the corresponding verifying key.
    pub fn public_key(&self) -> MessageVerifyingKey {
        MessageVerifyingKey {
            key: self.key.verifying_key(),
        }
    }
}

impl std::fmt::Debug for MessageSigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MessageSigningKey([REDACTED])")
    }
}

/// A public key for message signature verification.
#[derive(Clone)]
pub struct MessageVerifyingKey {
    key: VerifyingKey,
}

impl MessageVerifyingKey {
    /// Create from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Signature` if the bytes are not a valid
    /// curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SIGNING_KEY_SIZE] = bytes.try_into().map_err(|_| {
            ProtocolError::Signature(format!(
                "verifying key must be {} bytes, got {}",
                SIGNING_KEY_SIZE,
                bytes.len()
            ))
        })?;
        let key = VerifyingKey::from_bytes(&arr)
            .map_err(|e| ProtocolError::Signature(format!("invalid verifying key: {e}")))?;
        Ok(Self { key })
    }

    /// Get the key as bytes.
    pub fn to_bytes(&self) -> [u8; SIGNING_KEY_SIZE] {
        self.key.to_bytes()
    }
}

impl std::fmt::Debug for MessageVerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.key.to_bytes();
        write!(f, "MessageVerifyingKey({:02x}{:02x}..)", bytes[0], bytes[1])
    }
}

/// Build the canonical signature payload for a message.
///
/// Strict, order-dependent concatenation, UTF-8 encoded:
///
/// 1. `message.text`, trimmed of leading/trailing whitespace
/// 2. `note.timestamp` as its decimal string
/// 3. If `note.quote` is present: `quote.id`, `quote.author`,
///    `quote.text` trimmed; and if `message.reply_to` is also present,
///    `reply_to` as its decimal string
/// 4. `sig_version` as its decimal string, always last
///
/// No separators are inserted between fields; the layout is fixed by the
/// version number alone.
pub fn canonical_payload(sig_version: u32, note: &NoteValue, message: &AdnMessage) -> Vec<u8> {
    let mut payload = String::new();
    payload.push_str(message.text.trim());
    payload.push_str(&note.timestamp.to_string());
    if let Some(quote) = &note.quote {
        payload.push_str(&quote.id.to_string());
        payload.push_str(&quote.author);
        payload.push_str(quote.text.trim());
        if let Some(reply_to) = message.reply_to {
            payload.push_str(&reply_to.to_string());
        }
    }
    payload.push_str(&sig_version.to_string());
    payload.into_bytes()
}

/// Sign a message, returning the signature as lowercase hex.
///
/// Deterministic: identical fields, version, and key always produce the
/// same signature, which makes the output usable as an integrity token.
pub fn sign_message(
    sig_version: u32,
    key: &MessageSigningKey,
    note: &NoteValue,
    message: &AdnMessage,
) -> String {
    let payload = canonical_payload(sig_version, note, message);
    let signature = key.key.sign(&payload);

    trace!(sig_version, payload_len = payload.len(), "signed message");
    hex::encode(signature.to_bytes())
}

/// Verify a hex-encoded message signature.
///
/// Rebuilds the canonical payload from the supplied fields and checks the
/// signature against it.
///
/// # Errors
///
/// Returns `ProtocolError::Format` if the hex string is malformed or the
/// wrong length, and `ProtocolError::InvalidSignature` if the signature
/// does not verify.
pub fn verify_message(
    sig_version: u32,
    public: &MessageVerifyingKey,
    note: &NoteValue,
    message: &AdnMessage,
    hex_signature: &str,
) -> Result<()> {
    let raw = hex::decode(hex_signature)
        .map_err(|e| ProtocolError::Format(format!("invalid hex signature: {e}")))?;
    let arr: [u8; SIGNATURE_SIZE] = raw.as_slice().try_into().map_err(|_| {
        ProtocolError::Format(format!(
            "signature must be {} bytes, got {}",
            SIGNATURE_SIZE,
            raw.len()
        ))
    })?;
    let signature = Signature::from_bytes(&arr);

    let payload = canonical_payload(sig_version, note, message);
    public
        .key
        .verify(&payload, &signature)
        .map_err(|_| ProtocolError::InvalidSignature)
}
