//! Direct AES-256-GCM envelope codec.
//!
//! The envelope format used for storage-server payloads:
//! `nonce (12 bytes) || ciphertext (plaintext length) || tag (16 bytes)`.
//! Unlike the DH envelope, the tag is part of the framing: it is always
//! the last 16 bytes of the blob.
//!
//! ## Security Notes
//!
//! - A fresh random nonce is drawn for every encryption
//! - Tag verification is constant-time inside the AEAD
//! - No additional authenticated data is used
//! - Not interchangeable with [`crate::dh_envelope`] despite sharing the
//!   same 32-byte key type

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::derive::SymmetricKey;
use crate::{CryptoError, Result};

/// Size of the GCM nonce in bytes. Protocol constant, never negotiated.
pub const NONCE_LENGTH: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LENGTH: usize = 16;

/// Minimum size of a well-formed GCM envelope (empty plaintext).
pub const MIN_ENVELOPE_LENGTH: usize = NONCE_LENGTH + TAG_LENGTH;

/// Encrypt a payload into a GCM envelope.
///
/// Output layout: `nonce || ciphertext || tag`, where the ciphertext has
/// exactly the plaintext's length and the tag occupies the last 16 bytes.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_with_rng(&mut OsRng, key, plaintext)
}

/// Encrypt a payload using a caller-supplied random source.
///
/// The RNG must be cryptographically secure; see
/// [`crate::dh_envelope::encrypt_with_rng`] for the injection rationale.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &SymmetricKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LENGTH];
    rng.fill_bytes(&mut nonce);

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    // The AEAD returns ciphertext with the tag appended, which is exactly
    // the `ciphertext || tag` tail of the envelope layout.
    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::Encryption("GCM envelope seal failed".into()))?;

    let mut envelope = Vec::with_capacity(NONCE_LENGTH + sealed.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&sealed);

    trace!(envelope_len = envelope.len(), "sealed GCM envelope");
    Ok(envelope)
}

/// Decrypt a GCM envelope.
///
/// # Errors
///
/// Returns `CryptoError::Format` if the blob is too short to contain a
/// nonce and tag, and `CryptoError::Authentication` if tag verification
/// fails. No partial plaintext is returned on failure.
pub fn decrypt(key: &SymmetricKey, envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < MIN_ENVELOPE_LENGTH {
        return Err(CryptoError::Format(format!(
            "GCM envelope too short: {} bytes, minimum {}",
            envelope.len(),
            MIN_ENVELOPE_LENGTH
        )));
    }
    let (nonce, sealed) = envelope.split_at(NONCE_LENGTH);

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CryptoError::Authentication)?;

    trace!(envelope_len = envelope.len(), "opened GCM envelope");
    Ok(plaintext)
}
