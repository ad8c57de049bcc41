//! IV-prefixed DH envelope codec.
//!
//! The envelope format used for direct peer payloads:
//! `IV (16 bytes) || authenticated ciphertext`. The ciphertext embeds its
//! own integrity tag, so the framing carries nothing but the IV.
//!
//! A base64 text wrapper is provided for transports that only carry text
//! (tokens, proxy payloads).
//!
//! ## Security Notes
//!
//! - A fresh random IV is drawn for every encryption
//! - Decryption returns no partial plaintext on failure
//! - This format is NOT interchangeable with the GCM envelope format in
//!   [`crate::gcm_envelope`], even though both use the same 32-byte key

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::derive::SymmetricKey;
use crate::{CryptoError, Result};

/// AES-256-GCM instantiated with a 128-bit nonce, matching the envelope's
/// 16-byte IV field.
type DhCipher = AesGcm<Aes256, U16>;

/// Size of the envelope IV in bytes. Protocol constant, never negotiated.
pub const IV_LENGTH: usize = 16;

/// Encrypt a payload into an IV-prefixed envelope.
///
/// Draws a fresh 16-byte IV from the OS random source and seals the
/// plaintext under it. Output layout: `IV || ciphertext`, where the
/// ciphertext includes the authentication tag.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_with_rng(&mut OsRng, key, plaintext)
}

/// Encrypt a payload using a caller-supplied random source.
///
/// The RNG must be cryptographically secure; this exists so embedders can
/// route all randomness through a single injected source rather than the
/// process-default one.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &SymmetricKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let mut iv = [0u8; IV_LENGTH];
    rng.fill_bytes(&mut iv);

    let cipher = DhCipher::new(key.as_bytes().into());
    let ciphertext = cipher
        .encrypt(Nonce::<U16>::from_slice(&iv), plaintext)
        .map_err(|_| CryptoError::Encryption("DH envelope seal failed".into()))?;

    let mut envelope = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);

    trace!(envelope_len = envelope.len(), "sealed DH envelope");
    Ok(envelope)
}

/// Decrypt an IV-prefixed envelope.
///
/// # Errors
///
/// Returns `CryptoError::Decryption` if the envelope is shorter than the
/// IV, the key is wrong, or the ciphertext fails its integrity check. No
/// partial plaintext is returned on failure.
pub fn decrypt(key: &SymmetricKey, envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < IV_LENGTH {
        return Err(CryptoError::Decryption);
    }
    let (iv, ciphertext) = envelope.split_at(IV_LENGTH);

    let cipher = DhCipher::new(key.as_bytes().into());
    let plaintext = cipher
        .decrypt(Nonce::<U16>::from_slice(iv), ciphertext)
        .map_err(|_| CryptoError::Decryption)?;

    trace!(envelope_len = envelope.len(), "opened DH envelope");
    Ok(plaintext)
}

/// Encrypt a payload into a base64 text envelope.
///
/// The binary envelope is identical to [`encrypt`]'s output; only the
/// outer framing differs. Used where transport fields are text-only.
pub fn encrypt_base64(key: &SymmetricKey, plaintext: &[u8]) -> Result<String> {
    encrypt_base64_with_rng(&mut OsRng, key, plaintext)
}

/// Encrypt into a base64 text envelope using a caller-supplied random
/// source.
pub fn encrypt_base64_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &SymmetricKey,
    plaintext: &[u8],
) -> Result<String> {
    let envelope = encrypt_with_rng(rng, key, plaintext)?;
    Ok(BASE64.encode(envelope))
}

/// Decrypt a base64 text envelope.
///
/// # Errors
///
/// Returns `CryptoError::Format` if the input is not valid base64, and
/// `CryptoError::Decryption` for any failure in the inner envelope.
pub fn decrypt_base64(key: &SymmetricKey, text: &str) -> Result<Vec<u8>> {
    let envelope = BASE64
        .decode(text)
        .map_err(|e| CryptoError::Format(format!("invalid base64 envelope: {e}")))?;
    decrypt(key, &envelope)
}
