//! Symmetric key derivation from a DH agreement.
//!
//! The raw X25519 shared secret is run through HMAC-SHA256 keyed with the
//! fixed protocol tag `"LOKI"` to produce the 32-byte envelope key. The
//! tag is a domain separator, not a secret: it binds derived keys to this
//! protocol so the same EC key pair used elsewhere cannot be reused
//! cross-protocol.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::x25519::{X25519PrivateKey, X25519PublicKey};
use crate::{CryptoError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Domain-separation tag for symmetric key derivation.
///
/// Fixed protocol constant. Changing it is a protocol-breaking change,
/// not a tunable.
pub const KEY_DOMAIN: &[u8] = b"LOKI";

/// Size of a derived symmetric key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// A 256-bit symmetric envelope key.
///
/// Always the HMAC-SHA256 output of a DH shared secret, regardless of
/// curve or input sizes. Zeroized on drop; never serialized by this crate.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Create a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyLength` if the input is not exactly
    /// 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the key as a byte slice.
    ///
    /// # Security
    ///
    /// Be careful with this - avoid logging or persisting the returned bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

/// Derive the symmetric envelope key shared by two DH peers.
///
/// Computes the X25519 agreement and hashes it:
/// `HMAC-SHA256(key = "LOKI", message = shared_secret)`.
///
/// Deterministic and commutative: both sides of a DH pair derive the same
/// key, and repeated calls with the same inputs return identical output.
pub fn derive_symmetric_key(
    private_key: &X25519PrivateKey,
    public_key: &X25519PublicKey,
) -> SymmetricKey {
    let shared = private_key.diffie_hellman(public_key);

    let mut mac = HmacSha256::new_from_slice(KEY_DOMAIN).expect("HMAC can take key of any size");
    mac.update(shared.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&digest);
    SymmetricKey { bytes }
}
