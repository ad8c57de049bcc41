//! Property-based tests for the envelope primitives.
//!
//! These tests use proptest to verify the protocol's laws hold for
//! arbitrary inputs:
//!
//! - Roundtrip properties (both envelope codecs, the text wrapper)
//! - Length laws (exact framing overhead per codec)
//! - Tamper detection (any flipped byte fails decryption)
//! - Key agreement commutativity and derivation determinism

use proptest::prelude::*;

use crate::derive::KEY_SIZE;
use crate::dh_envelope::IV_LENGTH;
use crate::gcm_envelope::{NONCE_LENGTH, TAG_LENGTH};
use crate::{derive_symmetric_key, dh_envelope, gcm_envelope, SymmetricKey, X25519PrivateKey};

fn arb_key() -> impl Strategy<Value = SymmetricKey> {
    prop::array::uniform32(any::<u8>())
        .prop_map(|bytes| SymmetricKey::from_bytes(&bytes).unwrap())
}

// ==================== DH Envelope (Codec A) ====================

proptest! {
    /// Encryption followed by decryption returns the original plaintext.
    #[test]
    fn dh_envelope_roundtrip(key in arb_key(), plaintext: Vec<u8>) {
        let envelope = dh_envelope::encrypt(&key, &plaintext).unwrap();
        let decrypted = dh_envelope::decrypt(&key, &envelope).unwrap();
        prop_assert_eq!(plaintext, decrypted);
    }

    /// Envelope length is the IV plus the AEAD output.
    #[test]
    fn dh_envelope_length_law(key in arb_key(), plaintext: Vec<u8>) {
        let envelope = dh_envelope::encrypt(&key, &plaintext).unwrap();
        prop_assert_eq!(envelope.len(), IV_LENGTH + plaintext.len() + TAG_LENGTH);
    }

    /// Flipping any byte of the envelope fails decryption.
    #[test]
    fn dh_envelope_tamper_detection(
        key in arb_key(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100),
        tamper_index in any::<usize>()
    ) {
        let mut envelope = dh_envelope::encrypt(&key, &plaintext).unwrap();
        let idx = tamper_index % envelope.len();
        envelope[idx] ^= 0xFF;

        prop_assert!(dh_envelope::decrypt(&key, &envelope).is_err());
    }

    /// Decryption with a different key fails.
    #[test]
    fn dh_envelope_wrong_key_fails(
        k1 in arb_key(),
        k2 in arb_key(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100)
    ) {
        prop_assume!(k1.as_bytes() != k2.as_bytes());

        let envelope = dh_envelope::encrypt(&k1, &plaintext).unwrap();
        prop_assert!(dh_envelope::decrypt(&k2, &envelope).is_err());
    }

    /// The text wrapper roundtrips through base64.
    #[test]
    fn text_envelope_roundtrip(key in arb_key(), plaintext: Vec<u8>) {
        let text = dh_envelope::encrypt_base64(&key, &plaintext).unwrap();
        let decrypted = dh_envelope::decrypt_base64(&key, &text).unwrap();
        prop_assert_eq!(plaintext, decrypted);
    }

    /// Text envelopes are always valid base64 over the binary format.
    #[test]
    fn text_envelope_is_base64_of_binary(key in arb_key(), plaintext: Vec<u8>) {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let text = dh_envelope::encrypt_base64(&key, &plaintext).unwrap();
        let envelope = STANDARD.decode(&text).unwrap();
        let decrypted = dh_envelope::decrypt(&key, &envelope).unwrap();
        prop_assert_eq!(plaintext, decrypted);
    }
}

// ==================== GCM Envelope (Codec B) ====================

proptest! {
    /// Encryption followed by decryption returns the original plaintext.
    #[test]
    fn gcm_envelope_roundtrip(key in arb_key(), plaintext: Vec<u8>) {
        let envelope = gcm_envelope::encrypt(&key, &plaintext).unwrap();
        let decrypted = gcm_envelope::decrypt(&key, &envelope).unwrap();
        prop_assert_eq!(plaintext, decrypted);
    }

    /// Envelope length is exactly nonce + plaintext + tag.
    #[test]
    fn gcm_envelope_length_law(key in arb_key(), plaintext: Vec<u8>) {
        let envelope = gcm_envelope::encrypt(&key, &plaintext).unwrap();
        prop_assert_eq!(
            envelope.len(),
            NONCE_LENGTH + plaintext.len() + TAG_LENGTH
        );
    }

    /// Flipping any byte of the envelope fails authentication.
    #[test]
    fn gcm_envelope_tamper_detection(
        key in arb_key(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100),
        tamper_index in any::<usize>()
    ) {
        let mut envelope = gcm_envelope::encrypt(&key, &plaintext).unwrap();
        let idx = tamper_index % envelope.len();
        envelope[idx] ^= 0xFF;

        let result = gcm_envelope::decrypt(&key, &envelope);
        prop_assert!(matches!(result, Err(crate::CryptoError::Authentication)));
    }

    /// Decryption with a different key fails.
    #[test]
    fn gcm_envelope_wrong_key_fails(
        k1 in arb_key(),
        k2 in arb_key(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100)
    ) {
        prop_assume!(k1.as_bytes() != k2.as_bytes());

        let envelope = gcm_envelope::encrypt(&k1, &plaintext).unwrap();
        prop_assert!(gcm_envelope::decrypt(&k2, &envelope).is_err());
    }

    /// A GCM envelope never opens as a DH envelope and vice versa.
    #[test]
    fn envelope_formats_not_interchangeable(
        key in arb_key(),
        plaintext in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let gcm = gcm_envelope::encrypt(&key, &plaintext).unwrap();
        prop_assert!(dh_envelope::decrypt(&key, &gcm).is_err());

        let dh = dh_envelope::encrypt(&key, &plaintext).unwrap();
        prop_assert!(gcm_envelope::decrypt(&key, &dh).is_err());
    }
}

// ==================== Key Derivation ====================

proptest! {
    /// Both sides of a DH pair derive the same 32-byte key.
    #[test]
    fn derivation_commutative(_seed in any::<u64>()) {
        let alice = X25519PrivateKey::generate();
        let bob = X25519PrivateKey::generate();

        let alice_key = derive_symmetric_key(&alice, &bob.public_key());
        let bob_key = derive_symmetric_key(&bob, &alice.public_key());

        prop_assert_eq!(alice_key.as_bytes(), bob_key.as_bytes());
        prop_assert_eq!(alice_key.as_bytes().len(), KEY_SIZE);
    }

    /// Derivation is deterministic across repeated calls.
    #[test]
    fn derivation_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let alice = X25519PrivateKey::from_bytes(&seed).unwrap();
        let bob_public = X25519PrivateKey::generate().public_key();

        let k1 = derive_symmetric_key(&alice, &bob_public);
        let k2 = derive_symmetric_key(&alice, &bob_public);

        prop_assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    /// A key derived on either side of the agreement opens the peer's envelopes.
    #[test]
    fn derived_keys_interoperate_across_peers(
        plaintext in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let alice = X25519PrivateKey::generate();
        let bob = X25519PrivateKey::generate();

        let alice_key = derive_symmetric_key(&alice, &bob.public_key());
        let bob_key = derive_symmetric_key(&bob, &alice.public_key());

        let envelope = gcm_envelope::encrypt(&alice_key, &plaintext).unwrap();
        let decrypted = gcm_envelope::decrypt(&bob_key, &envelope).unwrap();

        prop_assert_eq!(plaintext, decrypted);
    }
}
