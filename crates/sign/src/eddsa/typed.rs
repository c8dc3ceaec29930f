//! Ed25519 and Ed448 behind the library-wide [`Signature`] trait
//!
//! These wrappers use pure mode with an empty context, the plain "Ed25519"
//! and "Ed448" algorithms of RFC 8032. Contexts and pre-hashing are reached
//! through [`EdDsaSigScheme`] directly.

use core::fmt;

use edcrypt_api::error::ResultExt;
use edcrypt_api::{
    Error as ApiError, Result as ApiResult, Signature, SignatureDerive, SignatureSerialize,
};
use edcrypt_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::curve::Curve;
use super::key::EccKey;
use super::scheme::EdDsaSigScheme;
use super::{
    ED25519_KEY_SIZE, ED25519_SIGNATURE_SIZE, ED448_KEY_SIZE, ED448_SIGNATURE_SIZE, RFC8032_MODE,
};
use crate::error::Error;

/// Ed25519 signature scheme
///
/// # Security Considerations
///
/// - Always use a cryptographically secure RNG for key generation
/// - Verify public key authenticity through secure channels
/// - Never reuse seeds across different applications or purposes
pub struct Ed25519;

/// Ed448 signature scheme
pub struct Ed448;

/// Ed25519 signature (64 bytes: R || S)
#[derive(Clone, Zeroize)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

/// Ed448 signature (114 bytes: R || S)
#[derive(Clone, Zeroize)]
pub struct Ed448Signature(pub [u8; ED448_SIGNATURE_SIZE]);

// Compared in constant time
impl PartialEq for Ed25519Signature {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for Ed25519Signature {}

impl PartialEq for Ed448Signature {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for Ed448Signature {}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

impl fmt::Debug for Ed448Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed448Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed448Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn check_curve(key: &EccKey, curve: Curve, context: &'static str) -> ApiResult<()> {
    if key.curve() == curve {
        Ok(())
    } else {
        Err(ApiError::InvalidKey {
            context,
            message: format!("expected an {} key, got {}", curve, key.curve()),
        })
    }
}

fn sign_pure<const S: usize>(
    curve: Curve,
    message: &[u8],
    secret_key: &EccKey,
    context: &'static str,
) -> ApiResult<[u8; S]> {
    check_curve(secret_key, curve, context)?;
    let scheme = EdDsaSigScheme::new(secret_key, RFC8032_MODE, None).with_context(context)?;
    let signature = scheme.sign(message).with_context(context)?;
    signature.as_slice().try_into().with_context(context)
}

fn verify_pure(
    curve: Curve,
    message: &[u8],
    signature: &[u8],
    public_key: &EccKey,
    context: &'static str,
) -> ApiResult<()> {
    check_curve(public_key, curve, context)?;
    let scheme = EdDsaSigScheme::new(public_key, RFC8032_MODE, None).with_context(context)?;
    scheme.verify(message, signature).with_context(context)
}

fn signature_array<const S: usize>(bytes: &[u8], context: &'static str) -> ApiResult<[u8; S]> {
    bytes.try_into().map_err(|_| ApiError::InvalidLength {
        context,
        expected: S,
        actual: bytes.len(),
    })
}

fn export_seed(key: &EccKey, context: &'static str) -> ApiResult<Zeroizing<Vec<u8>>> {
    key.seed()
        .map(|seed| Zeroizing::new(seed.to_vec()))
        .ok_or(Error::MissingPrivateKey)
        .with_context(context)
}

impl Signature for Ed25519 {
    type PublicKey = EccKey;
    type SecretKey = EccKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = EccKey;

    fn name() -> &'static str {
        "Ed25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(EccKey::generate(Curve::Ed25519, rng))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        sign_pure(Curve::Ed25519, message, secret_key, "Ed25519::sign").map(Ed25519Signature)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        verify_pure(
            Curve::Ed25519,
            message,
            &signature.0,
            public_key,
            "Ed25519::verify",
        )
    }
}

impl Signature for Ed448 {
    type PublicKey = EccKey;
    type SecretKey = EccKey;
    type SignatureData = Ed448Signature;
    type KeyPair = EccKey;

    fn name() -> &'static str {
        "Ed448"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(EccKey::generate(Curve::Ed448, rng))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        sign_pure(Curve::Ed448, message, secret_key, "Ed448::sign").map(Ed448Signature)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        verify_pure(Curve::Ed448, message, &signature.0, public_key, "Ed448::verify")
    }
}

impl SignatureSerialize for Ed25519 {
    const PUBLIC_KEY_SIZE: usize = ED25519_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ED25519_KEY_SIZE;
    const SIGNATURE_SIZE: usize = ED25519_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.public_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        EccKey::from_public_bytes(Curve::Ed25519, bytes)
            .with_context("Ed25519::deserialize_public_key")
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> ApiResult<Zeroizing<Vec<u8>>> {
        export_seed(key, "Ed25519::serialize_secret_key")
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        EccKey::from_seed(Curve::Ed25519, bytes).with_context("Ed25519::deserialize_secret_key")
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.0.to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        signature_array(bytes, "Ed25519::deserialize_signature").map(Ed25519Signature)
    }
}

impl SignatureSerialize for Ed448 {
    const PUBLIC_KEY_SIZE: usize = ED448_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ED448_KEY_SIZE;
    const SIGNATURE_SIZE: usize = ED448_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.public_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        EccKey::from_public_bytes(Curve::Ed448, bytes).with_context("Ed448::deserialize_public_key")
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> ApiResult<Zeroizing<Vec<u8>>> {
        export_seed(key, "Ed448::serialize_secret_key")
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        EccKey::from_seed(Curve::Ed448, bytes).with_context("Ed448::deserialize_secret_key")
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.0.to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        signature_array(bytes, "Ed448::deserialize_signature").map(Ed448Signature)
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = ED25519_KEY_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        EccKey::from_seed(Curve::Ed25519, seed).with_context("Ed25519::derive_keypair")
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        check_curve(secret_key, Curve::Ed25519, "Ed25519::derive_public_key")?;
        Ok(secret_key.public_key())
    }
}

impl SignatureDerive for Ed448 {
    const MIN_SEED_SIZE: usize = ED448_KEY_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        EccKey::from_seed(Curve::Ed448, seed).with_context("Ed448::derive_keypair")
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        check_curve(secret_key, Curve::Ed448, "Ed448::derive_public_key")?;
        Ok(secret_key.public_key())
    }
}
