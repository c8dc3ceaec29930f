//! EdDSA key material and raw-byte importers

use core::fmt;

use edcrypt_algorithms::ec::ed25519::ED25519_LIMBS;
use edcrypt_algorithms::ec::ed448::ED448_LIMBS;
use edcrypt_algorithms::ec::{Ed25519Point, Ed448Point, EdwardsPoint, Residue};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::curve::Curve;
use super::variant::{
    Ed25519Variant, Ed448Variant, EddsaVariant, VariantPoint, VariantScalar, MAX_HASH_SIZE,
};
use crate::error::{Error, Result};

/// Secret half of a key: the seed and what RFC 8032 derives from it.
#[derive(Clone)]
pub(crate) struct SecretMaterial {
    /// Seed as supplied or generated (32 or 57 bytes)
    seed: Vec<u8>,
    /// Clamped secret scalar `a`, reduced mod L, little-endian
    scalar: Vec<u8>,
    /// Upper half of `H(seed)`, keyed into the nonce hash
    prefix: Vec<u8>,
}

impl SecretMaterial {
    pub(crate) fn scalar_bytes(&self) -> &[u8] {
        &self.scalar
    }

    pub(crate) fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

impl Zeroize for SecretMaterial {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl Drop for SecretMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Decoded public point `A`, kept so verification never decompresses it.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PublicPoint {
    Ed25519(Ed25519Point),
    Ed448(Ed448Point),
}

/// An EdDSA key on one of the two supported curves.
///
/// Holds the public point, both decoded and in canonical encoding, and,
/// for private keys, the seed-derived secret material. Keys are validated when constructed and
/// never change afterwards, so they can be shared freely between threads.
#[derive(Clone)]
pub struct EccKey {
    curve: Curve,
    secret: Option<SecretMaterial>,
    public: Vec<u8>,
    point: PublicPoint,
}

// Implement Debug without exposing key material
impl fmt::Debug for EccKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EccKey")
            .field("curve", &self.curve)
            .field("has_private", &self.has_private())
            .field("public", &HexBytes(&self.public))
            .finish()
    }
}

struct HexBytes<'a>(&'a [u8]);

impl fmt::Debug for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl PartialEq for EccKey {
    /// Keys are equal when they name the same public point and either both
    /// or neither carry a private part.
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
            && self.public == other.public
            && self.has_private() == other.has_private()
    }
}

impl Eq for EccKey {}

/// Clears the secret material, leaving a public-only key.
impl Zeroize for EccKey {
    fn zeroize(&mut self) {
        if let Some(secret) = self.secret.as_mut() {
            secret.zeroize();
        }
        self.secret = None;
    }
}

impl EccKey {
    /// Derives a private key from a raw seed (RFC 8032 §5.1.5 / §5.2.5).
    ///
    /// # Errors
    ///
    /// [`Error::KeyFormat`] if `seed` is not exactly as long as the curve's
    /// key encoding.
    pub fn from_seed(curve: Curve, seed: &[u8]) -> Result<Self> {
        if seed.len() != curve.key_size() {
            return Err(Error::KeyFormat { len: seed.len() });
        }
        Ok(derive(curve, seed))
    }

    /// Builds a public-only key from a canonical point encoding.
    ///
    /// # Errors
    ///
    /// [`Error::KeyFormat`] for a length mismatch, [`Error::InvalidPublicKey`]
    /// when the bytes are not a canonical encoding of a curve point.
    pub fn from_public_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.key_size() {
            return Err(Error::KeyFormat { len: bytes.len() });
        }
        let point = match curve {
            Curve::Ed25519 => {
                Option::<Ed25519Point>::from(Ed25519Point::decode(bytes)).map(PublicPoint::Ed25519)
            }
            Curve::Ed448 => {
                Option::<Ed448Point>::from(Ed448Point::decode(bytes)).map(PublicPoint::Ed448)
            }
        }
        .ok_or(Error::InvalidPublicKey)?;
        Ok(EccKey {
            curve,
            secret: None,
            public: bytes.to_vec(),
            point,
        })
    }

    /// Generates a fresh private key from a cryptographically secure RNG.
    pub fn generate<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Self {
        let mut buf = [0u8; MAX_HASH_SIZE];
        let seed = &mut buf[..curve.key_size()];
        rng.fill_bytes(seed);
        let key = derive(curve, seed);
        seed.zeroize();
        key
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Whether the key can sign.
    pub fn has_private(&self) -> bool {
        self.secret.is_some()
    }

    /// Canonical encoding of the public point.
    pub fn public_bytes(&self) -> &[u8] {
        &self.public
    }

    /// Raw seed of a private key.
    ///
    /// This is the only secret that needs storing; everything else is
    /// derived from it again by [`EccKey::from_seed`].
    pub fn seed(&self) -> Option<&[u8]> {
        self.secret.as_ref().map(|s| s.seed.as_slice())
    }

    /// A public-only copy of this key.
    pub fn public_key(&self) -> EccKey {
        EccKey {
            curve: self.curve,
            secret: None,
            public: self.public.clone(),
            point: self.point,
        }
    }

    pub(crate) fn secret(&self) -> Option<&SecretMaterial> {
        self.secret.as_ref()
    }

    pub(crate) fn point(&self) -> &PublicPoint {
        &self.point
    }
}

fn derive(curve: Curve, seed: &[u8]) -> EccKey {
    let (secret, public, point) = match curve {
        Curve::Ed25519 => {
            let (secret, public, a) = expand_seed::<Ed25519Variant, ED25519_LIMBS>(seed);
            (secret, public, PublicPoint::Ed25519(a))
        }
        Curve::Ed448 => {
            let (secret, public, a) = expand_seed::<Ed448Variant, ED448_LIMBS>(seed);
            (secret, public, PublicPoint::Ed448(a))
        }
    };
    EccKey {
        curve,
        secret: Some(secret),
        public,
        point,
    }
}

/// Hash-and-clamp key expansion, generic over the curve.
fn expand_seed<V: EddsaVariant<N>, const N: usize>(
    seed: &[u8],
) -> (SecretMaterial, Vec<u8>, VariantPoint<V, N>) {
    let mut h = [0u8; MAX_HASH_SIZE];
    V::hash(&[seed], &mut h[..V::HASH_SIZE]);

    let k = V::KEY_SIZE;
    V::clamp(&mut h[..k]);
    let mut a: VariantScalar<V, N> = Residue::from_bytes_wide(&h[..k]);

    let mut scalar = vec![0u8; k];
    a.write_le_bytes(&mut scalar);
    let point = EdwardsPoint::<V::Curve, N>::mul_base(&a);
    let mut public = vec![0u8; k];
    point.encode(&mut public);

    let secret = SecretMaterial {
        seed: seed.to_vec(),
        scalar,
        prefix: h[k..2 * k].to_vec(),
    };
    h.zeroize();
    a.zeroize();

    (secret, public, point)
}

/// Imports a public key, selecting the curve by encoding length.
///
/// 32 bytes select Ed25519 and 57 bytes Ed448.
///
/// # Errors
///
/// [`Error::KeyFormat`] for any other length, [`Error::InvalidPublicKey`]
/// if the bytes are not a valid point encoding.
pub fn import_public_key(bytes: &[u8]) -> Result<EccKey> {
    let curve = Curve::from_key_len(bytes.len()).ok_or(Error::KeyFormat { len: bytes.len() })?;
    let key = EccKey::from_public_bytes(curve, bytes)?;

    #[cfg(feature = "trace")]
    tracing::debug!(curve = %curve, len = bytes.len(), "imported EdDSA public key");

    Ok(key)
}

/// Imports a private key from its raw seed, selecting the curve by length.
///
/// # Errors
///
/// [`Error::KeyFormat`] unless `bytes` is 32 or 57 bytes long.
pub fn import_private_key(bytes: &[u8]) -> Result<EccKey> {
    let curve = Curve::from_key_len(bytes.len()).ok_or(Error::KeyFormat { len: bytes.len() })?;
    let key = EccKey::from_seed(curve, bytes)?;

    #[cfg(feature = "trace")]
    tracing::debug!(curve = %curve, len = bytes.len(), "imported EdDSA private key");

    Ok(key)
}
