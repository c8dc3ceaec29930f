//! Per-curve operation tables
//!
//! Each curve is a zero-sized type implementing [`EddsaVariant`], carrying
//! its constants, hash function and curve engine. The signer, verifier and
//! key derivation are written once, generic over the variant.

use edcrypt_algorithms::ec::ed25519::{Edwards25519, ED25519_LIMBS};
use edcrypt_algorithms::ec::ed448::{Edwards448, ED448_LIMBS};
use edcrypt_algorithms::ec::{EdwardsCurve, EdwardsPoint, Residue};
use sha2::{Digest, Sha512};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use zeroize::Zeroize;

use super::curve::Curve;
use super::prehash::PreHash;
use super::{ED25519_KEY_SIZE, ED448_KEY_SIZE, MAX_CONTEXT_SIZE, PREHASH_DIGEST_SIZE};
use crate::error::{Error, Result};

/// Largest hash output used by any variant (SHAKE256 for Ed448).
pub(crate) const MAX_HASH_SIZE: usize = 114;

/// Longest domain separation prefix: 32-byte label, flag, length, context.
pub(crate) const MAX_DOM_SIZE: usize = 32 + 2 + MAX_CONTEXT_SIZE;

/// Point type of a variant's curve.
pub(crate) type VariantPoint<V, const N: usize> = EdwardsPoint<<V as EddsaVariant<N>>::Curve, N>;

/// Scalar (mod L) type of a variant's curve.
pub(crate) type VariantScalar<V, const N: usize> =
    Residue<<<V as EddsaVariant<N>>::Curve as EdwardsCurve<N>>::Order, N>;

/// Constants and primitives of one RFC 8032 curve/hash pairing.
pub trait EddsaVariant<const N: usize>: 'static {
    /// Curve engine parameters
    type Curve: EdwardsCurve<N>;

    /// Curve identity
    const CURVE: Curve;
    /// Encoded point / seed / scalar length
    const KEY_SIZE: usize;
    /// Output length of `H`
    const HASH_SIZE: usize;
    /// Magic bytes opening the domain separation prefix
    const DOM_LABEL: &'static [u8];
    /// Whether the prefix is present in pure mode without a context
    const DOM_ALWAYS: bool;

    /// `H(parts[0] ‖ parts[1] ‖ …)`, writing `HASH_SIZE` bytes to `out`.
    fn hash(parts: &[&[u8]], out: &mut [u8]);

    /// Finalises a caller's pre-hash state to the 64-byte digest.
    fn finalize_prehash(prehash: PreHash, out: &mut [u8; PREHASH_DIGEST_SIZE]) -> Result<()>;

    /// Clamps the low half of the expanded seed in place.
    fn clamp(scalar: &mut [u8]);

    /// Writes the domain separation prefix into `out`, returning its length.
    ///
    /// `dom = label ‖ phflag ‖ len(context) ‖ context`, or empty for Ed25519
    /// in pure mode with an empty context.
    fn dom(prehashed: bool, context: &[u8], out: &mut [u8; MAX_DOM_SIZE]) -> usize {
        debug_assert!(context.len() <= MAX_CONTEXT_SIZE);
        if !Self::DOM_ALWAYS && !prehashed && context.is_empty() {
            return 0;
        }
        let label = Self::DOM_LABEL.len();
        out[..label].copy_from_slice(Self::DOM_LABEL);
        out[label] = prehashed as u8;
        out[label + 1] = context.len() as u8;
        out[label + 2..label + 2 + context.len()].copy_from_slice(context);
        label + 2 + context.len()
    }
}

/// Ed25519: edwards25519 with SHA-512.
#[derive(Debug, Clone, Copy)]
pub struct Ed25519Variant;

impl EddsaVariant<ED25519_LIMBS> for Ed25519Variant {
    type Curve = Edwards25519;

    const CURVE: Curve = Curve::Ed25519;
    const KEY_SIZE: usize = ED25519_KEY_SIZE;
    const HASH_SIZE: usize = 64;
    const DOM_LABEL: &'static [u8] = b"SigEd25519 no Ed25519 collisions";
    const DOM_ALWAYS: bool = false;

    fn hash(parts: &[&[u8]], out: &mut [u8]) {
        let mut hasher = Sha512::new();
        for part in parts {
            Digest::update(&mut hasher, part);
        }
        out.copy_from_slice(&hasher.finalize());
    }

    fn finalize_prehash(prehash: PreHash, out: &mut [u8; PREHASH_DIGEST_SIZE]) -> Result<()> {
        match prehash {
            PreHash::Sha512(h) => {
                out.copy_from_slice(&h.finalize());
                Ok(())
            }
            PreHash::Shake256(_) => Err(Error::PrehashMismatch {
                curve: Self::CURVE,
                expected: Self::CURVE.prehash_name(),
            }),
        }
    }

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 248;
        scalar[31] &= 127;
        scalar[31] |= 64;
    }
}

/// Ed448: edwards448 with SHAKE256.
#[derive(Debug, Clone, Copy)]
pub struct Ed448Variant;

impl EddsaVariant<ED448_LIMBS> for Ed448Variant {
    type Curve = Edwards448;

    const CURVE: Curve = Curve::Ed448;
    const KEY_SIZE: usize = ED448_KEY_SIZE;
    const HASH_SIZE: usize = MAX_HASH_SIZE;
    const DOM_LABEL: &'static [u8] = b"SigEd448";
    const DOM_ALWAYS: bool = true;

    fn hash(parts: &[&[u8]], out: &mut [u8]) {
        let mut hasher = Shake256::default();
        for part in parts {
            Update::update(&mut hasher, part);
        }
        hasher.finalize_xof().read(out);
    }

    fn finalize_prehash(prehash: PreHash, out: &mut [u8; PREHASH_DIGEST_SIZE]) -> Result<()> {
        match prehash {
            PreHash::Shake256(h) => {
                h.finalize_xof().read(out);
                Ok(())
            }
            PreHash::Sha512(_) => Err(Error::PrehashMismatch {
                curve: Self::CURVE,
                expected: Self::CURVE.prehash_name(),
            }),
        }
    }

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 252;
        scalar[55] |= 128;
        scalar[56] = 0;
    }
}

/// `H(parts…) mod L`, reading the hash output little-endian.
pub(crate) fn hash_to_scalar<V: EddsaVariant<N>, const N: usize>(
    parts: &[&[u8]],
) -> VariantScalar<V, N> {
    let mut h = [0u8; MAX_HASH_SIZE];
    V::hash(parts, &mut h[..V::HASH_SIZE]);
    let scalar = Residue::from_bytes_wide(&h[..V::HASH_SIZE]);
    h.zeroize();
    scalar
}
