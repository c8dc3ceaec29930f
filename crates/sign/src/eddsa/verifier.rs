//! EdDSA verification (RFC 8032 §5.1.7 / §5.2.7)

use edcrypt_algorithms::ec::{EdwardsCurve, EdwardsPoint, MontgomeryParams, Residue};
use edcrypt_internal::constant_time::{ct_is_zero, ct_lt_limbs};
use edcrypt_internal::endian::le_bytes_to_limbs;
use subtle::ConstantTimeEq;

use super::key::EccKey;
use super::prehash::MessageInput;
use super::variant::{hash_to_scalar, EddsaVariant, VariantPoint, VariantScalar, MAX_DOM_SIZE};
use super::PREHASH_DIGEST_SIZE;
use crate::error::{Error, Result};

/// Verifies `signature` over `message` under `context` with `key`, whose
/// decoded public point is `a_point`.
///
/// Every cryptographic rejection (undecodable `R`, `S ≥ L`, failed group
/// equation) reports [`Error::NotAuthentic`].
pub(crate) fn verify<V: EddsaVariant<N>, const N: usize>(
    key: &EccKey,
    a_point: &VariantPoint<V, N>,
    context: &[u8],
    message: MessageInput<'_>,
    signature: &[u8],
) -> Result<()> {
    debug_assert_eq!(key.curve(), V::CURVE);
    let k = V::KEY_SIZE;
    if signature.len() != 2 * k {
        return Err(Error::SignatureLength {
            expected: 2 * k,
            actual: signature.len(),
        });
    }

    let prehashed = message.is_prehashed();
    let mut digest = [0u8; PREHASH_DIGEST_SIZE];
    let msg: &[u8] = match message {
        MessageInput::Raw(m) => m,
        MessageInput::Prehashed(ph) => {
            V::finalize_prehash(ph, &mut digest)?;
            &digest
        }
    };

    let (r_bytes, s_bytes) = signature.split_at(k);

    let r_point = Option::<EdwardsPoint<V::Curve, N>>::from(EdwardsPoint::decode(r_bytes))
        .ok_or(Error::NotAuthentic)?;
    let s = decode_scalar::<V, N>(s_bytes).ok_or(Error::NotAuthentic)?;

    let mut dom_buf = [0u8; MAX_DOM_SIZE];
    let dom_len = V::dom(prehashed, context, &mut dom_buf);
    let dom = &dom_buf[..dom_len];

    let challenge: VariantScalar<V, N> =
        hash_to_scalar::<V, N>(&[dom, r_bytes, key.public_bytes(), msg]);

    // [8][S]B = [8]R + [8][k]A
    let lhs = EdwardsPoint::<V::Curve, N>::mul_base(&s).mul_by_eight();
    let rhs = r_point.add(&a_point.mul(&challenge)).mul_by_eight();

    if bool::from(lhs.ct_eq(&rhs)) {
        Ok(())
    } else {
        Err(Error::NotAuthentic)
    }
}

/// Decodes `S`, accepting only the canonical range `0 ≤ S < L`.
///
/// Bytes past the limb width (the last byte for Ed448) must be zero.
fn decode_scalar<V: EddsaVariant<N>, const N: usize>(bytes: &[u8]) -> Option<VariantScalar<V, N>> {
    let limb_len = bytes.len().min(8 * N);
    let limbs = le_bytes_to_limbs::<N>(&bytes[..limb_len]);
    let order = <<V::Curve as EdwardsCurve<N>>::Order as MontgomeryParams<N>>::MODULUS;

    let in_range = ct_is_zero(&bytes[limb_len..]) & ct_lt_limbs(&limbs, &order);
    if bool::from(in_range) {
        Some(Residue::from_limbs(&limbs))
    } else {
        None
    }
}
