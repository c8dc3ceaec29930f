//! Deterministic EdDSA signing (RFC 8032 §5.1.6 / §5.2.6)

use edcrypt_algorithms::ec::{EdwardsPoint, Residue};
use zeroize::Zeroize;

use super::key::EccKey;
use super::prehash::MessageInput;
use super::variant::{hash_to_scalar, EddsaVariant, VariantScalar, MAX_DOM_SIZE};
use super::PREHASH_DIGEST_SIZE;
use crate::error::{Error, Result};

/// Signs `message` with `key` under `context`, returning `R ‖ S`.
///
/// The key's curve must match `V`; the scheme context guarantees this.
pub(crate) fn sign<V: EddsaVariant<N>, const N: usize>(
    key: &EccKey,
    context: &[u8],
    message: MessageInput<'_>,
) -> Result<Vec<u8>> {
    debug_assert_eq!(key.curve(), V::CURVE);
    let secret = key.secret().ok_or(Error::MissingPrivateKey)?;

    let prehashed = message.is_prehashed();
    let mut digest = [0u8; PREHASH_DIGEST_SIZE];
    let msg: &[u8] = match message {
        MessageInput::Raw(m) => m,
        MessageInput::Prehashed(ph) => {
            V::finalize_prehash(ph, &mut digest)?;
            &digest
        }
    };

    let mut dom_buf = [0u8; MAX_DOM_SIZE];
    let dom_len = V::dom(prehashed, context, &mut dom_buf);
    let dom = &dom_buf[..dom_len];

    let k = V::KEY_SIZE;
    let mut signature = vec![0u8; 2 * k];

    // r = H(dom ‖ prefix ‖ M) mod L, R = [r]B
    let mut r: VariantScalar<V, N> = hash_to_scalar::<V, N>(&[dom, secret.prefix(), msg]);
    EdwardsPoint::<V::Curve, N>::mul_base(&r).encode(&mut signature[..k]);

    // k = H(dom ‖ R ‖ A ‖ M) mod L
    let challenge: VariantScalar<V, N> =
        hash_to_scalar::<V, N>(&[dom, &signature[..k], key.public_bytes(), msg]);

    // S = (r + k·a) mod L
    let mut a: VariantScalar<V, N> = Residue::from_bytes_wide(secret.scalar_bytes());
    let mut s = r.add(&challenge.mul(&a));
    s.write_le_bytes(&mut signature[k..]);

    r.zeroize();
    a.zeroize();
    s.zeroize();
    Ok(signature)
}
