//! edwards25519 Curve Primitives
//!
//! The twisted Edwards curve `−x² + y² = 1 + d·x²·y²` over `F_p` with
//! `p = 2^255 − 19` and `d = −121665/121666`, birationally equivalent to
//! Curve25519. The base point has prime order
//! `L = 2^252 + 27742317777372353535851937790883648493`; the cofactor is 8.

mod constants;

pub use constants::{ED25519_LIMBS, ED25519_POINT_SIZE, ED25519_SCALAR_SIZE};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::edwards::{EdwardsCurve, EdwardsPoint, MontgomeryParams, Residue};

/// Base field modulus `p = 2^255 − 19`.
#[derive(Debug, Clone, Copy)]
pub struct FieldParams;

impl MontgomeryParams<ED25519_LIMBS> for FieldParams {
    const MODULUS: [u64; ED25519_LIMBS] = constants::P;
    const R2: [u64; ED25519_LIMBS] = constants::P_R2;
    const INV: u64 = constants::P_INV;
}

/// Prime subgroup order `L`.
#[derive(Debug, Clone, Copy)]
pub struct OrderParams;

impl MontgomeryParams<ED25519_LIMBS> for OrderParams {
    const MODULUS: [u64; ED25519_LIMBS] = constants::L;
    const R2: [u64; ED25519_LIMBS] = constants::L_R2;
    const INV: u64 = constants::L_INV;
}

/// Parameter table for edwards25519.
#[derive(Debug, Clone, Copy)]
pub struct Edwards25519;

/// Element of `F_p`.
pub type FieldElement = Residue<FieldParams, ED25519_LIMBS>;
/// Integer modulo `L`.
pub type Scalar = Residue<OrderParams, ED25519_LIMBS>;
/// Point on edwards25519.
pub type Point = EdwardsPoint<Edwards25519, ED25519_LIMBS>;

impl EdwardsCurve<ED25519_LIMBS> for Edwards25519 {
    type Base = FieldParams;
    type Order = OrderParams;

    const NAME: &'static str = "edwards25519";
    const ENCODED_LEN: usize = ED25519_POINT_SIZE;
    const A_IS_MINUS_ONE: bool = true;
    const D: [u64; ED25519_LIMBS] = constants::D;
    const BASE_X: [u64; ED25519_LIMBS] = constants::BASE_X;
    const BASE_Y: [u64; ED25519_LIMBS] = constants::BASE_Y;

    /// RFC 8032 §5.1.3: `x = u·v³·(u·v⁷)^((p−5)/8)`, corrected by `√−1`
    /// when `v·x² = −u`.
    fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);
        let x = u.mul(&v3).mul(&u.mul(&v7).pow_vartime(&constants::SQRT_EXP));

        let check = v.mul(&x.square());
        let correct = check.ct_eq(u);
        let flipped = check.ct_eq(&u.neg());

        let rotated = x.mul(&FieldElement::from_limbs(&constants::SQRT_M1));
        let x = FieldElement::conditional_select(&x, &rotated, flipped);
        (correct | flipped, x)
    }
}

/// Get the standard base point B of edwards25519
pub fn base_point() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: `[scalar]B`
pub fn scalar_mult_base(scalar: &Scalar) -> Point {
    Point::mul_base(scalar)
}
