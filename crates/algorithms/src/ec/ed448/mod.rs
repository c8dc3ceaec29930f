//! edwards448 Curve Primitives
//!
//! The untwisted Edwards curve `x² + y² = 1 + d·x²·y²` over `F_p` with
//! `p = 2^448 − 2^224 − 1` and `d = −39081` ("Goldilocks"). The base point
//! has prime order `L ≈ 2^446`; the cofactor is 4.
//!
//! Points encode to 57 bytes: 56 bytes of `y`, then a byte whose only
//! permitted bit is the sign of `x` in position 7.

mod constants;

pub use constants::{ED448_LIMBS, ED448_POINT_SIZE, ED448_SCALAR_SIZE};

use subtle::{Choice, ConstantTimeEq};

use super::edwards::{EdwardsCurve, EdwardsPoint, MontgomeryParams, Residue};

/// Base field modulus `p = 2^448 − 2^224 − 1`.
#[derive(Debug, Clone, Copy)]
pub struct FieldParams;

impl MontgomeryParams<ED448_LIMBS> for FieldParams {
    const MODULUS: [u64; ED448_LIMBS] = constants::P;
    const R2: [u64; ED448_LIMBS] = constants::P_R2;
    const INV: u64 = constants::P_INV;
}

/// Prime subgroup order `L`.
#[derive(Debug, Clone, Copy)]
pub struct OrderParams;

impl MontgomeryParams<ED448_LIMBS> for OrderParams {
    const MODULUS: [u64; ED448_LIMBS] = constants::L;
    const R2: [u64; ED448_LIMBS] = constants::L_R2;
    const INV: u64 = constants::L_INV;
}

/// Parameter table for edwards448.
#[derive(Debug, Clone, Copy)]
pub struct Edwards448;

/// Element of `F_p`.
pub type FieldElement = Residue<FieldParams, ED448_LIMBS>;
/// Integer modulo `L`.
pub type Scalar = Residue<OrderParams, ED448_LIMBS>;
/// Point on edwards448.
pub type Point = EdwardsPoint<Edwards448, ED448_LIMBS>;

impl EdwardsCurve<ED448_LIMBS> for Edwards448 {
    type Base = FieldParams;
    type Order = OrderParams;

    const NAME: &'static str = "edwards448";
    const ENCODED_LEN: usize = ED448_POINT_SIZE;
    const A_IS_MINUS_ONE: bool = false;
    const D: [u64; ED448_LIMBS] = constants::D;
    const BASE_X: [u64; ED448_LIMBS] = constants::BASE_X;
    const BASE_Y: [u64; ED448_LIMBS] = constants::BASE_Y;

    /// RFC 8032 §5.2.3: `x = u³·v·(u⁵·v³)^((p−3)/4)`.
    fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let u2 = u.square();
        let u3 = u2.mul(u);
        let u5 = u3.mul(&u2);
        let v3 = v.square().mul(v);
        let x = u3.mul(v).mul(&u5.mul(&v3).pow_vartime(&constants::SQRT_EXP));

        let is_root = v.mul(&x.square()).ct_eq(u);
        (is_root, x)
    }
}

/// Get the standard base point B of edwards448
pub fn base_point() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: `[scalar]B`
pub fn scalar_mult_base(scalar: &Scalar) -> Point {
    Point::mul_base(scalar)
}
