//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on the two Edwards curves standardised for EdDSA
//! by RFC 8032. Both curves share one generic engine (`edwards`) and differ
//! only in their parameter tables and square-root routines.

pub mod ed25519;
pub mod ed448;
pub mod edwards;

pub use ed25519::{
    FieldElement as Ed25519FieldElement, Point as Ed25519Point, Scalar as Ed25519Scalar,
};
pub use ed448::{
    FieldElement as Ed448FieldElement, Point as Ed448Point, Scalar as Ed448Scalar,
};
pub use edwards::{EdwardsCurve, EdwardsPoint, MontgomeryParams, Residue};
