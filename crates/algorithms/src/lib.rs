//! Cryptographic primitives library with constant-time implementation
//!
//! This crate provides the curve arithmetic behind the edcrypt EdDSA schemes:
//! fixed-width Montgomery residues for the base fields and group orders, and
//! extended-coordinate point arithmetic on edwards25519 and edwards448.
//!
//! # Security Features
//!
//! - Fixed iteration counts in every modular operation and scalar multiplication
//! - Branch-free selection through `subtle`
//! - Secret scalars zeroized on request (`zeroize`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Elliptic curve implementations
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::{
    Ed25519FieldElement, Ed25519Point, Ed25519Scalar, Ed448FieldElement, Ed448Point,
    Ed448Scalar,
};
