//! Digital Signature Schemes
//!
//! This crate implements the EdDSA signature schemes of RFC 8032 over
//! edwards25519 and edwards448, including the context (Ed25519ctx) and
//! pre-hash (Ed25519ph, Ed448ph) variants.
//!
//! # Features
//!
//! - `trace`: emit `tracing` debug events when keys are imported and schemes
//!   are created (curve and sizes only, never key material)
//! - `serde`: `Serialize` / `Deserialize` for [`eddsa::Curve`]

pub mod eddsa;
pub mod error;

pub use eddsa::{
    import_private_key, import_public_key, Curve, EccKey, EdDsaSigScheme, Ed25519,
    Ed25519Signature, Ed448, Ed448Signature, MessageInput, PreHash,
};
pub use error::{Error, Result};

// Hash states accepted for pre-hash mode
pub use sha2::Sha512;
pub use sha3::Shake256;
