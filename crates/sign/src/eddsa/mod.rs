//! EdDSA signatures (RFC 8032)
//!
//! Ed25519 and Ed448 in pure and pre-hash mode, with optional contexts:
//!
//! | | Ed25519 | Ed448 |
//! |---|---|---|
//! | key / point / scalar | 32 bytes | 57 bytes |
//! | signature | 64 bytes | 114 bytes |
//! | `H` | SHA-512 | SHAKE256, 114 bytes |
//! | pre-hash | SHA-512 | SHAKE256, 64 bytes |
//! | domain prefix | only with a context or pre-hash | always |
//!
//! Keys are imported with [`import_private_key`] / [`import_public_key`]
//! (curve selected by length) and bound to a context by [`new`], which
//! returns an [`EdDsaSigScheme`]. Pass `&[u8]` to sign in pure mode, or a
//! [`PreHash`] (or a bare `Sha512` / `Shake256`) for pre-hash mode.

mod curve;
mod key;
mod prehash;
mod scheme;
mod signer;
mod typed;
mod variant;
mod verifier;

pub use curve::Curve;
pub use key::{import_private_key, import_public_key, EccKey};
pub use prehash::{MessageInput, PreHash};
pub use scheme::{new, EdDsaSigScheme};
pub use typed::{Ed25519, Ed25519Signature, Ed448, Ed448Signature};
pub use variant::{Ed25519Variant, Ed448Variant, EddsaVariant};

/// Ed25519 public key, seed and scalar size in bytes
pub const ED25519_KEY_SIZE: usize = 32;

/// Ed25519 signature size in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 2 * ED25519_KEY_SIZE;

/// Ed448 public key, seed and scalar size in bytes
pub const ED448_KEY_SIZE: usize = 57;

/// Ed448 signature size in bytes
pub const ED448_SIGNATURE_SIZE: usize = 2 * ED448_KEY_SIZE;

/// Digest length fed to the signer in pre-hash mode, for both curves
pub const PREHASH_DIGEST_SIZE: usize = 64;

/// Longest context string RFC 8032 allows
pub const MAX_CONTEXT_SIZE: usize = 255;

/// The only mode token the factory accepts
pub const RFC8032_MODE: &str = "rfc8032";
