//! # edcrypt
//!
//! Pure Rust EdDSA (RFC 8032) over edwards25519 and edwards448.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edcrypt = "0.3"
//! ```
//!
//! ```
//! use edcrypt::prelude::*;
//!
//! let key = import_private_key(&[7u8; 32]).unwrap();
//! let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
//! let signature = scheme.sign(b"hello").unwrap();
//!
//! let public = import_public_key(key.public_bytes()).unwrap();
//! eddsa::new(&public, RFC8032_MODE, None)
//!     .unwrap()
//!     .verify(b"hello", &signature)
//!     .unwrap();
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `trace`: `tracing` debug events from key import and scheme creation
//! - `serde`: serialization of curve identifiers
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edcrypt-api`]: Error type and signature traits
//! - [`edcrypt-internal`]: Constant-time and byte-order helpers
//! - [`edcrypt-algorithms`]: Field, scalar and point arithmetic
//! - [`edcrypt-sign`]: The EdDSA schemes

pub use edcrypt_algorithms as algorithms;
pub use edcrypt_api as api;
pub use edcrypt_internal as internal;
pub use edcrypt_sign as sign;

pub use edcrypt_sign::eddsa;

/// Common imports for edcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive, SignatureSerialize};

    pub use crate::sign::eddsa::{
        self, import_private_key, import_public_key, Curve, EccKey, EdDsaSigScheme, Ed25519,
        Ed448, MessageInput, PreHash, RFC8032_MODE,
    };

    // Re-export zeroize for secure memory handling
    pub use zeroize::{Zeroize, Zeroizing};
}
