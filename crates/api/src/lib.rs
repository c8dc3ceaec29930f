//! Public API traits and types for the edcrypt library
//!
//! This crate provides the public API surface shared by the edcrypt crates:
//! the library-wide error type and the signature traits that concrete
//! schemes implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Signature, SignatureDerive, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
