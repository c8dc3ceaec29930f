//! Trait definitions implemented by edcrypt algorithms

pub mod signature;

pub use signature::{Signature, SignatureDerive, SignatureSerialize};
