//! Curve identities supported by the EdDSA schemes

use core::fmt;
use core::str::FromStr;

use super::{ED25519_KEY_SIZE, ED25519_SIGNATURE_SIZE, ED448_KEY_SIZE, ED448_SIGNATURE_SIZE};
use crate::error::Error;

/// One of the two RFC 8032 curve/hash pairings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// edwards25519 with SHA-512
    Ed25519,
    /// edwards448 with SHAKE256
    Ed448,
}

impl Curve {
    /// Length of an encoded point, seed or signature scalar.
    pub const fn key_size(self) -> usize {
        match self {
            Curve::Ed25519 => ED25519_KEY_SIZE,
            Curve::Ed448 => ED448_KEY_SIZE,
        }
    }

    /// Length of a signature (`R ‖ S`).
    pub const fn signature_size(self) -> usize {
        match self {
            Curve::Ed25519 => ED25519_SIGNATURE_SIZE,
            Curve::Ed448 => ED448_SIGNATURE_SIZE,
        }
    }

    /// Bit length of the prime group order.
    pub const fn order_bits(self) -> usize {
        match self {
            Curve::Ed25519 => 253,
            Curve::Ed448 => 446,
        }
    }

    /// Name of the hash primitive required for pre-hash mode.
    pub const fn prehash_name(self) -> &'static str {
        match self {
            Curve::Ed25519 => "SHA-512",
            Curve::Ed448 => "SHAKE256",
        }
    }

    /// Selects a curve from the length of a key encoding.
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            ED25519_KEY_SIZE => Some(Curve::Ed25519),
            ED448_KEY_SIZE => Some(Curve::Ed448),
            _ => None,
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::Ed25519 => "Ed25519",
            Curve::Ed448 => "Ed448",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ed25519" | "ed25519" => Ok(Curve::Ed25519),
            "Ed448" | "ed448" => Ok(Curve::Ed448),
            other => Err(Error::UnsupportedCurve(other.to_string())),
        }
    }
}
