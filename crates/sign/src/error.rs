//! Error types for the signature crate

use crate::eddsa::Curve;
use thiserror::Error as ThisError;

/// Errors that can occur during EdDSA operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key bytes of a length that matches neither curve
    #[error("not an EdDSA key of recognized length ({len} bytes)")]
    KeyFormat { len: usize },

    /// Public key bytes that do not decode to a curve point
    #[error("invalid EdDSA public key")]
    InvalidPublicKey,

    /// Curve name other than Ed25519 or Ed448
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// Signature of the wrong length for the key's curve
    #[error("signature is not authentic (bad length)")]
    SignatureLength { expected: usize, actual: usize },

    /// Mode token other than `"rfc8032"`
    #[error("unsupported EdDSA mode: {0:?}")]
    UnsupportedMode(String),

    /// Context longer than 255 bytes
    #[error("context is too long ({len} bytes, at most 255)")]
    ContextTooLong { len: usize },

    /// Signing requested with a public-only key
    #[error("signing requires a private key")]
    MissingPrivateKey,

    /// Pre-hash computed with the wrong primitive for the curve
    #[error("{curve} pre-hash mode requires {expected}")]
    PrehashMismatch { curve: Curve, expected: &'static str },

    /// Verification failed
    #[error("signature is not authentic")]
    NotAuthentic,
}

/// Result type for EdDSA operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether this error reports a signature that did not verify.
    ///
    /// Both the bad-length rejection and the cryptographic rejection count.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::NotAuthentic | Error::SignatureLength { .. })
    }
}

// Convert to api::Error
impl From<Error> for edcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::KeyFormat { .. } | Error::InvalidPublicKey | Error::MissingPrivateKey => {
                edcrypt_api::Error::InvalidKey {
                    context: "eddsa key",
                    message: err.to_string(),
                }
            }
            Error::SignatureLength { expected, actual } => edcrypt_api::Error::InvalidLength {
                context: "eddsa signature",
                expected,
                actual,
            },
            Error::UnsupportedCurve(_)
            | Error::UnsupportedMode(_)
            | Error::ContextTooLong { .. }
            | Error::PrehashMismatch { .. } => edcrypt_api::Error::InvalidParameter {
                context: "eddsa",
                message: err.to_string(),
            },
            Error::NotAuthentic => edcrypt_api::Error::AuthenticationFailed {
                context: "eddsa verify",
                message: err.to_string(),
            },
        }
    }
}
