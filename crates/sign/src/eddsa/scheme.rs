//! The EdDSA scheme context and its factory

use edcrypt_algorithms::ec::ed25519::ED25519_LIMBS;
use edcrypt_algorithms::ec::ed448::ED448_LIMBS;

use super::curve::Curve;
use super::key::{EccKey, PublicPoint};
use super::prehash::MessageInput;
use super::variant::{Ed25519Variant, Ed448Variant};
use super::{signer, verifier, MAX_CONTEXT_SIZE, RFC8032_MODE};
use crate::error::{Error, Result};

/// A key bound to a context string, ready to sign or verify.
///
/// The scheme borrows its key and holds no mutable state, so one instance
/// can serve any number of concurrent calls.
///
/// # Example
///
/// ```
/// use edcrypt_sign::eddsa::{import_private_key, EdDsaSigScheme};
///
/// # fn main() -> edcrypt_sign::error::Result<()> {
/// let key = import_private_key(&[7u8; 32])?;
/// let scheme = EdDsaSigScheme::new(&key, "rfc8032", Some(b"example".as_slice()))?;
///
/// let signature = scheme.sign(b"hello")?;
/// scheme.verify(b"hello", &signature)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EdDsaSigScheme<'k> {
    key: &'k EccKey,
    context: Vec<u8>,
}

impl<'k> EdDsaSigScheme<'k> {
    /// Validates the parameters and binds them to `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedMode`] unless `mode` is `"rfc8032"`
    /// - [`Error::ContextTooLong`] if `context` exceeds 255 bytes
    pub fn new(key: &'k EccKey, mode: &str, context: Option<&[u8]>) -> Result<Self> {
        if mode != RFC8032_MODE {
            return Err(Error::UnsupportedMode(mode.to_string()));
        }
        let context = context.unwrap_or_default();
        if context.len() > MAX_CONTEXT_SIZE {
            return Err(Error::ContextTooLong { len: context.len() });
        }

        #[cfg(feature = "trace")]
        tracing::debug!(
            curve = %key.curve(),
            context_len = context.len(),
            private = key.has_private(),
            "created EdDSA scheme"
        );

        Ok(EdDsaSigScheme {
            key,
            context: context.to_vec(),
        })
    }

    /// Whether the bound key carries private material.
    pub fn can_sign(&self) -> bool {
        self.key.has_private()
    }

    /// Curve of the bound key.
    pub fn curve(&self) -> Curve {
        self.key.curve()
    }

    /// The context string (empty when none was given).
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// The bound key.
    pub fn key(&self) -> &'k EccKey {
        self.key
    }

    /// Signs a message, or a pre-hash state over it.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingPrivateKey`] for a public-only key
    /// - [`Error::PrehashMismatch`] for a hash state of the wrong primitive
    pub fn sign<'m>(&self, message: impl Into<MessageInput<'m>>) -> Result<Vec<u8>> {
        let message = message.into();
        match self.key.curve() {
            Curve::Ed25519 => {
                signer::sign::<Ed25519Variant, ED25519_LIMBS>(self.key, &self.context, message)
            }
            Curve::Ed448 => {
                signer::sign::<Ed448Variant, ED448_LIMBS>(self.key, &self.context, message)
            }
        }
    }

    /// Verifies a signature over a message, or a pre-hash state over it.
    ///
    /// # Errors
    ///
    /// - [`Error::SignatureLength`] if `signature` has the wrong length
    /// - [`Error::NotAuthentic`] if the signature does not verify
    /// - [`Error::PrehashMismatch`] for a hash state of the wrong primitive
    pub fn verify<'m>(&self, message: impl Into<MessageInput<'m>>, signature: &[u8]) -> Result<()> {
        let message = message.into();
        match self.key.point() {
            PublicPoint::Ed25519(a) => verifier::verify::<Ed25519Variant, ED25519_LIMBS>(
                self.key,
                a,
                &self.context,
                message,
                signature,
            ),
            PublicPoint::Ed448(a) => verifier::verify::<Ed448Variant, ED448_LIMBS>(
                self.key,
                a,
                &self.context,
                message,
                signature,
            ),
        }
    }
}

/// Creates a signature scheme object for `key`.
///
/// `mode` must be `"rfc8032"`; `context` defaults to the empty string.
pub fn new<'k>(key: &'k EccKey, mode: &str, context: Option<&[u8]>) -> Result<EdDsaSigScheme<'k>> {
    EdDsaSigScheme::new(key, mode, context)
}
