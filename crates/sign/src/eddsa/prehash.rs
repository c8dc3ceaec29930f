//! Message inputs for pure and pre-hash signing

use core::fmt;

use sha2::{Digest, Sha512};
use sha3::digest::Update;
use sha3::Shake256;

/// A running hash over a message, for the pre-hash variants (Ed25519ph, Ed448ph).
///
/// The scheme finalises the state itself, to the 64-byte digest RFC 8032
/// prescribes for both curves.
#[derive(Clone)]
pub enum PreHash {
    /// SHA-512 state, for Ed25519ph
    Sha512(Sha512),
    /// SHAKE256 state, for Ed448ph
    Shake256(Shake256),
}

impl PreHash {
    /// Empty SHA-512 state.
    pub fn sha512() -> Self {
        PreHash::Sha512(Sha512::new())
    }

    /// Empty SHAKE256 state.
    pub fn shake256() -> Self {
        PreHash::Shake256(Shake256::default())
    }

    /// Absorbs more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            PreHash::Sha512(h) => Digest::update(h, data),
            PreHash::Shake256(h) => Update::update(h, data),
        }
    }

    /// Name of the primitive.
    pub fn name(&self) -> &'static str {
        match self {
            PreHash::Sha512(_) => "SHA-512",
            PreHash::Shake256(_) => "SHAKE256",
        }
    }
}

impl fmt::Debug for PreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreHash").field(&self.name()).finish()
    }
}

impl From<Sha512> for PreHash {
    fn from(h: Sha512) -> Self {
        PreHash::Sha512(h)
    }
}

impl From<Shake256> for PreHash {
    fn from(h: Shake256) -> Self {
        PreHash::Shake256(h)
    }
}

/// What gets signed or verified: the message itself, or a hash state over it.
#[derive(Debug, Clone)]
pub enum MessageInput<'m> {
    /// Pure mode
    Raw(&'m [u8]),
    /// Pre-hash mode
    Prehashed(PreHash),
}

impl MessageInput<'_> {
    /// Whether this input selects pre-hash mode.
    pub fn is_prehashed(&self) -> bool {
        matches!(self, MessageInput::Prehashed(_))
    }
}

impl<'m> From<&'m [u8]> for MessageInput<'m> {
    fn from(msg: &'m [u8]) -> Self {
        MessageInput::Raw(msg)
    }
}

impl<'m, const N: usize> From<&'m [u8; N]> for MessageInput<'m> {
    fn from(msg: &'m [u8; N]) -> Self {
        MessageInput::Raw(msg)
    }
}

impl<'m> From<&'m Vec<u8>> for MessageInput<'m> {
    fn from(msg: &'m Vec<u8>) -> Self {
        MessageInput::Raw(msg)
    }
}

impl From<PreHash> for MessageInput<'_> {
    fn from(h: PreHash) -> Self {
        MessageInput::Prehashed(h)
    }
}

impl From<Sha512> for MessageInput<'_> {
    fn from(h: Sha512) -> Self {
        MessageInput::Prehashed(PreHash::Sha512(h))
    }
}

impl From<Shake256> for MessageInput<'_> {
    fn from(h: Shake256) -> Self {
        MessageInput::Prehashed(PreHash::Shake256(h))
    }
}
