//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Human readable detail
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        /// Operation that rejected the signature
        context: &'static str,
        /// Human readable detail
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Human readable detail
        message: String,
    },

    /// Authentication failed error
    AuthenticationFailed {
        /// Operation that failed
        context: &'static str,
        /// Human readable detail
        message: String,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Human readable detail
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::AuthenticationFailed { message, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// `InvalidLength` carries no message and is returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength { .. } => self,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::AuthenticationFailed { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
