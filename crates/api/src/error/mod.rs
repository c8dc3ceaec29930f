//! Error handling for the edcrypt ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::Other {
            context: "array conversion",
            message: "slice length does not match array length".to_string(),
        }
    }
}

impl std::error::Error for Error {}
