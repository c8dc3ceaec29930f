//! Generic Edwards curve engine
//!
//! The engine is parameterised by two tables:
//!
//! - [`MontgomeryParams`] describes an odd modulus `m < 2^(64N)` together with
//!   the constants needed for Montgomery multiplication. It is used both for
//!   the base field `F_p` and for the scalar ring `Z/LZ`.
//! - [`EdwardsCurve`] describes a curve `a·x² + y² = 1 + d·x²·y²` with
//!   `a ∈ {1, −1}`, its base point and its canonical encoding width.
//!
//! All integers cross the byte boundary little-endian, as RFC 8032 requires.

mod point;
mod residue;

pub use point::EdwardsPoint;
pub use residue::Residue;

use subtle::Choice;

/// Constants describing a modulus for [`Residue`] arithmetic.
///
/// `MODULUS` must be odd and smaller than `2^(64N)`.
pub trait MontgomeryParams<const N: usize>: 'static {
    /// The modulus `m`, little-endian limbs.
    const MODULUS: [u64; N];
    /// `R² mod m` with `R = 2^(64N)`.
    const R2: [u64; N];
    /// `−m⁻¹ mod 2^64`.
    const INV: u64;
}

/// Parameter table of an Edwards curve usable with [`EdwardsPoint`].
///
/// The addition law used by the engine is complete for these curves because
/// `a` is a square and `d` is a non-square in the base field.
pub trait EdwardsCurve<const N: usize>: 'static {
    /// Base field `F_p`.
    type Base: MontgomeryParams<N>;
    /// Scalar ring modulo the prime subgroup order `L`.
    type Order: MontgomeryParams<N>;

    /// Human readable curve name.
    const NAME: &'static str;
    /// Length of a canonical point encoding in bytes.
    const ENCODED_LEN: usize;
    /// `true` for `a = −1` (twisted), `false` for `a = 1`.
    const A_IS_MINUS_ONE: bool;
    /// Curve constant `d`, standard (non-Montgomery) limbs.
    const D: [u64; N];
    /// Base point x-coordinate, standard limbs.
    const BASE_X: [u64; N];
    /// Base point y-coordinate, standard limbs.
    const BASE_Y: [u64; N];

    /// Computes a square root of `u / v`.
    ///
    /// Returns `(1, x)` with `v·x² = u` when one exists and `(0, _)` otherwise.
    fn sqrt_ratio(
        u: &Residue<Self::Base, N>,
        v: &Residue<Self::Base, N>,
    ) -> (Choice, Residue<Self::Base, N>);
}

/// Largest encoding width handled by the engine (edwards448 uses 57 bytes).
pub(crate) const MAX_ENCODED_LEN: usize = 64;
