//! Fixed-width modular integers in Montgomery form
//!
//! A [`Residue`] stores `a·R mod m` in `N` little-endian 64-bit limbs, with
//! `R = 2^(64N)`. Multiplication uses the CIOS variant of Montgomery
//! reduction; every operation runs a fixed number of limb iterations and
//! finishes with a masked conditional subtraction, so timing does not depend
//! on the operand values.

use core::marker::PhantomData;

use edcrypt_internal::constant_time::{ct_lt_limbs, ct_mask64};
use edcrypt_internal::endian::{le_bytes_to_limbs, limbs_to_le_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::MontgomeryParams;

/// An integer modulo `M::MODULUS`, kept fully reduced in Montgomery form.
pub struct Residue<M, const N: usize> {
    limbs: [u64; N],
    _params: PhantomData<fn() -> M>,
}

impl<M, const N: usize> Clone for Residue<M, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, const N: usize> Copy for Residue<M, N> {}

impl<M, const N: usize> Zeroize for Residue<M, N> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<M, const N: usize> core::fmt::Debug for Residue<M, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Residues may hold secret scalars.
        f.debug_struct("Residue").field("limbs", &N).finish()
    }
}

/* ========================================================================== */
/*  Limb helpers                                                              */
/* ========================================================================== */

/// a + b·c + carry, returned as (low, high).
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// a + b + carry, returned as (sum, carry).
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// a − b − borrow, returned as (difference, borrow ∈ {0, 1}).
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

impl<M: MontgomeryParams<N>, const N: usize> Residue<M, N> {
    #[inline(always)]
    const fn from_montgomery(limbs: [u64; N]) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// Subtract the modulus from `(hi, t)` once if the value is `>= m`.
    ///
    /// Requires `(hi, t) < 2m`.
    #[inline(always)]
    fn reduce_once(t: [u64; N], hi: u64) -> [u64; N] {
        let mut diff = [0u64; N];
        let mut borrow = 0u64;
        for i in 0..N {
            let (d, b) = sbb(t[i], M::MODULUS[i], borrow);
            diff[i] = d;
            borrow = b;
        }
        let (_, borrow) = sbb(hi, 0, borrow);

        // A final borrow means (hi, t) < m: keep t.
        let keep = Choice::from(borrow as u8);
        let mut out = [0u64; N];
        for i in 0..N {
            out[i] = u64::conditional_select(&diff[i], &t[i], keep);
        }
        out
    }

    /// Montgomery product `a·b·R⁻¹ mod m` (CIOS).
    ///
    /// `a` may be any N-limb value; `b` must be below the modulus.
    fn montgomery_mul(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
        let mut t = [0u64; N];
        let mut t_hi = 0u64;

        for i in 0..N {
            // t += a · b[i]
            let mut carry = 0u64;
            for j in 0..N {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (lo, t_top) = adc(t_hi, carry, 0);
            t_hi = lo;

            // t = (t + q·m) / 2^64
            let q = t[0].wrapping_mul(M::INV);
            let (_, mut carry) = mac(t[0], q, M::MODULUS[0], 0);
            for j in 1..N {
                let (lo, hi) = mac(t[j], q, M::MODULUS[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (lo, c) = adc(t_hi, carry, 0);
            t[N - 1] = lo;
            t_hi = t_top + c;
        }

        Self::reduce_once(t, t_hi)
    }

    /// Standard-form constant one, as limbs.
    #[inline(always)]
    fn one_limbs() -> [u64; N] {
        let mut one = [0u64; N];
        one[0] = 1;
        one
    }
}

/* ========================================================================== */
/*  Construction and (de)serialisation                                        */
/* ========================================================================== */

impl<M: MontgomeryParams<N>, const N: usize> Residue<M, N> {
    /// The additive identity.
    pub const fn zero() -> Self {
        Self::from_montgomery([0u64; N])
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::from_limbs(&Self::one_limbs())
    }

    /// Builds a residue from standard little-endian limbs, reducing mod `m`.
    pub fn from_limbs(limbs: &[u64; N]) -> Self {
        Self::from_montgomery(Self::montgomery_mul(limbs, &M::R2))
    }

    /// Builds a residue from limbs that must already be below the modulus.
    pub fn from_canonical_limbs(limbs: &[u64; N]) -> CtOption<Self> {
        let is_canonical = ct_lt_limbs(limbs, &M::MODULUS);
        CtOption::new(Self::from_limbs(limbs), is_canonical)
    }

    /// Builds a residue from a small integer.
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;
        Self::from_limbs(&limbs)
    }

    /// Reduces a little-endian integer of any length modulo `m`.
    ///
    /// The input is consumed in `8N`-byte chunks; chunk `k` is weighted by
    /// `R^k`, which Montgomery multiplication by `R^(k+2)` provides directly.
    pub fn from_bytes_wide(bytes: &[u8]) -> Self {
        let mut acc = Self::zero();
        let mut weight = M::R2;
        for chunk in bytes.chunks(8 * N) {
            let limbs = le_bytes_to_limbs::<N>(chunk);
            let term = Self::from_montgomery(Self::montgomery_mul(&limbs, &weight));
            acc = acc.add(&term);
            weight = Self::montgomery_mul(&weight, &M::R2);
        }
        acc
    }

    /// Returns the standard (non-Montgomery) little-endian limbs.
    pub fn to_limbs(&self) -> [u64; N] {
        Self::montgomery_mul(&self.limbs, &Self::one_limbs())
    }

    /// Writes the value as a fixed-width little-endian integer.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        let mut limbs = self.to_limbs();
        limbs_to_le_bytes(&limbs, out);
        limbs.zeroize();
    }

    /// Returns 1 if the value is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Returns 1 if the standard representative is odd.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_limbs()[0] & 1) as u8)
    }
}

/* ========================================================================== */
/*  Arithmetic                                                                */
/* ========================================================================== */

impl<M: MontgomeryParams<N>, const N: usize> Residue<M, N> {
    /// Modular addition.
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = [0u64; N];
        let mut carry = 0u64;
        for i in 0..N {
            let (s, c) = adc(self.limbs[i], other.limbs[i], carry);
            sum[i] = s;
            carry = c;
        }
        Self::from_montgomery(Self::reduce_once(sum, carry))
    }

    /// Modular subtraction.
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; N];
        let mut borrow = 0u64;
        for i in 0..N {
            let (d, b) = sbb(self.limbs[i], other.limbs[i], borrow);
            diff[i] = d;
            borrow = b;
        }

        // Add the modulus back if the subtraction wrapped.
        let mask = ct_mask64(Choice::from(borrow as u8));
        let mut carry = 0u64;
        for i in 0..N {
            let (s, c) = adc(diff[i], M::MODULUS[i] & mask, carry);
            diff[i] = s;
            carry = c;
        }
        Self::from_montgomery(diff)
    }

    /// Additive inverse.
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// `2·self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Modular multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_montgomery(Self::montgomery_mul(&self.limbs, &other.limbs))
    }

    /// Modular squaring.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// `self^exp` by square-and-multiply.
    ///
    /// Runs in variable time with respect to `exp` only; callers pass fixed,
    /// public exponents.
    pub fn pow_vartime(&self, exp: &[u64; N]) -> Self {
        let mut acc = Self::one();
        for i in (0..64 * N).rev() {
            acc = acc.square();
            if (exp[i / 64] >> (i % 64)) & 1 == 1 {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem (`m` prime).
    ///
    /// Zero maps to zero.
    pub fn invert(&self) -> Self {
        let mut exp = [0u64; N];
        let mut borrow = 2u64;
        for i in 0..N {
            let (d, b) = sbb(M::MODULUS[i], borrow, 0);
            exp[i] = d;
            borrow = b;
        }
        self.pow_vartime(&exp)
    }
}

impl<M: MontgomeryParams<N>, const N: usize> ConstantTimeEq for Residue<M, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1u8);
        for i in 0..N {
            acc &= self.limbs[i].ct_eq(&other.limbs[i]);
        }
        acc
    }
}

impl<M: MontgomeryParams<N>, const N: usize> ConditionallySelectable for Residue<M, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; N];
        for i in 0..N {
            limbs[i] = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_montgomery(limbs)
    }
}

impl<M: MontgomeryParams<N>, const N: usize> PartialEq for Residue<M, N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<M: MontgomeryParams<N>, const N: usize> Eq for Residue<M, N> {}
