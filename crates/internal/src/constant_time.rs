//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// The length check is not secret; the content comparison runs in constant
/// time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time mask generation for a boolean condition
///
/// Returns an all-1s mask if condition is set, all-0s otherwise.
pub fn ct_mask64(condition: Choice) -> u64 {
    0u64.wrapping_sub(condition.unwrap_u8() as u64)
}

/// Constant-time `a < b` over little-endian 64-bit limbs.
///
/// Computes `a - b` with borrow propagation over every limb and reports the
/// final borrow, so the running time only depends on `N`.
pub fn ct_lt_limbs<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Choice {
    let mut borrow = 0u64;
    for i in 0..N {
        let (t, b1) = a[i].overflowing_sub(b[i]);
        let (_, b2) = t.overflowing_sub(borrow);
        borrow = (b1 | b2) as u64;
    }
    Choice::from(borrow as u8)
}

/// Constant-time check that every byte of `bytes` is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &b in bytes {
        acc |= b;
    }
    acc.ct_eq(&0)
}
