//! Edwards curve points in extended coordinates

use core::fmt;

use edcrypt_internal::constant_time::{ct_is_zero, ct_lt_limbs};
use edcrypt_internal::endian::le_bytes_to_limbs;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::{EdwardsCurve, MontgomeryParams, Residue, MAX_ENCODED_LEN};

type Fe<C, const N: usize> = Residue<<C as EdwardsCurve<N>>::Base, N>;
type Sc<C, const N: usize> = Residue<<C as EdwardsCurve<N>>::Order, N>;

/// A point on the curve `C` in extended coordinates `(X : Y : Z : T)`.
///
/// Represents the affine point `(X/Z, Y/Z)` with `T = XY/Z`.
pub struct EdwardsPoint<C: EdwardsCurve<N>, const N: usize> {
    x: Fe<C, N>,
    y: Fe<C, N>,
    z: Fe<C, N>,
    t: Fe<C, N>,
}

impl<C: EdwardsCurve<N>, const N: usize> Clone for EdwardsPoint<C, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: EdwardsCurve<N>, const N: usize> Copy for EdwardsPoint<C, N> {}

impl<C: EdwardsCurve<N>, const N: usize> fmt::Debug for EdwardsPoint<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let len = C::ENCODED_LEN;
        self.encode(&mut buf[..len]);
        write!(f, "EdwardsPoint<{}>(", C::NAME)?;
        for byte in &buf[..len] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<C: EdwardsCurve<N>, const N: usize> EdwardsPoint<C, N> {
    /// The neutral element `(0, 1)`.
    pub fn identity() -> Self {
        Self {
            x: Residue::zero(),
            y: Residue::one(),
            z: Residue::one(),
            t: Residue::zero(),
        }
    }

    /// The standard base point `B` of the curve.
    pub fn generator() -> Self {
        let x = Residue::from_limbs(&C::BASE_X);
        let y = Residue::from_limbs(&C::BASE_Y);
        Self {
            x,
            y,
            z: Residue::one(),
            t: x.mul(&y),
        }
    }

    fn curve_d() -> Fe<C, N> {
        Residue::from_limbs(&C::D)
    }

    /// Unified addition (Hisil–Wong–Carter–Dawson), complete on `C`.
    fn add_with_d(&self, other: &Self, d: &Fe<C, N>) -> Self {
        let a = self.x.mul(&other.x);
        let b = self.y.mul(&other.y);
        let c = self.t.mul(d).mul(&other.t);
        let dd = self.z.mul(&other.z);
        let e = self
            .x
            .add(&self.y)
            .mul(&other.x.add(&other.y))
            .sub(&a)
            .sub(&b);
        let f = dd.sub(&c);
        let g = dd.add(&c);
        // H = B − a·A
        let h = if C::A_IS_MINUS_ONE { b.add(&a) } else { b.sub(&a) };

        Self {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Point addition.
    pub fn add(&self, other: &Self) -> Self {
        self.add_with_d(other, &Self::curve_d())
    }

    /// Point doubling.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Point negation: `(x, y) ↦ (−x, y)`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Point subtraction.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Constant-time scalar multiplication `[k]P`.
    ///
    /// Double-and-add-always over all `64·N` bits of the scalar, most
    /// significant first; the sum is computed every round and kept or
    /// discarded with a masked select.
    pub fn mul(&self, scalar: &Sc<C, N>) -> Self {
        let d = Self::curve_d();
        let mut bits = scalar.to_limbs();
        let mut acc = Self::identity();

        for i in (0..64 * N).rev() {
            acc = acc.add_with_d(&acc, &d);
            let sum = acc.add_with_d(self, &d);
            let bit = Choice::from(((bits[i / 64] >> (i % 64)) & 1) as u8);
            acc = Self::conditional_select(&acc, &sum, bit);
        }

        bits.zeroize();
        acc
    }

    /// `[k]B` for the standard base point.
    pub fn mul_base(scalar: &Sc<C, N>) -> Self {
        Self::generator().mul(scalar)
    }

    /// `[8]P`, by three doublings.
    ///
    /// Eight is a multiple of the cofactor of both RFC 8032 curves, so the
    /// result always lies in the prime-order subgroup.
    pub fn mul_by_eight(&self) -> Self {
        self.double().double().double()
    }

    /// Returns 1 if this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    /// Affine coordinates `(x, y)`.
    pub fn to_affine(&self) -> (Fe<C, N>, Fe<C, N>) {
        let z_inv = self.z.invert();
        (self.x.mul(&z_inv), self.y.mul(&z_inv))
    }

    /// Writes the canonical RFC 8032 encoding into `out`.
    ///
    /// `out` must be exactly `C::ENCODED_LEN` bytes: `y` little-endian with
    /// the low bit of `x` in the most significant bit of the last byte.
    pub fn encode(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), C::ENCODED_LEN);
        let (x, y) = self.to_affine();
        y.write_le_bytes(out);
        let last = out.len() - 1;
        out[last] |= x.is_odd().unwrap_u8() << 7;
    }

    /// Decodes an RFC 8032 point encoding.
    ///
    /// Fails for wrong lengths, `y ≥ p`, set bits between the field width
    /// and the sign bit, points off the curve, and `x = 0` with the sign bit
    /// set.
    pub fn decode(bytes: &[u8]) -> CtOption<Self> {
        let len = C::ENCODED_LEN;
        if bytes.len() != len {
            return CtOption::new(Self::identity(), Choice::from(0));
        }

        let mut buf = [0u8; MAX_ENCODED_LEN];
        buf[..len].copy_from_slice(bytes);
        let sign = Choice::from(buf[len - 1] >> 7);
        buf[len - 1] &= 0x7f;

        let limb_len = len.min(8 * N);
        let y_limbs = le_bytes_to_limbs::<N>(&buf[..limb_len]);
        let tail_clear = ct_is_zero(&buf[limb_len..len]);
        let y_canonical = ct_lt_limbs(&y_limbs, &<C::Base as MontgomeryParams<N>>::MODULUS);
        let y: Fe<C, N> = Residue::from_limbs(&y_limbs);

        // a·x² + y² = 1 + d·x²·y²  ⇒  x² = (y² − 1) / (d·y² − a)
        let one = Residue::one();
        let y2 = y.square();
        let u = y2.sub(&one);
        let dy2 = Self::curve_d().mul(&y2);
        let v = if C::A_IS_MINUS_ONE { dy2.add(&one) } else { dy2.sub(&one) };

        let (is_square, mut x) = C::sqrt_ratio(&u, &v);
        let x_is_zero = x.is_zero();
        let flip = x.is_odd() ^ sign;
        x = Residue::conditional_select(&x, &x.neg(), flip);

        let valid = tail_clear & y_canonical & is_square & !(x_is_zero & sign);
        let point = Self {
            x,
            y,
            z: one,
            t: x.mul(&y),
        };
        CtOption::new(point, valid)
    }
}

impl<C: EdwardsCurve<N>, const N: usize> ConditionallySelectable for EdwardsPoint<C, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Residue::conditional_select(&a.x, &b.x, choice),
            y: Residue::conditional_select(&a.y, &b.y, choice),
            z: Residue::conditional_select(&a.z, &b.z, choice),
            t: Residue::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl<C: EdwardsCurve<N>, const N: usize> ConstantTimeEq for EdwardsPoint<C, N> {
    /// Projective comparison: `X1·Z2 = X2·Z1` and `Y1·Z2 = Y2·Z1`.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        x_eq & y_eq
    }
}

impl<C: EdwardsCurve<N>, const N: usize> PartialEq for EdwardsPoint<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsCurve<N>, const N: usize> Eq for EdwardsPoint<C, N> {}
