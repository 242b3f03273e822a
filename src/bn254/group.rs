// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Short Weierstrass `y^2 = x^3 + b` arithmetic over any [`Field`].
//!
//! Projective points use the complete formulas of Renes, Costello and Batina
//! (2015) for `a = 0`, so the identity `(0 : 1 : 0)` needs no special casing.

use super::field::Field;

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Add;
use std::ops::Neg;
use std::ops::Sub;
use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use tracing::trace;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PointError {
    #[error("invalid point length: expected {expected} bytes, received {received}")]
    InvalidLength { expected: usize, received: usize },
    #[error("coordinate is not a canonical field element")]
    NonCanonical,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime order subgroup")]
    NotInSubgroup,
}

/// Constants of one curve instance.
pub trait CurveParams: Copy + Debug + Default + Eq + 'static {
    type Base: Field;

    const NAME: &'static str;

    fn coeff_b() -> Self::Base;

    fn coeff_b3() -> Self::Base {
        let b = Self::coeff_b();
        b.double() + b
    }

    fn generator() -> AffinePoint<Self>;

    /// Prime-order subgroup membership for a point already known to be on the curve.
    fn is_torsion_free(point: &AffinePoint<Self>) -> Choice;
}

#[derive(Copy, Clone, Debug)]
pub struct AffinePoint<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) infinity: Choice,
}

#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> AffinePoint<C> {
    pub fn identity() -> Self {
        AffinePoint {
            x: C::Base::zero(),
            y: C::Base::one(),
            infinity: Choice::from(1),
        }
    }

    pub fn generator() -> Self {
        C::generator()
    }

    /// Builds a point from raw coordinates without any validation.
    pub(crate) fn from_xy_unchecked(x: C::Base, y: C::Base) -> Self {
        AffinePoint {
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    pub fn x(&self) -> C::Base {
        self.x
    }

    pub fn y(&self) -> C::Base {
        self.y
    }

    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + C::coeff_b();
        lhs.ct_eq(&rhs) | self.infinity
    }

    pub fn is_torsion_free(&self) -> Choice {
        C::is_torsion_free(self)
    }

    /// Fixed-width big-endian `x || y`, all zeroes for the identity.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        let width = C::Base::BYTES;
        let mut out = vec![0u8; 2 * width];
        if !bool::from(self.infinity) {
            self.x.write_be(&mut out[..width]);
            self.y.write_be(&mut out[width..]);
        }
        out
    }

    /// Parses `x || y`, checking canonical coordinates, the curve equation and
    /// subgroup membership. All-zero input decodes to the identity.
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self, PointError> {
        let width = C::Base::BYTES;
        if bytes.len() != 2 * width {
            return Err(PointError::InvalidLength {
                expected: 2 * width,
                received: bytes.len(),
            });
        }
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Self::identity());
        }

        let x = Option::<C::Base>::from(C::Base::read_be(&bytes[..width]));
        let y = Option::<C::Base>::from(C::Base::read_be(&bytes[width..]));
        let (Some(x), Some(y)) = (x, y) else {
            return Err(PointError::NonCanonical);
        };

        let point = Self::from_xy_unchecked(x, y);
        if !bool::from(point.is_on_curve()) {
            trace!("{} point is off the curve", C::NAME);
            return Err(PointError::NotOnCurve);
        }
        if !bool::from(point.is_torsion_free()) {
            trace!("{} point is outside the prime order subgroup", C::NAME);
            return Err(PointError::NotInSubgroup);
        }
        Ok(point)
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePoint {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            infinity: (a.infinity & !choice) | (b.infinity & choice),
        }
    }
}

impl<C: CurveParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &C::Base::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl<C: CurveParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::Base::conditional_select(&C::Base::one(), &C::Base::zero(), p.infinity),
            _curve: PhantomData,
        }
    }
}

impl<C: CurveParams> ProjectivePoint<C> {
    pub fn identity() -> Self {
        ProjectivePoint {
            x: C::Base::zero(),
            y: C::Base::one(),
            z: C::Base::zero(),
            _curve: PhantomData,
        }
    }

    pub fn generator() -> Self {
        C::generator().into()
    }

    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.z.invert().unwrap_or(C::Base::zero());
        let x = self.x * zinv;
        let y = self.y * zinv;

        let tmp = AffinePoint {
            x,
            y,
            infinity: Choice::from(0),
        };
        AffinePoint::conditional_select(&tmp, &AffinePoint::identity(), zinv.is_zero())
    }

    pub fn double(&self) -> Self {
        // Algorithm 9, https://eprint.iacr.org/2015/1060.pdf
        let b3 = C::coeff_b3();

        let t0 = self.y.square();
        let z3 = t0.double().double().double();
        let t1 = self.y * self.z;
        let t2 = self.z.square() * b3;
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2.double();
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = (t0 * t1).double();

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
            _curve: PhantomData,
        }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        // Algorithm 7, https://eprint.iacr.org/2015/1060.pdf
        let b3 = C::coeff_b3();

        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = (self.x + self.y) * (rhs.x + rhs.y) - (t0 + t1);
        let t4 = (self.y + self.z) * (rhs.y + rhs.z) - (t1 + t2);
        let y3 = (self.x + self.z) * (rhs.x + rhs.z) - (t0 + t2);
        let t0 = t0.double() + t0;
        let t2 = t2 * b3;
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = y3 * b3;
        let x3 = t3 * t1 - t4 * y3;
        let y3 = t1 * z3 + y3 * t0;
        let z3 = z3 * t4 + t0 * t3;

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
            _curve: PhantomData,
        }
    }

    /// Double-and-add over little-endian limbs. Scalars here are always public.
    pub fn mul_vartime(&self, scalar: &[u64]) -> Self {
        let mut acc = Self::identity();
        for limb in scalar.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (limb >> i) & 1 == 1 {
                    acc = ProjectivePoint::add(&acc, self);
                }
            }
        }
        acc
    }
}

impl<C: CurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (x1 / z1, y1 / z1) == (x2 / z2, y2 / z2)
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.is_identity();
        let other_is_zero = other.is_identity();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl<C: CurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveParams> Eq for ProjectivePoint<C> {}

impl<C: CurveParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            z: C::Base::conditional_select(&a.z, &b.z, choice),
            _curve: PhantomData,
        }
    }
}

impl<C: CurveParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
            _curve: PhantomData,
        }
    }
}

impl<C: CurveParams> Add for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &rhs)
    }
}

impl<C: CurveParams> Sub for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &-rhs)
    }
}

