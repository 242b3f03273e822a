// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Narrow arithmetic interface shared by every level of the BN254 tower.
//!
//! Group arithmetic, hash-to-curve and the pairing only talk to field elements
//! through [`Field`], so any level can be swapped for another implementation
//! without touching those layers.

use std::fmt::Debug;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;
use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

pub trait Field:
    Sized
    + Copy
    + Debug
    + Default
    + Eq
    + ConditionallySelectable
    + ConstantTimeEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Width of the fixed big-endian encoding.
    const BYTES: usize;

    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    fn square(&self) -> Self;

    fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> CtOption<Self>;

    /// Applies the p-power Frobenius endomorphism `power` times.
    fn frobenius_map(&self, power: usize) -> Self;

    /// Writes the big-endian encoding into `out`, which must be `BYTES` long.
    fn write_be(&self, out: &mut [u8]);

    /// Reads a canonical big-endian encoding, `None` if any coefficient is out of range.
    fn read_be(bytes: &[u8]) -> CtOption<Self>;

    fn to_be_vec(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        self.write_be(&mut out);
        out
    }
}

/// Derives the operator traits for owned and borrowed operands from the
/// inherent `add`, `sub`, `mul` and `neg` methods of a field type.
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl<'a, 'b> std::ops::Add<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                $t::add(self, rhs)
            }
        }

        impl<'a, 'b> std::ops::Sub<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                $t::sub(self, rhs)
            }
        }

        impl<'a, 'b> std::ops::Mul<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                $t::mul(self, rhs)
            }
        }

        impl<'a> std::ops::Neg for &'a $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::neg(self)
            }
        }

        impl std::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::neg(&self)
            }
        }

        crate::bn254::field::impl_field_ops!(@owned $t, Add, add, AddAssign, add_assign);
        crate::bn254::field::impl_field_ops!(@owned $t, Sub, sub, SubAssign, sub_assign);
        crate::bn254::field::impl_field_ops!(@owned $t, Mul, mul, MulAssign, mul_assign);
    };
    (@owned $t:ident, $op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl<'b> std::ops::$op<&'b $t> for $t {
            type Output = $t;

            #[inline]
            fn $f(self, rhs: &'b $t) -> $t {
                $t::$f(&self, rhs)
            }
        }

        impl<'a> std::ops::$op<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $f(self, rhs: $t) -> $t {
                $t::$f(self, &rhs)
            }
        }

        impl std::ops::$op<$t> for $t {
            type Output = $t;

            #[inline]
            fn $f(self, rhs: $t) -> $t {
                $t::$f(&self, &rhs)
            }
        }

        impl std::ops::$op_assign<$t> for $t {
            #[inline]
            fn $f_assign(&mut self, rhs: $t) {
                *self = $t::$f(self, &rhs);
            }
        }

        impl<'b> std::ops::$op_assign<&'b $t> for $t {
            #[inline]
            fn $f_assign(&mut self, rhs: &'b $t) {
                *self = $t::$f(self, rhs);
            }
        }
    };
}

pub(crate) use impl_field_ops;

/// Square-and-multiply with a public exponent given as little-endian limbs.
pub(crate) fn pow_vartime<F: Field>(base: &F, exp: &[u64]) -> F {
    let mut res = F::one();
    for e in exp.iter().rev() {
        for i in (0..64).rev() {
            res = res.square();
            if ((*e >> i) & 1) == 1 {
                res = res * *base;
            }
        }
    }
    res
}
