// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.

use super::field::impl_field_ops;
use super::field::Field;
use super::fp::Fp;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl From<Fp> for Fp2 {
    fn from(c0: Fp) -> Fp2 {
        Fp2 { c0, c1: Fp::zero() }
    }
}

impl_field_ops!(Fp2);

impl Fp2 {
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiplies by `xi = 9 + u`, the non-residue the sextic tower is built on.
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        let nine = |a: &Fp| {
            let a2 = a.add(a);
            let a4 = a2.add(&a2);
            let a8 = a4.add(&a4);
            a8.add(a)
        };

        Fp2 {
            c0: nine(&self.c0) - self.c1,
            c1: self.c0 + nine(&self.c1),
        }
    }

    /// Multiplies both coefficients by a base field element.
    pub fn scale(&self, k: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * k,
            c1: self.c1 * k,
        }
    }

    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let sum = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: aa - bb,
            c1: sum - aa - bb,
        }
    }

    pub fn square(&self) -> Fp2 {
        // (a + bu)^2 = (a + b)(a - b) + 2abu
        let a = (self.c0 + self.c1) * (self.c0 - self.c1);
        let b = self.c0 * self.c1;

        Fp2 { c0: a, c1: b + b }
    }

    pub fn invert(&self) -> CtOption<Fp2> {
        // 1 / (a + bu) = (a - bu) / (a^2 + b^2)
        (self.c0.square() + self.c1.square())
            .invert()
            .map(|t| Fp2 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// The p-power Frobenius is conjugation.
    pub fn frobenius_map(&self, power: usize) -> Fp2 {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            *self
        }
    }
}

impl Field for Fp2 {
    const BYTES: usize = 64;

    fn zero() -> Self {
        Fp2::zero()
    }

    fn one() -> Self {
        Fp2::one()
    }

    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }

    fn frobenius_map(&self, power: usize) -> Self {
        Fp2::frobenius_map(self, power)
    }

    /// `c1 || c0`, the imaginary part first.
    fn write_be(&self, out: &mut [u8]) {
        self.c1.write_be(&mut out[..32]);
        self.c0.write_be(&mut out[32..]);
    }

    fn read_be(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::BYTES {
            return CtOption::new(Fp2::zero(), Choice::from(0));
        }
        let c1 = Fp::read_be(&bytes[..32]);
        let c0 = Fp::read_be(&bytes[32..]);

        c0.and_then(|c0| c1.map(|c1| Fp2 { c0, c1 }))
    }
}
