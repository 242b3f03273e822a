// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Degree-12 extension `Fp12 = Fp6[w] / (w^2 - v)`, the target of the pairing.

use super::field::impl_field_ops;
use super::field::Field;
use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::Fp6;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl From<Fp6> for Fp12 {
    fn from(c0: Fp6) -> Fp12 {
        Fp12 {
            c0,
            c1: Fp6::zero(),
        }
    }
}

impl_field_ops!(Fp12);

/// `(a + b w)^2` inside the Fp4 sub-tower, returned as `(c0, c1)`.
fn fp4_square(a: &Fp2, b: &Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();

    let c0 = t1.mul_by_nonresidue() + t0;
    let c1 = (a + b).square() - t0 - t1;

    (c0, c1)
}

impl Fp12 {
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// The p^6-power Frobenius, which inverts elements of the cyclotomic subgroup.
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiplies by the sparse line value `c0 + (c3 + c4 v) w`.
    pub fn mul_by_034(&self, c0: &Fp2, c3: &Fp2, c4: &Fp2) -> Fp12 {
        let a = self.c0.scale(c0);
        let b = self.c1.mul_by_01(c3, c4);
        let e = (self.c0 + self.c1).mul_by_01(&(c0 + c3), c4);

        Fp12 {
            c0: b.mul_by_nonresidue() + a,
            c1: e - (a + b),
        }
    }

    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;

        Fp12 {
            c0: bb.mul_by_nonresidue() + aa,
            c1,
        }
    }

    pub fn square(&self) -> Fp12 {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = (self.c1.mul_by_nonresidue() + self.c0) * c0c1 - ab - ab.mul_by_nonresidue();

        Fp12 { c0, c1: ab + ab }
    }

    /// Granger-Scott squaring, valid only for elements of the cyclotomic subgroup.
    pub fn cyclotomic_square(&self) -> Fp12 {
        let (t3, t4) = fp4_square(&self.c0.c0, &self.c1.c1);
        let (t5, t6) = fp4_square(&self.c1.c0, &self.c0.c2);
        let (t7, t8) = fp4_square(&self.c0.c1, &self.c1.c2);
        let t9 = t8.mul_by_nonresidue();

        let twice = |a: Fp2| a + a;

        Fp12 {
            c0: Fp6 {
                c0: twice(t3 - self.c0.c0) + t3,
                c1: twice(t5 - self.c0.c1) + t5,
                c2: twice(t7 - self.c0.c2) + t7,
            },
            c1: Fp6 {
                c0: twice(t9 + self.c1.c0) + t9,
                c1: twice(t4 + self.c1.c1) + t4,
                c2: twice(t6 + self.c1.c2) + t6,
            },
        }
    }

    /// Raises a cyclotomic element to a public 64-bit exponent.
    pub fn cyclotomic_exp(&self, exp: u64) -> Fp12 {
        let mut res = Fp12::one();
        for i in (0..64).rev() {
            res = res.cyclotomic_square();
            if (exp >> i) & 1 == 1 {
                res *= self;
            }
        }
        res
    }

    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    pub fn frobenius_map(&self, power: usize) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map(power),
            c1: self
                .c1
                .frobenius_map(power)
                .scale(&FROBENIUS_COEFF_FP12_C1[power % 12]),
        }
    }
}

impl Field for Fp12 {
    const BYTES: usize = 384;

    fn zero() -> Self {
        Fp12::zero()
    }

    fn one() -> Self {
        Fp12::one()
    }

    fn is_zero(&self) -> Choice {
        Fp12::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp12::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp12::invert(self)
    }

    fn frobenius_map(&self, power: usize) -> Self {
        Fp12::frobenius_map(self, power)
    }

    fn write_be(&self, out: &mut [u8]) {
        self.c0.write_be(&mut out[..192]);
        self.c1.write_be(&mut out[192..]);
    }

    fn read_be(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::BYTES {
            return CtOption::new(Fp12::zero(), Choice::from(0));
        }
        let c0 = Fp6::read_be(&bytes[..192]);
        let c1 = Fp6::read_be(&bytes[192..]);

        c0.and_then(|c0| c1.map(|c1| Fp12 { c0, c1 }))
    }
}

/// `xi^((p^i - 1) / 6)`
const FROBENIUS_COEFF_FP12_C1: [Fp2; 12] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0xd35d438dc58f0d9d,
            0x0a78eb28f5c70b3d,
            0x666ea36f7879462c,
            0x0e0a77c19a07df2f,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0xaf9ba69633144907,
            0xca6b1d7387afb78a,
            0x11bded5ef08a2087,
            0x02f34d751a1f3a7c,
        ]),
        c1: Fp::from_raw_unchecked([
            0xa222ae234c492d72,
            0xd00f02a4565de15b,
            0xdc2ff3a253dfc926,
            0x10a75716b3899551,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0xca8d800500fa1bf2,
            0xf0c5d61468b39769,
            0x0e201271ad0d4418,
            0x04290f65bad856e6,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x365316184e46d97d,
            0x0af7129ed4c96d9f,
            0x659da72fca1009b5,
            0x08116d8983a20d23,
        ]),
        c1: Fp::from_raw_unchecked([
            0xb1df4af7c39c1939,
            0x3d9f02878a73bf7f,
            0x9b2220928caf0ae0,
            0x26684515eff054a6,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x3350c88e13e80b9c,
            0x7dce557cdb5e56b9,
            0x6001b4b8b615564a,
            0x2682e617020217e0,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x86b76f821b329076,
            0x408bf52b4d19b614,
            0x53dfb9d0d985e92d,
            0x051e20146982d2a7,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0fbc9cd47752ebc7,
            0x6d8fffe33415de24,
            0xbef22cf038cf41b9,
            0x15c0edff3c66bf54,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x68c3488912edefaa,
            0x8d087f6872aabf4f,
            0x51e1a24709081231,
            0x2259d6b14729c0fa,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x8c84e580a568b440,
            0xcd164d1de0c21302,
            0xa692585790f737d5,
            0x2d7100fdc71265ad,
        ]),
        c1: Fp::from_raw_unchecked([
            0x99fdddf38c33cfd5,
            0xc77267ed1213e931,
            0xdc2052142da18f36,
            0x1fbcf75c2da80ad7,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x71930c11d782e155,
            0xa6bb947cffbe3323,
            0xaa303344d4741444,
            0x2c3b3f0d26594943,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x05cd75fe8a3623ca,
            0x8c8a57f293a85cee,
            0x52b29e86b7714ea8,
            0x2852e0e95d8f9306,
        ]),
        c1: Fp::from_raw_unchecked([
            0x8a41411f14e0e40e,
            0x59e26809ddfe0b0d,
            0x1d2e2523f4d24d7d,
            0x09fc095cf1414b83,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x08cfc388c494f1ab,
            0x19b315148d1373d4,
            0x584e90fdcb6c0213,
            0x09e1685bdf2f8849,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0xb5691c94bd4a6cd1,
            0x56f575661b581478,
            0x64708be5a7fb6f30,
            0x2b462e5e77aecd82,
        ]),
        c1: Fp::from_raw_unchecked([
            0x2c63ef42612a1180,
            0x29f16aae345bec69,
            0xf95e18c648b216a4,
            0x1aa36073a4cae0d4,
        ]),
    },
];
