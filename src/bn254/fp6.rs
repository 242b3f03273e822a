// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cubic extension `Fp6 = Fp2[v] / (v^3 - xi)` with `xi = 9 + u`.

use super::field::impl_field_ops;
use super::field::Field;
use super::fp::Fp;
use super::fp2::Fp2;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl From<Fp2> for Fp6 {
    fn from(c0: Fp2) -> Fp6 {
        Fp6 {
            c0,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl_field_ops!(Fp6);

impl Fp6 {
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Multiplies by `v`, the non-residue the degree-12 extension is built on.
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Multiplies by `b0 + b1 v`.
    pub fn mul_by_01(&self, b0: &Fp2, b1: &Fp2) -> Fp6 {
        let a_a = self.c0 * b0;
        let b_b = self.c1 * b1;

        let t1 = ((self.c1 + self.c2) * b1 - b_b).mul_by_nonresidue() + a_a;
        let t2 = (self.c0 + self.c1) * (b0 + b1) - a_a - b_b;
        let t3 = (self.c0 + self.c2) * b0 - a_a + b_b;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Multiplies by `b1 v`.
    pub fn mul_by_1(&self, b1: &Fp2) -> Fp6 {
        Fp6 {
            c0: (self.c2 * b1).mul_by_nonresidue(),
            c1: self.c0 * b1,
            c2: self.c1 * b1,
        }
    }

    /// Multiplies every coefficient by an `Fp2` element.
    pub fn scale(&self, k: &Fp2) -> Fp6 {
        Fp6 {
            c0: self.c0 * k,
            c1: self.c1 * k,
            c2: self.c2 * k,
        }
    }

    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let a_a = self.c0 * rhs.c0;
        let b_b = self.c1 * rhs.c1;
        let c_c = self.c2 * rhs.c2;

        let t1 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - b_b - c_c).mul_by_nonresidue() + a_a;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - a_a - b_b + c_c.mul_by_nonresidue();
        let t3 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - a_a + b_b - c_c;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    pub fn square(&self) -> Fp6 {
        self.mul(self)
    }

    pub fn invert(&self) -> CtOption<Fp6> {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        ((self.c1 * c2 + self.c2 * c1).mul_by_nonresidue() + self.c0 * c0)
            .invert()
            .map(|t| Fp6 {
                c0: c0 * t,
                c1: c1 * t,
                c2: c2 * t,
            })
    }

    pub fn frobenius_map(&self, power: usize) -> Fp6 {
        Fp6 {
            c0: self.c0.frobenius_map(power),
            c1: self.c1.frobenius_map(power) * FROBENIUS_COEFF_FP6_C1[power % 6],
            c2: self.c2.frobenius_map(power) * FROBENIUS_COEFF_FP6_C2[power % 6],
        }
    }
}

impl Field for Fp6 {
    const BYTES: usize = 192;

    fn zero() -> Self {
        Fp6::zero()
    }

    fn one() -> Self {
        Fp6::one()
    }

    fn is_zero(&self) -> Choice {
        Fp6::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp6::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp6::invert(self)
    }

    fn frobenius_map(&self, power: usize) -> Self {
        Fp6::frobenius_map(self, power)
    }

    fn write_be(&self, out: &mut [u8]) {
        self.c0.write_be(&mut out[..64]);
        self.c1.write_be(&mut out[64..128]);
        self.c2.write_be(&mut out[128..]);
    }

    fn read_be(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::BYTES {
            return CtOption::new(Fp6::zero(), Choice::from(0));
        }
        let c0 = Fp2::read_be(&bytes[..64]);
        let c1 = Fp2::read_be(&bytes[64..128]);
        let c2 = Fp2::read_be(&bytes[128..]);

        c0.and_then(|c0| c1.and_then(|c1| c2.map(|c2| Fp6 { c0, c1, c2 })))
    }
}

/// `xi^((p^i - 1) / 3)`
const FROBENIUS_COEFF_FP6_C1: [Fp2; 6] = [
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
            0xb5773b104563ab30,
            0x347f91c8a9aa6454,
            0x7a007127242e0991,
            0x1956bcd8118214ec,
        ]),
        c1: Fp::from_raw_unchecked([
            0x6e849f1ea0aa4757,
            0xaa1c7b6d89f89141,
            0xb6e713cdfae0ca3a,
            0x26694fbb4e82ebc3,
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
            0xc9af22f716ad6bad,
            0xb311782a4aa662b2,
            0x19eeaf64e248c7f4,
            0x20273e77e3439f82,
        ]),
        c1: Fp::from_raw_unchecked([
            0xacc02860f7ce93ac,
            0x3933d5817ba76b4c,
            0x69e6188b446c8467,
            0x0a46036d4417cc55,
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
            0xf91aba2654e8e3b1,
            0x4771cb2fdc92ce12,
            0xdcb16ae0fc8bdf35,
            0x274aa195cd9d8be4,
        ]),
        c1: Fp::from_raw_unchecked([
            0x5cfc50ae18811f8b,
            0x4bb28433cb43988c,
            0x4fd35f13c3b56219,
            0x301949bd2fc8883a,
        ]),
    },
];

/// `xi^(2 (p^i - 1) / 3)`
const FROBENIUS_COEFF_FP6_C2: [Fp2; 6] = [
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
            0x7361d77f843abe92,
            0xa5bb2bd3273411fb,
            0x9c941f314b3e2399,
            0x15df9cddbb9fd3ec,
        ]),
        c1: Fp::from_raw_unchecked([
            0x5dddfd154bd8c949,
            0x62cb29a5a4445b60,
            0x37bc870a0c7dd2b9,
            0x24830a9d3171f0fd,
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
            0x448a93a57b6762df,
            0xbfd62df528fdeadf,
            0xd858f5d00e9bd47a,
            0x06b03d4d3476ec58,
        ]),
        c1: Fp::from_raw_unchecked([
            0x2b19daf4bcc936d1,
            0xa1a54e7a56f4299f,
            0xb533eee05adeaef1,
            0x170c812b84dda0b2,
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
            0x843420f1d8dadbd6,
            0x31f010c9183fcdb2,
            0x436330b527a76049,
            0x13d47447f11adfe4,
        ]),
        c1: Fp::from_raw_unchecked([
            0xef494023a857fa74,
            0x2a925d02d5ab101a,
            0x83b015829ba62f10,
            0x2539111d0c13aea3,
        ]),
    },
];

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::bn254::fp2::tests::random_fp2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(crate) fn random_fp6(rng: &mut StdRng) -> Fp6 {
        Fp6 {
            c0: random_fp2(rng),
            c1: random_fp2(rng),
            c2: random_fp2(rng),
        }
    }

    #[test]
    fn v_cubed_is_xi() {
        let v = Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::one(),
            c2: Fp2::zero(),
        };
        let xi = Fp2 {
            c0: Fp::from(9),
            c1: Fp::one(),
        };
        assert_eq!(v * v * v, Fp6::from(xi));

        let mut rng = StdRng::seed_from_u64(21);
        let a = random_fp6(&mut rng);
        assert_eq!(a.mul_by_nonresidue(), a * v);
    }

    #[test]
    fn sparse_products() {
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..20 {
            let a = random_fp6(&mut rng);
            let b0 = random_fp2(&mut rng);
            let b1 = random_fp2(&mut rng);

            let dense = Fp6 {
                c0: b0,
                c1: b1,
                c2: Fp2::zero(),
            };
            assert_eq!(a.mul_by_01(&b0, &b1), a * dense);

            let dense = Fp6 {
                c0: Fp2::zero(),
                c1: b1,
                c2: Fp2::zero(),
            };
            assert_eq!(a.mul_by_1(&b1), a * dense);
        }
    }

    #[test]
    fn arithmetic_laws() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let a = random_fp6(&mut rng);
            let b = random_fp6(&mut rng);
            let c = random_fp6(&mut rng);

            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a * a.invert().unwrap(), Fp6::one());
        }
        assert!(bool::from(Fp6::zero().invert().is_none()));
    }

    #[test]
    fn frobenius_is_a_homomorphism() {
        let mut rng = StdRng::seed_from_u64(24);
        let a = random_fp6(&mut rng);
        let b = random_fp6(&mut rng);

        for power in 0..6 {
            assert_eq!(
                (a * b).frobenius_map(power),
                a.frobenius_map(power) * b.frobenius_map(power)
            );
        }

        let mut c = a;
        for _ in 0..6 {
            c = c.frobenius_map(1);
        }
        assert_eq!(c, a);
        assert_eq!(a.frobenius_map(1).frobenius_map(1), a.frobenius_map(2));
    }
}
