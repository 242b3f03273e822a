// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Base field of BN254, `p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47`.
//!
//! Elements are four little-endian 64-bit limbs in Montgomery form.

use super::field::impl_field_ops;
use super::field::pow_vartime;
use super::field::Field;

use std::fmt;
use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

const MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// -p^{-1} mod 2^64
const INV: u64 = 0x87d2_0782_e486_6389;

/// R = 2^256 mod p
const R: Fp = Fp([
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
]);

/// R^2 = 2^512 mod p
const R2: Fp = Fp([
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
]);

/// R^3 = 2^768 mod p
const R3: Fp = Fp([
    0xb1cd_6daf_da15_30df,
    0x62f2_10e6_a728_3db6,
    0xef7f_0b0c_0ada_0afb,
    0x20fd_6e90_2d59_2544,
]);

const P_MINUS_2: [u64; 4] = [
    0x3c20_8c16_d87c_fd45,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// p = 3 mod 4, so a square root is a power of (p + 1) / 4.
const P_PLUS_1_DIV_4: [u64; 4] = [
    0x4f08_2305_b61f_3f52,
    0x65e0_5aa4_5a1c_72a3,
    0x6e14_116d_a060_5617,
    0x0c19_139c_b84c_680a,
];

const P_MINUS_1_DIV_2: [u64; 4] = [
    0x9e10_460b_6c3e_7ea3,
    0xcbc0_b548_b438_e546,
    0xdc28_22db_40c0_ac2e,
    0x1832_2739_7098_d014,
];

#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Returns the difference and a borrow of either 0 or `u64::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

fn read_u64_be(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}

#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fp {}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl From<u64> for Fp {
    fn from(val: u64) -> Fp {
        Fp([val, 0, 0, 0]) * R2
    }
}

impl_field_ops!(Fp);

impl Fp {
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Builds an element straight from Montgomery-form limbs.
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Parses a canonical 32-byte big-endian integer, rejecting values `>= p`.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let mut tmp = Fp([
            read_u64_be(&bytes[24..32]),
            read_u64_be(&bytes[16..24]),
            read_u64_be(&bytes[8..16]),
            read_u64_be(&bytes[0..8]),
        ]);

        // Valid only if subtracting the modulus underflows.
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);
        let is_some = (borrow as u8) & 1;

        tmp = tmp * R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Reduces a 48-byte big-endian integer modulo p.
    pub fn from_bytes_wide(bytes: &[u8; 48]) -> Fp {
        let hi = Fp([read_u64_be(&bytes[8..16]), read_u64_be(&bytes[0..8]), 0, 0]);
        let lo = Fp([
            read_u64_be(&bytes[40..48]),
            read_u64_be(&bytes[32..40]),
            read_u64_be(&bytes[24..32]),
            read_u64_be(&bytes[16..24]),
        ]);

        // lo * R2 / R = lo * R and hi * R3 / R = hi * 2^256 * R
        lo * R2 + hi * R3
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let tmp = Fp::montgomery_reduce(&[self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0]);

        let mut res = [0u8; 32];
        res[0..8].copy_from_slice(&tmp.0[3].to_be_bytes());
        res[8..16].copy_from_slice(&tmp.0[2].to_be_bytes());
        res[16..24].copy_from_slice(&tmp.0[1].to_be_bytes());
        res[24..32].copy_from_slice(&tmp.0[0].to_be_bytes());
        res
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Parity of the canonical integer, the RFC 9380 `sgn0` for a prime field.
    pub fn sgn0(&self) -> Choice {
        Choice::from(self.to_bytes()[31] & 1)
    }

    /// Whether the element is a square. Zero counts as a square.
    pub fn is_square(&self) -> Choice {
        let legendre = pow_vartime(self, &P_MINUS_1_DIV_2);
        !legendre.ct_eq(&(-Fp::one()))
    }

    pub fn sqrt(&self) -> CtOption<Fp> {
        let root = pow_vartime(self, &P_PLUS_1_DIV_4);
        CtOption::new(root, root.square().ct_eq(self))
    }

    pub fn invert(&self) -> CtOption<Fp> {
        CtOption::new(pow_vartime(self, &P_MINUS_2), !self.is_zero())
    }

    #[inline]
    fn subtract_p(&self) -> Fp {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);

        // borrow is all ones when self < p, keep the original limbs then
        Fp([
            (self.0[0] & borrow) | (r0 & !borrow),
            (self.0[1] & borrow) | (r1 & !borrow),
            (self.0[2] & borrow) | (r2 & !borrow),
            (self.0[3] & borrow) | (r3 & !borrow),
        ])
    }

    #[inline]
    pub fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);

        // p < 2^254, so the sum fits in four limbs
        Fp([d0, d1, d2, d3]).subtract_p()
    }

    #[inline]
    pub fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // -0 must stay 0, not p
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    #[inline]
    pub fn sub(&self, rhs: &Fp) -> Fp {
        rhs.neg().add(self)
    }

    pub fn mul(&self, rhs: &Fp) -> Fp {
        let mut t = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0;
            for j in 0..4 {
                (t[i + j], carry) = mac(t[i + j], self.0[i], rhs.0[j], carry);
            }
            t[i + 4] = carry;
        }

        Fp::montgomery_reduce(&t)
    }

    #[inline]
    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    fn montgomery_reduce(t: &[u64; 8]) -> Fp {
        let mut t = *t;
        let mut carry2 = 0;
        for i in 0..4 {
            let k = t[i].wrapping_mul(INV);
            let mut carry = 0;
            for j in 0..4 {
                (t[i + j], carry) = mac(t[i + j], k, MODULUS[j], carry);
            }
            (t[i + 4], carry2) = adc(t[i + 4], carry2, carry);
        }

        Fp([t[4], t[5], t[6], t[7]]).subtract_p()
    }
}

impl Field for Fp {
    const BYTES: usize = 32;

    fn zero() -> Self {
        Fp::zero()
    }

    fn one() -> Self {
        Fp::one()
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }

    fn frobenius_map(&self, _power: usize) -> Self {
        *self
    }

    fn write_be(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }

    fn read_be(bytes: &[u8]) -> CtOption<Self> {
        match <&[u8; 32]>::try_from(bytes) {
            Ok(bytes) => Fp::from_bytes(bytes),
            Err(_) => CtOption::new(Fp::zero(), Choice::from(0)),
        }
    }
}
