// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! `G2: y^2 = x^3 + 3 / (9 + u)` over Fp2, the D-type sextic twist.
//!
//! On the wire each Fp2 coordinate is written imaginary part first, so a point is
//! `x.c1 || x.c0 || y.c1 || y.c0`, matching the EVM precompile and Kyber layout.

use super::fp::Fp;
use super::fp2::Fp2;
use super::group::AffinePoint;
use super::group::CurveParams;
use super::group::ProjectivePoint;

use subtle::Choice;
use subtle::ConstantTimeEq;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2Params;

pub type G2Affine = AffinePoint<G2Params>;
pub type G2Projective = ProjectivePoint<G2Params>;

pub const G2_UNCOMPRESSED_BYTES: usize = 128;

/// 3 / (9 + u)
const B2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x3bf938e377b802a8,
        0x020b1b273633535d,
        0x26b7edf049755260,
        0x2514c6324384a86d,
    ]),
    c1: Fp::from_raw_unchecked([
        0x38e7ecccd1dcff67,
        0x65f0b37d93ce0d3e,
        0xd749d0dd22ac00aa,
        0x0141b9ce4a688d4d,
    ]),
};

const GENERATOR_X: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x8e83b5d102bc2026,
        0xdceb1935497b0172,
        0xfbb8264797811adf,
        0x19573841af96503b,
    ]),
    c1: Fp::from_raw_unchecked([
        0xafb4737da84c6140,
        0x6043dd5a5802d8c4,
        0x09e950fc52a02f86,
        0x14fef0833aea7b6b,
    ]),
};

const GENERATOR_Y: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x619dfa9d886be9f6,
        0xfe7fd297f59e9b78,
        0xff9e1a62231b7dfe,
        0x28fd7eebae9e4206,
    ]),
    c1: Fp::from_raw_unchecked([
        0x64095b56c71856ee,
        0xdc57f922327d3cbb,
        0x55f935be33351076,
        0x0da4a0e693fd6482,
    ]),
};

/// `xi^((p - 1) / 3)`, scales x under the untwist-Frobenius-twist endomorphism.
pub(crate) const PSI_X: Fp2 = Fp2 {
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
};

/// `xi^((p - 1) / 2)`
pub(crate) const PSI_Y: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xe4bbdd0c2936b629,
        0xbb30f162e133bacb,
        0x31a9d1b6f9645366,
        0x253570bea500f8dd,
    ]),
    c1: Fp::from_raw_unchecked([
        0xa1d77ce45ffe77c7,
        0x07affd117826d1db,
        0x6d16bd27bb7edc6b,
        0x2c87200285defecc,
    ]),
};

/// `6 x^2` for the BN parameter `x = 4965661367192848881`.
const SIX_X_SQUARED: [u64; 2] = [0xf83e_9682_e87c_fd46, 0x6f4d_8248_eeb8_59fb];

impl CurveParams for G2Params {
    type Base = Fp2;

    const NAME: &'static str = "bn254 G2";

    fn coeff_b() -> Fp2 {
        B2
    }

    fn generator() -> G2Affine {
        AffinePoint::from_xy_unchecked(GENERATOR_X, GENERATOR_Y)
    }

    /// On the twist, `psi(Q) = [6 x^2] Q` holds exactly for points of order r.
    fn is_torsion_free(point: &G2Affine) -> Choice {
        let lhs = G2Projective::from(psi(point));
        let rhs = G2Projective::from(*point).mul_vartime(&SIX_X_SQUARED);
        lhs.ct_eq(&rhs)
    }
}

/// The untwist-Frobenius-twist endomorphism.
pub(crate) fn psi(point: &G2Affine) -> G2Affine {
    let mut res = *point;
    res.x = point.x.conjugate() * PSI_X;
    res.y = point.y.conjugate() * PSI_Y;
    res
}
