// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! `G1: y^2 = x^3 + 3` over Fp. The cofactor is 1, so every curve point is in the group.

use super::fp::Fp;
use super::group::AffinePoint;
use super::group::CurveParams;
use super::group::ProjectivePoint;

use subtle::Choice;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G1Params;

pub type G1Affine = AffinePoint<G1Params>;
pub type G1Projective = ProjectivePoint<G1Params>;

/// Width of the uncompressed `x || y` encoding.
pub const G1_UNCOMPRESSED_BYTES: usize = 64;

impl CurveParams for G1Params {
    type Base = Fp;

    const NAME: &'static str = "bn254 G1";

    fn coeff_b() -> Fp {
        Fp::from(3)
    }

    fn generator() -> G1Affine {
        AffinePoint::from_xy_unchecked(Fp::one(), Fp::from(2))
    }

    fn is_torsion_free(_point: &G1Affine) -> Choice {
        Choice::from(1)
    }
}
