// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! BN254 (alt_bn128) curve arithmetic: field tower, G1/G2, SVDW hash-to-curve
//! and the optimal ate pairing.

pub mod field;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod g1;
pub mod g2;
pub mod group;
pub mod hash_to_curve;
pub mod pairing;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::G1Affine;
pub use g1::G1Projective;
pub use g2::G2Affine;
pub use g2::G2Projective;
pub use group::PointError;
pub use hash_to_curve::HashToCurveError;
pub use hash_to_curve::Svdw;
pub use pairing::Gt;

/// Order r of G1, G2 and Gt as little-endian limbs.
pub const ORDER: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];
