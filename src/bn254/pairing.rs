// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Optimal ate pairing on BN254.
//!
//! G2 points are prepared into line coefficients once, Miller loops of several
//! pairs share one accumulator, and a single final exponentiation follows.

use super::field::Field;
use super::fp::Fp;
use super::fp12::Fp12;
use super::fp2::Fp2;
use super::g1::G1Affine;
use super::g2::G2Affine;
use super::g2::G2Params;
use super::g2::PSI_X;
use super::g2::PSI_Y;
use super::group::CurveParams;

use std::ops::Mul;
use subtle::Choice;
use subtle::ConstantTimeEq;

/// BN parameter x.
const BN_X: u64 = 4_965_661_367_192_848_881;

/// Signed binary digits of `6x + 2`, most significant first, leading 1 dropped.
const ATE_LOOP_COUNT_NAF: [i8; 65] = [
    0, -1, 0, 1, 0, 0, 0, -1, 0, -1, 0, 0, 0, -1, 0, 1, 0, -1, 0, 0, -1, 0, 0, 0, 0, 0, 1, 0, 0,
    -1, 0, 1, 0, 0, -1, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, -1, 0, -1, 0, 0, 1, 0, 0, 0, -1, 0, 0, -1,
    0, 1, 0, 1, 0, 0, 0,
];

/// 1 / 2 in Montgomery form.
const TWO_INV: Fp = Fp::from_raw_unchecked([
    0x87be_e7d2_4f06_0572,
    0xd0fd_2add_2f1c_6ae5,
    0x8f5f_7492_fcfd_4f44,
    0x1f37_631a_3d9c_bfac,
]);

/// Line function coefficients, evaluated at a G1 point as `c0 * py + (c1 * px + c2 v) w`.
type EllCoeff = (Fp2, Fp2, Fp2);

/// Homogeneous projective accumulator `R` of the Miller loop.
struct LineState {
    x: Fp2,
    y: Fp2,
    z: Fp2,
}

impl LineState {
    fn doubling_step(&mut self) -> EllCoeff {
        let b3 = G2Params::coeff_b3();

        let a = (self.x * self.y).scale(&TWO_INV);
        let b = self.y.square();
        let c = self.z.square();
        let e = b3 * c;
        let f = e.double() + e;
        let g = (b + f).scale(&TWO_INV);
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = a * (b - f);
        self.y = g.square() - (e_square.double() + e_square);
        self.z = b * h;

        (-h, j.double() + j, i)
    }

    fn addition_step(&mut self, qx: &Fp2, qy: &Fp2) -> EllCoeff {
        let theta = self.y - qy * self.z;
        let lambda = self.x - qx * self.z;
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * d;
        let f = self.z * c;
        let g = self.x * d;
        let h = e + f - g.double();

        self.x = lambda * h;
        self.y = theta * (g - h) - e * self.y;
        self.z = self.z * e;

        (lambda, -theta, theta * qx - lambda * qy)
    }
}

/// Line coefficients of a fixed G2 point, reusable across Miller loops.
#[derive(Clone, Debug)]
pub struct G2Prepared {
    coeffs: Vec<EllCoeff>,
    infinity: Choice,
}

impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> G2Prepared {
        if bool::from(q.is_identity()) {
            return G2Prepared {
                coeffs: Vec::new(),
                infinity: Choice::from(1),
            };
        }

        let mut coeffs = Vec::with_capacity(ATE_LOOP_COUNT_NAF.len() * 2);
        let mut r = LineState {
            x: q.x,
            y: q.y,
            z: Fp2::one(),
        };
        let neg_qy = -q.y;

        for digit in ATE_LOOP_COUNT_NAF {
            coeffs.push(r.doubling_step());
            match digit {
                1 => coeffs.push(r.addition_step(&q.x, &q.y)),
                -1 => coeffs.push(r.addition_step(&q.x, &neg_qy)),
                _ => {}
            }
        }

        // Q1 = psi(Q), Q2 = -psi^2(Q)
        let q1x = q.x.conjugate() * PSI_X;
        let q1y = q.y.conjugate() * PSI_Y;
        let q2x = q1x.conjugate() * PSI_X;
        let q2y = -(q1y.conjugate() * PSI_Y);

        coeffs.push(r.addition_step(&q1x, &q1y));
        coeffs.push(r.addition_step(&q2x, &q2y));

        G2Prepared {
            coeffs,
            infinity: Choice::from(0),
        }
    }
}

fn ell(f: &Fp12, coeffs: &EllCoeff, p: &G1Affine) -> Fp12 {
    let c0 = coeffs.0.scale(&p.y);
    let c1 = coeffs.1.scale(&p.x);
    f.mul_by_034(&c0, &c1, &coeffs.2)
}

/// Output of a Miller loop, meaningful only after [`MillerLoopResult::final_exponentiation`].
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(Fp12);

/// Runs one Miller loop over the sum of all pairs. Pairs with an identity point
/// contribute the neutral element and are skipped.
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> MillerLoopResult {
    let terms: Vec<_> = terms
        .iter()
        .filter(|(p, q)| !bool::from(p.is_identity() | q.infinity))
        .collect();

    let mut f = Fp12::one();
    let mut idx = 0;
    for (i, digit) in ATE_LOOP_COUNT_NAF.iter().enumerate() {
        if i != 0 {
            f = f.square();
        }
        for (p, q) in &terms {
            f = ell(&f, &q.coeffs[idx], p);
        }
        idx += 1;

        if *digit != 0 {
            for (p, q) in &terms {
                f = ell(&f, &q.coeffs[idx], p);
            }
            idx += 1;
        }
    }

    for _ in 0..2 {
        for (p, q) in &terms {
            f = ell(&f, &q.coeffs[idx], p);
        }
        idx += 1;
    }

    MillerLoopResult(f)
}

/// `f^(-x)` for `f` in the cyclotomic subgroup.
fn exp_by_neg_x(f: &Fp12) -> Fp12 {
    f.cyclotomic_exp(BN_X).conjugate()
}

impl MillerLoopResult {
    /// Raises to `(p^12 - 1) / r` up to a fixed power coprime to r, which
    /// preserves equality tests against the identity.
    ///
    /// Easy part `(p^6 - 1)(p^2 + 1)` followed by the hard part of
    /// Fuentes-Castaneda, Knapp and Rodriguez-Henriquez.
    pub fn final_exponentiation(&self) -> Gt {
        let f = self.0;

        let r = f.conjugate() * f.invert().unwrap_or(Fp12::zero());
        let r = r.frobenius_map(2) * r;

        let y1 = exp_by_neg_x(&r).cyclotomic_square();
        let y2 = y1.cyclotomic_square() * y1;
        let y4 = exp_by_neg_x(&y2);
        let y6 = exp_by_neg_x(&y4.cyclotomic_square());
        let y8 = y6.conjugate() * y4 * y2.conjugate();
        let y9 = y8 * y1;

        let t0 = y8 * y4 * r;
        let t1 = y9.frobenius_map(1) * t0;
        let t2 = y8.frobenius_map(2) * t1;
        let t3 = (r.conjugate() * y9).frobenius_map(3);

        Gt(t3 * t2)
    }
}

/// Element of the order-r target group, written multiplicatively.
#[derive(Copy, Clone, Debug)]
pub struct Gt(Fp12);

impl Gt {
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    pub fn is_identity(&self) -> Choice {
        self.0.ct_eq(&Fp12::one())
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Gt {}

impl Mul for Gt {
    type Output = Gt;

    fn mul(self, rhs: Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    let q = G2Prepared::from(*q);
    multi_miller_loop(&[(p, &q)]).final_exponentiation()
}
