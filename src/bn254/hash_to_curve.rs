// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hashing to BN254 G1 following RFC 9380: `expand_message_xmd` over Keccak-256,
//! `hash_to_field` with `L = 48`, and the Shallue-van de Woestijne map with `Z = 1`.

use super::fp::Fp;
use super::g1::G1Affine;
use super::g1::G1Projective;
use super::g1::G1Params;
use super::group::CurveParams;

use sha3::Digest;
use sha3::Keccak256;
use subtle::Choice;
use subtle::ConditionallySelectable;

/// Keccak-256 output size.
const B_IN_BYTES: usize = 32;
/// Keccak-256 rate.
const S_IN_BYTES: usize = 136;
/// Bytes drawn per field element, `ceil((ceil(log2(p)) + 128) / 8)`.
const L: usize = 48;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HashToCurveError {
    #[error("expand_message_xmd cannot produce {0} bytes")]
    OutputTooLong(usize),
    #[error("SVDW constants could not be derived for this curve")]
    InvalidParameters,
    #[error("SVDW map produced x with no square root")]
    NoSquareRoot,
}

/// `expand_message_xmd` with Keccak-256, RFC 9380 section 5.3.1.
pub fn expand_message_xmd(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, HashToCurveError> {
    let ell = (len_in_bytes + B_IN_BYTES - 1) / B_IN_BYTES;
    if ell > 255 || len_in_bytes > 65535 {
        return Err(HashToCurveError::OutputTooLong(len_in_bytes));
    }

    let oversize;
    let dst = if dst.len() > 255 {
        oversize = Keccak256::new()
            .chain_update(b"H2C-OVERSIZE-DST-")
            .chain_update(dst)
            .finalize();
        oversize.as_slice()
    } else {
        dst
    };
    let dst_len = [dst.len() as u8];

    let b_0 = Keccak256::new()
        .chain_update([0u8; S_IN_BYTES])
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut b_i = Keccak256::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut uniform = Vec::with_capacity(ell * B_IN_BYTES);
    uniform.extend_from_slice(&b_i);
    for i in 2..=ell {
        let mut xored = [0u8; B_IN_BYTES];
        for (x, (a, b)) in xored.iter_mut().zip(b_0.iter().zip(b_i.iter())) {
            *x = a ^ b;
        }
        b_i = Keccak256::new()
            .chain_update(xored)
            .chain_update([i as u8])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize();
        uniform.extend_from_slice(&b_i);
    }
    uniform.truncate(len_in_bytes);

    Ok(uniform)
}

/// Two base field elements derived from `msg`, each reduced from 48 uniform bytes.
pub fn hash_to_field(msg: &[u8], dst: &[u8]) -> Result<[Fp; 2], HashToCurveError> {
    let uniform = expand_message_xmd(msg, dst, 2 * L)?;

    let mut u = [Fp::zero(); 2];
    for (i, chunk) in uniform.chunks_exact(L).enumerate() {
        let mut wide = [0u8; L];
        wide.copy_from_slice(chunk);
        u[i] = Fp::from_bytes_wide(&wide);
    }
    Ok(u)
}

/// Shallue-van de Woestijne map onto G1 with its constants precomputed.
#[derive(Clone, Debug)]
pub struct Svdw {
    z: Fp,
    c1: Fp,
    c2: Fp,
    c3: Fp,
    c4: Fp,
}

impl Svdw {
    /// Derives the map constants for `y^2 = x^3 + 3` with `Z = 1`.
    pub fn new() -> Result<Self, HashToCurveError> {
        let z = Fp::one();
        let b = G1Params::coeff_b();
        let g = |x: &Fp| x.square() * x + b;

        let c1 = g(&z);
        let two_inv =
            Option::<Fp>::from(Fp::from(2).invert()).ok_or(HashToCurveError::InvalidParameters)?;
        let c2 = -z * two_inv;

        let three_z2 = Fp::from(3) * z.square();
        let c3 = Option::<Fp>::from((-c1 * three_z2).sqrt())
            .ok_or(HashToCurveError::InvalidParameters)?;
        // sgn0(c3) must be 0
        let c3 = Fp::conditional_select(&c3, &-c3, c3.sgn0());

        let three_z2_inv =
            Option::<Fp>::from(three_z2.invert()).ok_or(HashToCurveError::InvalidParameters)?;
        let c4 = Fp::from(4) * -c1 * three_z2_inv;

        Ok(Svdw { z, c1, c2, c3, c4 })
    }

    /// Maps one field element to a curve point, RFC 9380 appendix F.1.
    pub fn map_to_curve(&self, u: &Fp) -> Result<G1Affine, HashToCurveError> {
        let b = G1Params::coeff_b();
        let g = |x: &Fp| x.square() * x + b;

        let tv1 = u.square() * self.c1;
        let tv2 = Fp::one() + tv1;
        let tv1 = Fp::one() - tv1;
        let tv3 = (tv1 * tv2).invert().unwrap_or(Fp::zero());
        let tv4 = u * tv1 * tv3 * self.c3;

        let x1 = self.c2 - tv4;
        let e1 = g(&x1).is_square();

        let x2 = self.c2 + tv4;
        let e2 = g(&x2).is_square() & !e1;

        let x3 = (tv2.square() * tv3).square() * self.c4 + self.z;

        let x = Fp::conditional_select(&x3, &x1, e1);
        let x = Fp::conditional_select(&x, &x2, e2);

        let y = Option::<Fp>::from(g(&x).sqrt()).ok_or(HashToCurveError::NoSquareRoot)?;
        let same_sign: Choice = !(u.sgn0() ^ y.sgn0());
        let y = Fp::conditional_select(&-y, &y, same_sign);

        Ok(G1Affine::from_xy_unchecked(x, y))
    }

    /// `hash_to_curve` for G1: two field elements, two maps, one addition.
    /// The cofactor is 1, so no clearing step follows.
    pub fn hash_to_curve(&self, msg: &[u8], dst: &[u8]) -> Result<G1Affine, HashToCurveError> {
        let [u0, u1] = hash_to_field(msg, dst)?;
        let q0 = G1Projective::from(self.map_to_curve(&u0)?);
        let q1 = G1Projective::from(self.map_to_curve(&u1)?);

        Ok((q0 + q1).to_affine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::fp::tests::random_fp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DST: &[u8] = b"BLS_SIG_BN254G1_XMD:KECCAK-256_SVDW_RO_NUL_";

    #[test]
    fn keccak_backend() {
        let empty = Keccak256::digest(b"");
        assert_eq!(
            hex::encode(empty),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn expand_message() {
        let out = expand_message_xmd(b"abc", DST, 32).unwrap();
        assert_eq!(
            hex::encode(out),
            "86584462b5d82b369a616b656a0ee0dad668127d8b200618158fcabd8016f2b1"
        );

        let long = expand_message_xmd(b"abc", DST, 96).unwrap();
        assert_eq!(long.len(), 96);
        assert_eq!(
            expand_message_xmd(b"abc", DST, 256 * 32),
            Err(HashToCurveError::OutputTooLong(256 * 32))
        );

        // oversize tags are hashed down first, so they still separate domains
        let big_dst = vec![b'a'; 300];
        let a = expand_message_xmd(b"abc", &big_dst, 32).unwrap();
        let b = expand_message_xmd(b"abc", &big_dst[..299], 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn field_elements() {
        let [u0, u1] = hash_to_field(b"abc", DST).unwrap();
        assert_eq!(
            hex::encode(u0.to_bytes()),
            "021c10b8230c87b112c7e4a5673b6ae89cce6380e9b2ca4b763bc1b1aa3de0c5"
        );
        assert_eq!(
            hex::encode(u1.to_bytes()),
            "07a5d67190c45ee685d07237ac99e70a91951db3c437618fbf1583fb347745e7"
        );
    }

    #[test]
    fn constants() {
        let svdw = Svdw::new().unwrap();
        assert_eq!(svdw.c1, Fp::from(4));
        assert_eq!(svdw.c2 + svdw.c2, -Fp::one());
        assert_eq!(svdw.c3.square(), -Fp::from(12));
        assert!(!bool::from(svdw.c3.sgn0()));
        assert_eq!(svdw.c4 * Fp::from(3), -Fp::from(16));
    }

    #[test]
    fn map_lands_on_curve() {
        let svdw = Svdw::new().unwrap();
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..32 {
            let u = random_fp(&mut rng);
            let p = svdw.map_to_curve(&u).unwrap();
            assert!(bool::from(p.is_on_curve()));
            assert_eq!(p.y().sgn0().unwrap_u8(), u.sgn0().unwrap_u8());
        }

        // exceptional inputs where 1 - c1 u^2 or 1 + c1 u^2 vanish
        for u in [Fp::zero(), Fp::from(2).invert().unwrap()] {
            let p = svdw.map_to_curve(&u).unwrap();
            assert!(bool::from(p.is_on_curve()));
        }
    }

    #[test]
    fn known_points() {
        let svdw = Svdw::new().unwrap();
        let abc = svdw.hash_to_curve(b"abc", DST).unwrap();
        assert_eq!(
            hex::encode(abc.to_uncompressed()),
            "1a3f8eafa632d4fe3132bf74145143bea5620870973470f8c551d71034d144180e4a18aa57954bda4ba571a61c49f1cc9791b890190d6cbfa07fd4624ff9e220"
        );

        let empty = svdw.hash_to_curve(b"", DST).unwrap();
        assert_eq!(
            hex::encode(empty.to_uncompressed()),
            "044eadc48e365967c8448710563a4cb139b7f78cb79d4829f20a3c356436fe4321de572d5339c6fe5a2a5652732d5fa30750f799b14786aa98369ddc674f98fd"
        );

        assert_eq!(svdw.hash_to_curve(b"abc", DST).unwrap(), abc);
        assert_ne!(svdw.hash_to_curve(b"abc", b"ANOTHER_TAG").unwrap(), abc);
    }
}
