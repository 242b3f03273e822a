// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! BLS12-381 verifiers for both group assignments.
//!
//! Points are accepted compressed (drand's wire form) or uncompressed; the
//! decoders check subgroup membership.

use super::KeyError;
use super::PairingVerifier;

use bls12_381::hash_to_curve::ExpandMsgXmd;
use bls12_381::hash_to_curve::HashToCurve;
use bls12_381::multi_miller_loop;
use bls12_381::G1Affine;
use bls12_381::G1Projective;
use bls12_381::G2Affine;
use bls12_381::G2Prepared;
use bls12_381::G2Projective;
use bls12_381::Gt;
// bls12_381's expand_message_xmd is written against digest 0.9
use sha2_09::Sha256;

pub const G1_COMPRESSED_BYTES: usize = 48;
pub const G1_UNCOMPRESSED_BYTES: usize = 96;
pub const G2_COMPRESSED_BYTES: usize = 96;
pub const G2_UNCOMPRESSED_BYTES: usize = 192;

fn g1_from_bytes(bytes: &[u8]) -> Option<G1Affine> {
    if let Ok(b) = <&[u8; G1_COMPRESSED_BYTES]>::try_from(bytes) {
        return G1Affine::from_compressed(b).into();
    }
    if let Ok(b) = <&[u8; G1_UNCOMPRESSED_BYTES]>::try_from(bytes) {
        return G1Affine::from_uncompressed(b).into();
    }
    None
}

fn g2_from_bytes(bytes: &[u8]) -> Option<G2Affine> {
    if let Ok(b) = <&[u8; G2_COMPRESSED_BYTES]>::try_from(bytes) {
        return G2Affine::from_compressed(b).into();
    }
    if let Ok(b) = <&[u8; G2_UNCOMPRESSED_BYTES]>::try_from(bytes) {
        return G2Affine::from_uncompressed(b).into();
    }
    None
}

/// Public keys on G1, signatures on G2: `e(pk, H(m)) == e(g1, sig)`.
pub struct KeyOnG1Verifier {
    dst: &'static [u8],
}

impl KeyOnG1Verifier {
    pub fn new(dst: &'static [u8]) -> Self {
        Self { dst }
    }
}

impl PairingVerifier for KeyOnG1Verifier {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), KeyError> {
        let pk = g1_from_bytes(public_key).ok_or(KeyError::InvalidPublicKey)?;
        if bool::from(pk.is_identity()) {
            return Err(KeyError::IdentityPublicKey);
        }
        let sig = g2_from_bytes(signature).ok_or(KeyError::InvalidSignature)?;

        let hashed = <G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(
            message, self.dst,
        );
        let hashed = G2Prepared::from(G2Affine::from(hashed));
        let sig = G2Prepared::from(sig);
        let neg_g1 = -G1Affine::generator();

        let product = multi_miller_loop(&[(&pk, &hashed), (&neg_g1, &sig)]).final_exponentiation();
        if product == Gt::identity() {
            Ok(())
        } else {
            Err(KeyError::SignatureMismatch)
        }
    }
}

/// Public keys on G2, signatures on G1: `e(H(m), -pk) * e(sig, g2) == 1`.
pub struct KeyOnG2Verifier {
    dst: &'static [u8],
    g2: G2Prepared,
}

impl KeyOnG2Verifier {
    pub fn new(dst: &'static [u8]) -> Self {
        Self {
            dst,
            g2: G2Prepared::from(G2Affine::generator()),
        }
    }
}

impl PairingVerifier for KeyOnG2Verifier {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), KeyError> {
        let pk = g2_from_bytes(public_key).ok_or(KeyError::InvalidPublicKey)?;
        if bool::from(pk.is_identity()) {
            return Err(KeyError::IdentityPublicKey);
        }
        let sig = g1_from_bytes(signature).ok_or(KeyError::InvalidSignature)?;

        let hashed = <G1Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(
            message, self.dst,
        );
        let hashed = G1Affine::from(hashed);
        let neg_pk = G2Prepared::from(-pk);

        let product =
            multi_miller_loop(&[(&hashed, &neg_pk), (&sig, &self.g2)]).final_exponentiation();
        if product == Gt::identity() {
            Ok(())
        } else {
            Err(KeyError::SignatureMismatch)
        }
    }
}
