// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use super::KeyError;
use super::PairingVerifier;

use crate::bn254::pairing::multi_miller_loop;
use crate::bn254::pairing::G2Prepared;
use crate::bn254::G1Affine;
use crate::bn254::G2Affine;
use crate::bn254::HashToCurveError;
use crate::bn254::Svdw;

/// BN254 verifier with public keys on G2 (128 bytes, imaginary parts first)
/// and signatures on G1 (64 bytes). Checks `e(H(m), -pk) * e(sig, g2) == 1`.
pub struct Bn254Verifier {
    svdw: Svdw,
    dst: &'static [u8],
    g2: G2Prepared,
}

impl Bn254Verifier {
    pub fn new(dst: &'static [u8]) -> Result<Self, HashToCurveError> {
        Ok(Self {
            svdw: Svdw::new()?,
            dst,
            g2: G2Prepared::from(G2Affine::generator()),
        })
    }
}

impl PairingVerifier for Bn254Verifier {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), KeyError> {
        let pk = G2Affine::from_uncompressed(public_key).map_err(KeyError::public_key)?;
        if bool::from(pk.is_identity()) {
            return Err(KeyError::IdentityPublicKey);
        }
        let sig = G1Affine::from_uncompressed(signature).map_err(KeyError::signature)?;

        let hashed = self.svdw.hash_to_curve(message, self.dst)?;
        let neg_pk = G2Prepared::from(-pk);

        let product =
            multi_miller_loop(&[(&hashed, &neg_pk), (&sig, &self.g2)]).final_exponentiation();
        if bool::from(product.is_identity()) {
            Ok(())
        } else {
            Err(KeyError::SignatureMismatch)
        }
    }
}
