// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Signature verification over a fixed curve and group assignment.
//!
//! Every scheme reduces to "does `signature` sign `message` under `public_key`",
//! so the orchestration layer only ever sees [`PairingVerifier`].

pub mod bls12381;
pub mod bn254;

pub use bls12381::KeyOnG1Verifier;
pub use bls12381::KeyOnG2Verifier;
pub use bn254::Bn254Verifier;

use crate::bn254::HashToCurveError;
use crate::bn254::PointError;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("public key is not a valid group element")]
    InvalidPublicKey,
    #[error("public key is the identity")]
    IdentityPublicKey,
    #[error("signature is not a valid group element")]
    InvalidSignature,
    #[error("hash to curve failed: {0}")]
    HashToCurve(#[from] HashToCurveError),
    #[error("pairing check failed")]
    SignatureMismatch,
}

impl KeyError {
    pub(crate) fn public_key(err: PointError) -> Self {
        tracing::debug!("public key rejected: {err}");
        KeyError::InvalidPublicKey
    }

    pub(crate) fn signature(err: PointError) -> Self {
        tracing::debug!("signature rejected: {err}");
        KeyError::InvalidSignature
    }
}

/// A BLS verification equation bound to one curve, group assignment and
/// hash-to-curve domain separation tag.
pub trait PairingVerifier: Send + Sync {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), KeyError>;
}
