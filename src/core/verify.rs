// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Beacon verification: round check, randomness check, shape classification and
//! the scheme's pairing equation, in that order.

use super::beacon::Beacon;
use super::beacon::ClassifyError;
use super::beacon::RandomnessBeacon;
use super::schemes::SchemeId;

use crate::bn254::HashToCurveError;
use crate::chain::ChainInfo;
use crate::key::Bn254Verifier;
use crate::key::KeyError;
use crate::key::KeyOnG1Verifier;
use crate::key::KeyOnG2Verifier;
use crate::key::PairingVerifier;

use sha2::Digest;
use sha2::Sha256;
use std::sync::Arc;
use tracing::debug;
use tracing::debug_span;
use tracing::error;
use tracing::warn;

/// Why a beacon was not verified.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("round mismatch: expected {expected}, received {received}")]
    RoundMismatch { expected: u64, received: u64 },
    #[error("randomness does not match the signature")]
    InvalidRandomness,
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("beacon shape does not match the scheme: {0}")]
    ShapeMismatch(ClassifyError),
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("signature verification failed")]
    SignatureMismatch,
    #[error("malformed input: {0}")]
    Malformed(String),
}

impl From<ClassifyError> for VerifyError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::UnsupportedScheme(s) => VerifyError::UnsupportedScheme(s.0),
            other => VerifyError::ShapeMismatch(other),
        }
    }
}

impl From<KeyError> for VerifyError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::InvalidPublicKey | KeyError::IdentityPublicKey => {
                VerifyError::InvalidPublicKey
            }
            KeyError::InvalidSignature => VerifyError::InvalidSignature,
            KeyError::HashToCurve(e) => VerifyError::Malformed(e.to_string()),
            KeyError::SignatureMismatch => VerifyError::SignatureMismatch,
        }
    }
}

/// Holds one immutable verifier per scheme. Safe to share across threads.
pub struct BeaconVerifier {
    pedersen: KeyOnG1Verifier,
    on_g1: KeyOnG2Verifier,
    rfc9380: KeyOnG2Verifier,
    bn254: Bn254Verifier,
}

impl BeaconVerifier {
    pub fn new() -> Result<Self, HashToCurveError> {
        Ok(Self {
            pedersen: KeyOnG1Verifier::new(SchemeId::PedersenBlsChained.dst()),
            on_g1: KeyOnG2Verifier::new(SchemeId::BlsUnchainedOnG1.dst()),
            rfc9380: KeyOnG2Verifier::new(SchemeId::BlsUnchainedG1Rfc9380.dst()),
            bn254: Bn254Verifier::new(SchemeId::BlsBn254UnchainedOnG1.dst())?,
        })
    }

    fn pairing_verifier(&self, beacon: &Beacon<'_>) -> &dyn PairingVerifier {
        match beacon {
            Beacon::Chained(_) | Beacon::Unchained(_) => &self.pedersen,
            Beacon::G1Swapped(_) => &self.on_g1,
            Beacon::G1Rfc9380(_) => &self.rfc9380,
            Beacon::Bn254G1(_) => &self.bn254,
        }
    }

    /// Verifies `beacon` as round `expected_round` of the chain described by `info`.
    pub fn verify(
        &self,
        info: &ChainInfo,
        beacon: &RandomnessBeacon,
        expected_round: u64,
    ) -> Result<(), VerifyError> {
        let span = debug_span!("verify", round = beacon.round, scheme = %info.scheme_id);
        let _guard = span.enter();

        if beacon.round != expected_round {
            debug!("expected round {expected_round}");
            return Err(VerifyError::RoundMismatch {
                expected: expected_round,
                received: beacon.round,
            });
        }

        if Sha256::digest(&beacon.signature)[..] != beacon.randomness[..] {
            debug!("randomness is not the hash of the signature");
            return Err(VerifyError::InvalidRandomness);
        }

        let classified = Beacon::classify(&info.scheme_id, beacon).map_err(|err| {
            match &err {
                ClassifyError::UnsupportedScheme(_) => warn!("{err}"),
                _ => warn!("beacon rejected: {err}"),
            }
            VerifyError::from(err)
        })?;

        let message = classified.message();
        self.pairing_verifier(&classified)
            .verify(&info.public_key, &message, classified.signature())
            .map_err(|err| {
                match err {
                    KeyError::SignatureMismatch => debug!("{err}"),
                    _ => warn!("{err}"),
                }
                VerifyError::from(err)
            })
    }

    /// Trust decision: true only if every check passes.
    pub fn verify_beacon(
        &self,
        info: &ChainInfo,
        beacon: &RandomnessBeacon,
        expected_round: u64,
    ) -> bool {
        self.verify(info, beacon, expected_round).is_ok()
    }
}

/// One-shot verification with a freshly built [`BeaconVerifier`].
pub fn verify_beacon(info: &ChainInfo, beacon: &RandomnessBeacon, expected_round: u64) -> bool {
    match BeaconVerifier::new() {
        Ok(verifier) => verifier.verify_beacon(info, beacon, expected_round),
        Err(err) => {
            error!("failed to initialise verifier: {err}");
            false
        }
    }
}

/// Runs the whole check on the blocking pool so async callers stay responsive.
pub async fn verify_beacon_async(
    verifier: Arc<BeaconVerifier>,
    info: ChainInfo,
    beacon: RandomnessBeacon,
    expected_round: u64,
) -> bool {
    let task = tokio::task::spawn_blocking(move || {
        verifier.verify_beacon(&info, &beacon, expected_round)
    });

    match task.await {
        Ok(verified) => verified,
        Err(err) => {
            error!("verification task failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::defaults::MAINNET_DEFAULT;

    fn mainnet_round_1() -> RandomnessBeacon {
        RandomnessBeacon {
            round: 1,
            randomness: hex::decode("101297f1ca7dc44ef6088d94ad5fb7ba03455dc33d53ddb412bbc4564ed986ec").unwrap(),
            signature: hex::decode("8d61d9100567de44682506aea1a7a6fa6e5491cd27a0a0ed349ef6910ac5ac20ff7bc3e09d7c046566c9f7f3c6f3b10104990e7cb424998203d8f7de586fb7fa5f60045417a432684f85093b06ca91c769f0e7ca19268375e659c2a2352b4655").unwrap(),
            previous_signature: Some(
                hex::decode("176f93498eac9ca337150b46d21dd58673ea4e3581185f869672e59fa4cb390a").unwrap(),
            ),
        }
    }

    #[test]
    fn mainnet_first_round() {
        let verifier = BeaconVerifier::new().unwrap();
        let info = MAINNET_DEFAULT.chain_info().unwrap();
        let beacon = mainnet_round_1();

        assert_eq!(verifier.verify(&info, &beacon, 1), Ok(()));
        assert!(verifier.verify_beacon(&info, &beacon, 1));
        assert!(verify_beacon(&info, &beacon, 1));
    }

    #[test]
    fn checks_run_in_order() {
        let verifier = BeaconVerifier::new().unwrap();
        let mut info = MAINNET_DEFAULT.chain_info().unwrap();
        let mut beacon = mainnet_round_1();
        beacon.randomness[0] ^= 1;
        info.scheme_id = "totally-unsupported".into();

        // round first, then randomness, then the scheme
        assert_eq!(
            verifier.verify(&info, &beacon, 2),
            Err(VerifyError::RoundMismatch {
                expected: 2,
                received: 1
            })
        );
        assert_eq!(
            verifier.verify(&info, &beacon, 1),
            Err(VerifyError::InvalidRandomness)
        );

        beacon.randomness[0] ^= 1;
        assert_eq!(
            verifier.verify(&info, &beacon, 1),
            Err(VerifyError::UnsupportedScheme("totally-unsupported".into()))
        );
    }

    #[test]
    fn error_mapping() {
        assert_eq!(
            VerifyError::from(KeyError::IdentityPublicKey),
            VerifyError::InvalidPublicKey
        );
        assert_eq!(
            VerifyError::from(ClassifyError::ZeroRound),
            VerifyError::ShapeMismatch(ClassifyError::ZeroRound)
        );
        assert!(matches!(
            VerifyError::from(KeyError::HashToCurve(HashToCurveError::NoSquareRoot)),
            VerifyError::Malformed(_)
        ));
    }

    #[tokio::test]
    async fn async_wrapper() {
        let verifier = Arc::new(BeaconVerifier::new().unwrap());
        let info = MAINNET_DEFAULT.chain_info().unwrap();

        let ok = verify_beacon_async(Arc::clone(&verifier), info.clone(), mainnet_round_1(), 1);
        let wrong_round = verify_beacon_async(verifier, info, mainnet_round_1(), 7);
        assert!(ok.await);
        assert!(!wrong_round.await);
    }
}
