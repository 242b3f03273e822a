// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::bn254::g2::G2_UNCOMPRESSED_BYTES as BN254_G2_BYTES;
use crate::key::bls12381::G1_COMPRESSED_BYTES;
use crate::key::bls12381::G1_UNCOMPRESSED_BYTES;
use crate::key::bls12381::G2_COMPRESSED_BYTES;
use crate::key::bls12381::G2_UNCOMPRESSED_BYTES;

use sha2::Digest;
use sha2::Sha256;
use sha3::Keccak256;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SCHEME: &str = "pedersen-bls-chained";

/// Tag for hashing onto BLS12-381 G2, shared by the pedersen schemes and the
/// historical keys-on-G2 scheme.
pub const DST_BLS12381_G2: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";
pub const DST_BLS12381_G1: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";
pub const DST_BN254_G1: &[u8] = b"BLS_SIG_BN254G1_XMD:KECCAK-256_SVDW_RO_NUL_";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheme: {0}")]
pub struct UnknownScheme(pub String);

/// Cryptographic configuration of a chain, named by its `schemeID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeId {
    /// Keys on G1, signatures on G2, each round signs the previous signature.
    PedersenBlsChained,
    PedersenBlsUnchained,
    /// Keys on G2, signatures on G1, hashed with the G2 tag.
    BlsUnchainedOnG1,
    BlsUnchainedG1Rfc9380,
    BlsBn254UnchainedOnG1,
}

impl SchemeId {
    pub const ALL: [SchemeId; 5] = [
        SchemeId::PedersenBlsChained,
        SchemeId::PedersenBlsUnchained,
        SchemeId::BlsUnchainedOnG1,
        SchemeId::BlsUnchainedG1Rfc9380,
        SchemeId::BlsBn254UnchainedOnG1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeId::PedersenBlsChained => "pedersen-bls-chained",
            SchemeId::PedersenBlsUnchained => "pedersen-bls-unchained",
            SchemeId::BlsUnchainedOnG1 => "bls-unchained-on-g1",
            SchemeId::BlsUnchainedG1Rfc9380 => "bls-unchained-g1-rfc9380",
            SchemeId::BlsBn254UnchainedOnG1 => "bls-bn254-unchained-on-g1",
        }
    }

    pub fn list_schemes() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().into()).collect()
    }

    pub fn is_chained(&self) -> bool {
        matches!(self, SchemeId::PedersenBlsChained)
    }

    /// Accepted encoded public key lengths.
    pub fn public_key_len(&self) -> &'static [usize] {
        match self {
            SchemeId::PedersenBlsChained | SchemeId::PedersenBlsUnchained => {
                &[G1_COMPRESSED_BYTES, G1_UNCOMPRESSED_BYTES]
            }
            SchemeId::BlsUnchainedOnG1 | SchemeId::BlsUnchainedG1Rfc9380 => {
                &[G2_COMPRESSED_BYTES, G2_UNCOMPRESSED_BYTES]
            }
            SchemeId::BlsBn254UnchainedOnG1 => &[BN254_G2_BYTES],
        }
    }

    /// Hash-to-curve domain separation tag.
    pub fn dst(&self) -> &'static [u8] {
        match self {
            SchemeId::PedersenBlsChained
            | SchemeId::PedersenBlsUnchained
            | SchemeId::BlsUnchainedOnG1 => DST_BLS12381_G2,
            SchemeId::BlsUnchainedG1Rfc9380 => DST_BLS12381_G1,
            SchemeId::BlsBn254UnchainedOnG1 => DST_BN254_G1,
        }
    }

    /// Message signed at `round`. Chained schemes prepend the previous signature;
    /// BN254 digests with Keccak-256, everything else with SHA-256.
    pub fn digest(&self, round: u64, previous_signature: Option<&[u8]>) -> Vec<u8> {
        match self {
            SchemeId::PedersenBlsChained => {
                let mut h = Sha256::new();
                if let Some(prev) = previous_signature {
                    h.update(prev);
                }
                h.update(round.to_be_bytes());
                h.finalize().to_vec()
            }
            SchemeId::PedersenBlsUnchained
            | SchemeId::BlsUnchainedOnG1
            | SchemeId::BlsUnchainedG1Rfc9380 => Sha256::digest(round.to_be_bytes()).to_vec(),
            SchemeId::BlsBn254UnchainedOnG1 => Keccak256::digest(round.to_be_bytes()).to_vec(),
        }
    }
}

impl FromStr for SchemeId {
    type Err = UnknownScheme;

    fn from_str(scheme: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == scheme)
            .ok_or_else(|| UnknownScheme(scheme.to_string()))
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scheme in SchemeId::ALL {
            assert_eq!(scheme.as_str().parse::<SchemeId>(), Ok(scheme));
        }
        assert_eq!(
            "totally-unsupported".parse::<SchemeId>(),
            Err(UnknownScheme("totally-unsupported".into()))
        );
        assert_eq!(DEFAULT_SCHEME.parse::<SchemeId>(), Ok(SchemeId::PedersenBlsChained));
        assert_eq!(SchemeId::list_schemes().len(), 5);
    }

    #[test]
    fn round_is_big_endian() {
        let unchained = SchemeId::PedersenBlsUnchained.digest(256, None);
        let expected = Sha256::digest([0, 0, 0, 0, 0, 0, 1, 0]).to_vec();
        assert_eq!(unchained, expected);

        let max = SchemeId::BlsUnchainedG1Rfc9380.digest(u64::MAX, None);
        assert_eq!(max, Sha256::digest([0xff; 8]).to_vec());
    }

    #[test]
    fn chained_digest_covers_previous_signature() {
        let prev = [7u8; 96];
        let chained = SchemeId::PedersenBlsChained.digest(3, Some(&prev));

        let mut input = prev.to_vec();
        input.extend_from_slice(&3u64.to_be_bytes());
        assert_eq!(chained, Sha256::digest(&input).to_vec());

        // unchained schemes ignore it
        assert_eq!(
            SchemeId::PedersenBlsUnchained.digest(3, Some(&prev)),
            SchemeId::PedersenBlsUnchained.digest(3, None)
        );
    }

    #[test]
    fn bn254_uses_keccak() {
        assert_eq!(
            hex::encode(SchemeId::BlsBn254UnchainedOnG1.digest(1, None)),
            "6c31fc15422ebad28aaf9089c306702f67540b53c7eea8b7d2941044b027100f"
        );
        assert_eq!(SchemeId::BlsBn254UnchainedOnG1.dst(), DST_BN254_G1);
        assert_eq!(SchemeId::BlsUnchainedOnG1.dst(), DST_BLS12381_G2);
    }
}
