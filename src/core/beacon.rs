// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use super::schemes::SchemeId;
use super::schemes::UnknownScheme;

use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_BEACON_ID: &str = "default";

/// There is a direct relationship between an empty string and the reserved id "default".
pub fn is_default_beacon_id(beacon_id: &str) -> bool {
    beacon_id == DEFAULT_BEACON_ID || beacon_id.is_empty()
}

/// One round of randomness as served by `/public/<round>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomnessBeacon {
    #[serde(alias = "round_number")]
    pub round: u64,
    #[serde(with = "hex")]
    pub randomness: Vec<u8>,
    #[serde(with = "hex")]
    pub signature: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_option")]
    pub previous_signature: Option<Vec<u8>>,
}

mod hex_option {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => s.serialize_some(&hex::encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error(transparent)]
    UnsupportedScheme(#[from] UnknownScheme),
    #[error("round 0 has no beacon")]
    ZeroRound,
    #[error("randomness is empty")]
    EmptyRandomness,
    #[error("signature is empty")]
    EmptySignature,
    #[error("chained beacon needs a previous signature")]
    MissingPreviousSignature,
    #[error("unchained beacon must not carry a previous signature")]
    UnexpectedPreviousSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainedBeacon<'a> {
    pub round: u64,
    pub signature: &'a [u8],
    pub previous_signature: &'a [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnchainedBeacon<'a> {
    pub round: u64,
    pub signature: &'a [u8],
}

/// A beacon whose shape has been checked against its chain's scheme, one
/// variant per scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beacon<'a> {
    /// `pedersen-bls-chained`
    Chained(ChainedBeacon<'a>),
    /// `pedersen-bls-unchained`
    Unchained(UnchainedBeacon<'a>),
    /// `bls-unchained-on-g1`
    G1Swapped(UnchainedBeacon<'a>),
    /// `bls-unchained-g1-rfc9380`
    G1Rfc9380(UnchainedBeacon<'a>),
    /// `bls-bn254-unchained-on-g1`
    Bn254G1(UnchainedBeacon<'a>),
}

impl<'a> Beacon<'a> {
    /// Resolves the wire beacon against `scheme_id`. Anything that is not
    /// exactly one of the known shapes is rejected.
    pub fn classify(scheme_id: &str, beacon: &'a RandomnessBeacon) -> Result<Self, ClassifyError> {
        let scheme: SchemeId = scheme_id.parse()?;

        if beacon.round == 0 {
            return Err(ClassifyError::ZeroRound);
        }
        if beacon.randomness.is_empty() {
            return Err(ClassifyError::EmptyRandomness);
        }
        if beacon.signature.is_empty() {
            return Err(ClassifyError::EmptySignature);
        }

        let unchained = UnchainedBeacon {
            round: beacon.round,
            signature: &beacon.signature,
        };
        match (scheme, beacon.previous_signature.as_deref()) {
            (SchemeId::PedersenBlsChained, Some(prev)) if !prev.is_empty() => {
                Ok(Beacon::Chained(ChainedBeacon {
                    round: beacon.round,
                    signature: &beacon.signature,
                    previous_signature: prev,
                }))
            }
            (SchemeId::PedersenBlsChained, _) => Err(ClassifyError::MissingPreviousSignature),
            (_, Some(_)) => Err(ClassifyError::UnexpectedPreviousSignature),
            (SchemeId::PedersenBlsUnchained, None) => Ok(Beacon::Unchained(unchained)),
            (SchemeId::BlsUnchainedOnG1, None) => Ok(Beacon::G1Swapped(unchained)),
            (SchemeId::BlsUnchainedG1Rfc9380, None) => Ok(Beacon::G1Rfc9380(unchained)),
            (SchemeId::BlsBn254UnchainedOnG1, None) => Ok(Beacon::Bn254G1(unchained)),
        }
    }

    pub fn scheme(&self) -> SchemeId {
        match self {
            Beacon::Chained(_) => SchemeId::PedersenBlsChained,
            Beacon::Unchained(_) => SchemeId::PedersenBlsUnchained,
            Beacon::G1Swapped(_) => SchemeId::BlsUnchainedOnG1,
            Beacon::G1Rfc9380(_) => SchemeId::BlsUnchainedG1Rfc9380,
            Beacon::Bn254G1(_) => SchemeId::BlsBn254UnchainedOnG1,
        }
    }

    pub fn round(&self) -> u64 {
        match self {
            Beacon::Chained(b) => b.round,
            Beacon::Unchained(b)
            | Beacon::G1Swapped(b)
            | Beacon::G1Rfc9380(b)
            | Beacon::Bn254G1(b) => b.round,
        }
    }

    pub fn signature(&self) -> &'a [u8] {
        match self {
            Beacon::Chained(b) => b.signature,
            Beacon::Unchained(b)
            | Beacon::G1Swapped(b)
            | Beacon::G1Rfc9380(b)
            | Beacon::Bn254G1(b) => b.signature,
        }
    }

    /// The signed message for this round.
    pub fn message(&self) -> Vec<u8> {
        match self {
            Beacon::Chained(b) => self.scheme().digest(b.round, Some(b.previous_signature)),
            _ => self.scheme().digest(self.round(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beacon(round: u64, previous_signature: Option<Vec<u8>>) -> RandomnessBeacon {
        RandomnessBeacon {
            round,
            randomness: vec![1; 32],
            signature: vec![2; 96],
            previous_signature,
        }
    }

    #[test]
    fn default_id() {
        assert!(is_default_beacon_id("default"));
        assert!(is_default_beacon_id(""));
        assert!(!is_default_beacon_id("quicknet"));
    }

    #[test]
    fn json_shapes() {
        let unchained: RandomnessBeacon = serde_json::from_str(
            r#"{"round":3,"randomness":"0a0b","signature":"0c0d"}"#,
        )
        .unwrap();
        assert_eq!(unchained.previous_signature, None);
        assert_eq!(unchained.randomness, vec![0x0a, 0x0b]);

        let chained: RandomnessBeacon = serde_json::from_str(
            r#"{"round":3,"randomness":"0a","signature":"0c","previous_signature":"ff"}"#,
        )
        .unwrap();
        assert_eq!(chained.previous_signature, Some(vec![0xff]));

        // serialising back omits an absent previous signature
        let json = serde_json::to_string(&unchained).unwrap();
        assert!(!json.contains("previous_signature"));

        assert!(serde_json::from_str::<RandomnessBeacon>(
            r#"{"round":3,"randomness":"0a0","signature":"0c"}"#
        )
        .is_err());
    }

    #[test]
    fn classify_chained() {
        let b = beacon(5, Some(vec![3; 96]));
        let classified = Beacon::classify("pedersen-bls-chained", &b).unwrap();
        assert_eq!(classified.scheme(), SchemeId::PedersenBlsChained);
        assert_eq!(classified.round(), 5);
        assert_eq!(classified.signature(), &b.signature[..]);
        assert_eq!(
            classified.message(),
            SchemeId::PedersenBlsChained.digest(5, Some(&[3; 96]))
        );

        assert_eq!(
            Beacon::classify("pedersen-bls-chained", &beacon(5, None)),
            Err(ClassifyError::MissingPreviousSignature)
        );
        assert_eq!(
            Beacon::classify("pedersen-bls-chained", &beacon(5, Some(Vec::new()))),
            Err(ClassifyError::MissingPreviousSignature)
        );
    }

    #[test]
    fn classify_unchained() {
        for scheme in [
            SchemeId::PedersenBlsUnchained,
            SchemeId::BlsUnchainedOnG1,
            SchemeId::BlsUnchainedG1Rfc9380,
            SchemeId::BlsBn254UnchainedOnG1,
        ] {
            let b = beacon(9, None);
            let classified = Beacon::classify(scheme.as_str(), &b).unwrap();
            assert_eq!(classified.scheme(), scheme);
            assert_eq!(classified.message(), scheme.digest(9, None));

            assert_eq!(
                Beacon::classify(scheme.as_str(), &beacon(9, Some(vec![1]))),
                Err(ClassifyError::UnexpectedPreviousSignature)
            );
        }
    }

    #[test]
    fn one_variant_per_scheme() {
        let unchained = beacon(9, None);
        let chained = beacon(9, Some(vec![3; 96]));

        for scheme in SchemeId::ALL {
            let b = if scheme.is_chained() { &chained } else { &unchained };
            let classified = Beacon::classify(scheme.as_str(), b).unwrap();
            let expected = match scheme {
                SchemeId::PedersenBlsChained => matches!(classified, Beacon::Chained(_)),
                SchemeId::PedersenBlsUnchained => matches!(classified, Beacon::Unchained(_)),
                SchemeId::BlsUnchainedOnG1 => matches!(classified, Beacon::G1Swapped(_)),
                SchemeId::BlsUnchainedG1Rfc9380 => matches!(classified, Beacon::G1Rfc9380(_)),
                SchemeId::BlsBn254UnchainedOnG1 => matches!(classified, Beacon::Bn254G1(_)),
            };
            assert!(expected, "{scheme} classified as {classified:?}");
            assert_eq!(classified.scheme(), scheme);
            assert_eq!(classified.round(), 9);
        }
    }

    #[test]
    fn classify_fails_closed() {
        assert_eq!(
            Beacon::classify("totally-unsupported", &beacon(1, None)),
            Err(ClassifyError::UnsupportedScheme(UnknownScheme(
                "totally-unsupported".into()
            )))
        );
        assert_eq!(
            Beacon::classify("pedersen-bls-unchained", &beacon(0, None)),
            Err(ClassifyError::ZeroRound)
        );

        let mut b = beacon(1, None);
        b.signature.clear();
        assert_eq!(
            Beacon::classify("pedersen-bls-unchained", &b),
            Err(ClassifyError::EmptySignature)
        );

        let mut b = beacon(1, None);
        b.randomness.clear();
        assert_eq!(
            Beacon::classify("pedersen-bls-unchained", &b),
            Err(ClassifyError::EmptyRandomness)
        );
    }
}
