// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::core::beacon::is_default_beacon_id;
use crate::core::schemes::SchemeId;
use crate::core::schemes::UnknownScheme;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use std::path::Path;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ChainInfoError {
    #[error("period must be greater than zero")]
    ZeroPeriod,
    #[error(transparent)]
    UnknownScheme(#[from] UnknownScheme),
    #[error("invalid public key length for {scheme}: received {received}, expected one of {expected:?}")]
    PublicKeyLength {
        scheme: SchemeId,
        received: usize,
        expected: &'static [usize],
    },
    #[error("chain hash mismatch: info carries {received}, computed {computed}")]
    HashMismatch { received: String, computed: String },
    #[error("chain hash {0} is not the trusted one")]
    UntrustedHash(String),
    #[error("public key {0} is not the trusted one")]
    UntrustedPublicKey(String),
    #[error("failed to read chain info: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid chain info json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid chain info toml: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "beaconID", default)]
    pub beacon_id: String,
}

/// Public information that is necessary for a client to verify any beacon present
/// in a randomness chain, in the shape served by `/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    #[serde(with = "hex")]
    pub public_key: Vec<u8>,
    pub period: u32,
    pub genesis_time: u64,
    #[serde(with = "hex")]
    pub hash: Vec<u8>,
    #[serde(rename = "groupHash", with = "hex")]
    pub group_hash: Vec<u8>,
    #[serde(rename = "schemeID")]
    pub scheme_id: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Pinned values a chain info must match before it is trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainVerificationParams {
    pub chain_hash: Vec<u8>,
    pub public_key: Vec<u8>,
}

impl ChainInfo {
    pub fn from_json(json: &str) -> Result<Self, ChainInfoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml: &str) -> Result<Self, ChainInfoError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads a chain info file, TOML for a `.toml` extension and JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, ChainInfoError> {
        let content = std::fs::read_to_string(path)?;
        debug!("loading chain info from {}", path.display());
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn beacon_id(&self) -> &str {
        &self.metadata.beacon_id
    }

    pub fn scheme(&self) -> Result<SchemeId, UnknownScheme> {
        self.scheme_id.parse()
    }

    /// Canonical chain hash:
    /// `SHA256(period || genesis_time || public_key || group_hash [|| beacon_id])`.
    pub fn compute_hash(&self) -> [u8; 32] {
        let mut h = sha2::Sha256::new();
        h.update(self.period.to_be_bytes());
        h.update(self.genesis_time.to_be_bytes());
        h.update(&self.public_key);
        h.update(&self.group_hash);
        if !is_default_beacon_id(self.beacon_id()) {
            h.update(self.beacon_id().as_bytes());
        }

        h.finalize().into()
    }

    pub fn validate(&self) -> Result<(), ChainInfoError> {
        if self.period == 0 {
            return Err(ChainInfoError::ZeroPeriod);
        }

        let scheme = self.scheme()?;
        let expected = scheme.public_key_len();
        if !expected.contains(&self.public_key.len()) {
            return Err(ChainInfoError::PublicKeyLength {
                scheme,
                received: self.public_key.len(),
                expected,
            });
        }

        let computed = self.compute_hash();
        if computed[..] != self.hash[..] {
            return Err(ChainInfoError::HashMismatch {
                received: hex::encode(&self.hash),
                computed: hex::encode(computed),
            });
        }

        Ok(())
    }

    /// Root of trust: the info must match the pinned hash and public key.
    pub fn check_trust(&self, params: &ChainVerificationParams) -> Result<(), ChainInfoError> {
        if self.hash != params.chain_hash {
            return Err(ChainInfoError::UntrustedHash(hex::encode(&self.hash)));
        }
        if self.public_key != params.public_key {
            return Err(ChainInfoError::UntrustedPublicKey(hex::encode(
                &self.public_key,
            )));
        }

        Ok(())
    }
}
