// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Verification engine for drand randomness beacons.
//!
//! Supports the BLS12-381 schemes served by the public drand networks and the
//! BN254 scheme, whose curve arithmetic lives in [`bn254`].

pub mod bn254;
pub mod chain;
pub mod cli;
pub mod core;
pub mod key;
pub mod log;
#[cfg(test)]
mod test;
