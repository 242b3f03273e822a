// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod beacon;
pub mod schemes;
pub mod verify;

pub use beacon::Beacon;
pub use beacon::RandomnessBeacon;
pub use schemes::SchemeId;
pub use verify::verify_beacon;
pub use verify::verify_beacon_async;
pub use verify::BeaconVerifier;
pub use verify::VerifyError;
