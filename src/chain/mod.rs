// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod defaults;
pub mod info;
pub mod time;

pub use info::ChainInfo;
pub use info::ChainInfoError;
pub use info::ChainVerificationParams;
