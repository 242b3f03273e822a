// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

#![warn(clippy::pedantic)]
#![allow(clippy::unreadable_literal, clippy::inline_always)]

use clap::Parser;
use drand_verify::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}
