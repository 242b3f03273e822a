// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::chain::defaults;
use crate::chain::time;
use crate::chain::ChainInfo;
use crate::core::BeaconVerifier;
use crate::core::RandomnessBeacon;
use crate::core::SchemeId;
use crate::log::init_log;

use anyhow::bail;
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use std::path::Path;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "drand-verify")]
#[command(about = "Offline verification of drand randomness beacons", long_about = None)]
pub struct Cli {
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify a beacon (JSON as served by /public/<round>) against a chain
    Verify {
        /// Built-in chain name or path to a chain info file (.json or .toml)
        #[arg(long, default_value = defaults::MAINNET_DEFAULT.name)]
        chain: String,
        /// Path to the beacon JSON
        #[arg(long)]
        beacon: String,
        /// Round the beacon is expected to be, defaults to the beacon's own round
        #[arg(long)]
        round: Option<u64>,
    },
    /// List all scheme ids this verifier supports
    ListSchemes,
    /// List built-in chains
    Chains,
    /// Print the round active at a given unix time
    RoundAt {
        /// Built-in chain name or path to a chain info file (.json or .toml)
        #[arg(long, default_value = defaults::MAINNET_DEFAULT.name)]
        chain: String,
        /// Unix time in seconds, defaults to now
        #[arg(long)]
        time: Option<u64>,
    },
}

/// Resolves `--chain` to a preset name first, then to a file.
fn load_chain(chain: &str) -> anyhow::Result<ChainInfo> {
    let info = match defaults::preset(chain) {
        Some(preset) => preset.chain_info()?,
        None => ChainInfo::load(Path::new(chain))
            .with_context(|| format!("chain {chain} is neither a preset nor a readable file"))?,
    };
    info.validate()?;
    Ok(info)
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_log(self.verbose)?;
        match self.commands {
            Commands::Verify {
                chain,
                beacon,
                round,
            } => {
                let info = load_chain(&chain)?;
                let content = std::fs::read_to_string(&beacon)
                    .with_context(|| format!("failed to read beacon {beacon}"))?;
                let beacon: RandomnessBeacon = serde_json::from_str(&content)?;
                let expected_round = round.unwrap_or(beacon.round);

                let verifier = BeaconVerifier::new()?;
                match verifier.verify(&info, &beacon, expected_round) {
                    Ok(()) => {
                        info!("round {expected_round} of {} verified", info.beacon_id());
                        println!("verified");
                    }
                    Err(err) => bail!("round {expected_round} not verified: {err}"),
                }
            }
            Commands::ListSchemes => {
                for scheme in SchemeId::list_schemes() {
                    println!("{scheme}");
                }
            }
            Commands::Chains => {
                for preset in defaults::PRESETS {
                    let info = preset.chain_info()?;
                    println!(
                        "{:<12} {} {} {}",
                        preset.name,
                        info.scheme_id,
                        hex::encode(&info.hash),
                        preset.url
                    );
                }
            }
            Commands::RoundAt { chain, time: at } => {
                let info = load_chain(&chain)?;
                let now = at.unwrap_or_else(|| time::time_now().as_secs());
                let round = time::round_at(now, &info);
                println!("{round} {}", time::time_of_round(&info, round));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        let cli = Cli::try_parse_from(["drand-verify", "verify", "--beacon", "b.json"]).unwrap();
        match cli.commands {
            Commands::Verify {
                chain,
                beacon,
                round,
            } => {
                assert_eq!(chain, "mainnet");
                assert_eq!(beacon, "b.json");
                assert_eq!(round, None);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "drand-verify",
            "round-at",
            "--chain",
            "quicknet",
            "--time",
            "1692803367",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.commands,
            Commands::RoundAt {
                time: Some(1692803367),
                ..
            }
        ));

        assert!(Cli::try_parse_from(["drand-verify", "verify"]).is_err());
    }

    #[test]
    fn chain_resolution() {
        assert!(load_chain("quicknet").is_ok());
        assert!(load_chain("/nonexistent/chain.json").is_err());
    }
}
