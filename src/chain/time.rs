// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

use super::info::ChainInfo;

use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Calculates the active round at `now`. Before genesis this is round 1.
pub fn round_at(now: u64, info: &ChainInfo) -> u64 {
    let (next_round, _) = next_round(now, info.period, info.genesis_time);
    if next_round <= 1 {
        next_round
    } else {
        next_round - 1
    }
}

/// Returns the next upcoming round and its UNIX time given the genesis
/// time and the period. Round at time genesis = round 1. Round 0 is fixed.
pub fn next_round(now: u64, period: u32, genesis: u64) -> (u64, u64) {
    if now < genesis {
        return (1, genesis);
    }
    // Number of whole periods since genesis, +1 since round 1 starts at genesis.
    let Some(elapsed) = (now - genesis).checked_div(u64::from(period)) else {
        return (1, genesis);
    };
    let current = elapsed.saturating_add(1);
    let next_time = genesis.saturating_add(current.saturating_mul(u64::from(period)));

    (current.saturating_add(1), next_time)
}

/// Returns the time the `round` should happen.
pub fn time_of_round(info: &ChainInfo, round: u64) -> u64 {
    if round == 0 {
        return info.genesis_time;
    }

    // - 1 because genesis time is for 1st round already.
    let delta = (round - 1).saturating_mul(u64::from(info.period));
    info.genesis_time.saturating_add(delta)
}

/// Returns current Unix time as duration.
pub fn time_now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chain::info::Metadata;

    fn info(period: u32, genesis_time: u64) -> ChainInfo {
        ChainInfo {
            public_key: Vec::new(),
            period,
            genesis_time,
            hash: Vec::new(),
            group_hash: Vec::new(),
            scheme_id: String::new(),
            metadata: Metadata::default(),
        }
    }

    #[test]
    fn time_basic() {
        let round = 22;
        let transition_round = round + 10;

        for genesis in [1745308582, 1745308759, 1745309145] {
            let chain = info(3, genesis);
            assert_eq!(round, round_at(genesis + 65, &chain));
            assert_eq!(genesis + 93, time_of_round(&chain, transition_round));
        }
    }

    #[test]
    fn test_chain_next_round() {
        let period = 2;
        let mut now = time_now().as_secs();
        let genesis = now + 1;
        let chain = info(period, genesis);

        // Before genesis
        assert_eq!(next_round(now, period, genesis), (1, genesis));
        assert_eq!(round_at(now, &chain), 1);

        // Move to genesis round
        now += 1;
        let (round, round_time) = next_round(now, period, genesis);
        assert_eq!(round, 2);
        let exp_time = genesis + u64::from(period);
        assert_eq!(exp_time, round_time);
        assert_eq!(exp_time, time_of_round(&chain, 2));
        assert_eq!(round_at(now, &chain), 1);

        // Move to one second
        now += 1;
        let (nround, nround_time) = next_round(now, period, genesis);
        assert_eq!(round, nround);
        assert_eq!(round_time, nround_time);

        // Move to next round
        now += 1;
        let (round, round_time) = next_round(now, period, genesis);
        let exp_time = genesis + u64::from(period) * 2;
        assert_eq!(round, 3);
        assert_eq!(round_time, exp_time);
        assert_eq!(exp_time, time_of_round(&chain, 3));
        assert_eq!(round_at(now, &chain), 2);
    }

    #[test]
    fn quicknet_rounds() {
        let chain = info(3, 1692803367);
        assert_eq!(time_of_round(&chain, 0), 1692803367);
        assert_eq!(time_of_round(&chain, 1), 1692803367);
        assert_eq!(time_of_round(&chain, 1000), 1692803367 + 999 * 3);
        assert_eq!(round_at(time_of_round(&chain, 1000), &chain), 1000);
        assert_eq!(round_at(time_of_round(&chain, 1000) + 2, &chain), 1000);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(next_round(100, 0, 10), (1, 10));
        assert_eq!(time_of_round(&info(30, u64::MAX - 5), u64::MAX), u64::MAX);
    }
}
