//! Beacon fixtures taken from the public networks, plus a BN254 chain signed
//! with a fixed test key.

use crate::chain::info::Metadata;
use crate::chain::ChainInfo;
use crate::core::RandomnessBeacon;
use crate::core::SchemeId;

use sha2::Digest;
use sha2::Sha256;

pub const CHAINED_PUBLIC_KEY: &str = "88a8227b75dba145599d894d33eebde3b36fef900d456ae2cc4388867adb4769c40359f783750a41b4d17e40f578bfdb";
pub const UNCHAINED_PUBLIC_KEY: &str = "8d91ae0f4e3cd277cfc46aba26680232b0d5bb4444602cdb23442d62e17f43cdffb1104909e535430c10a6a1ce680a65";
pub const QUICKNET_PUBLIC_KEY: &str = "83cf0f2896adee7eb8b5f01fcad3912212c437e0073e911fb90022d3e760183c8c4b450b6a0a6c3ac6a5776a2d1064510d1fec758c921cc22b0e17e63aaf4bcb5ed66304de9cf809bd274ca73bab4af5a6e9c76a4bc09e76eae8991ef5ece45a";
/// Group public key of drand's `evmnet` chain, as served by its `/info`.
pub const EVMNET_PUBLIC_KEY: &str = "07e1d1d335df83fa98462005690372c643340060d205306a9aa8106b6bd0b3820557ec32c2ad488e4d4f6008f89a346f18492092ccc0d594610de2732c8b808f0095685ae3a85ba243747b1b2f426049010f6b73a0cf1d389351d5aaaa1047f6297d3a4f9749b33eb2d904c9d9ebf17224150ddd7abd7567a9bec6c74480ee0b";
pub const BN254_PUBLIC_KEY: &str = "188cc97cbde67f819f59ddd92418c79b6ce3a3adc5eec410d119ac6b74cca13216358e952f18a76fc2a7490a0fdeba85d87bb6ab0cc43e462d94f6d46c91358812d7826fe5115d033680601839f9283bac035a806e3a07ac7f30f6a6f7280ec30595b474b7b42a19f167f3f7b146fd807b98301f7f1c1be9f5914b8ff8a7015d";

pub fn dehexify(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// Chain info carrying only what verification reads.
pub fn chain(scheme: SchemeId, public_key: &str) -> ChainInfo {
    ChainInfo {
        public_key: dehexify(public_key),
        period: 3,
        genesis_time: 1,
        hash: Vec::new(),
        group_hash: Vec::new(),
        scheme_id: scheme.to_string(),
        metadata: Metadata::default(),
    }
}

/// `/info` of the mainnet `fastnet` chain (`bls-unchained-on-g1`).
pub fn fastnet_info() -> ChainInfo {
    ChainInfo::from_json(
        r#"{
        "public_key": "a0b862a7527fee3a731bcb59280ab6abd62d5c0b6ea03dc4ddf6612fdfc9d01f01c31542541771903475eb1ec6615f8d0df0b8b6dce385811d6dcf8cbefb8759e5e616a3dfd054c928940766d9a5b9db91e3b697e5d70a975181e007f87fca5e",
        "period": 3,
        "genesis_time": 1677685200,
        "hash": "dbd506d6ef76e5f386f41c651dcb808c5bcbd75471cc4eafa3f4df7ad4e4c493",
        "groupHash": "a81e9d63f614ccdb144b8ff79fbd4d5a2d22055c0bfe4ee9a8092003dab1c6c0",
        "schemeID": "bls-unchained-on-g1",
        "metadata": { "beaconID": "fastnet" }
    }"#,
    )
    .unwrap()
}

fn beacon(round: u64, randomness: &str, signature: &str, previous: Option<&str>) -> RandomnessBeacon {
    RandomnessBeacon {
        round,
        randomness: dehexify(randomness),
        signature: dehexify(signature),
        previous_signature: previous.map(dehexify),
    }
}

/// Keeps the randomness consistent after the signature was edited.
pub fn rehash(beacon: &mut RandomnessBeacon) {
    beacon.randomness = Sha256::digest(&beacon.signature).to_vec();
}

pub fn chained_397089() -> RandomnessBeacon {
    beacon(
        397089,
        "cd435675735e459fb4d9c68a9d9f7b719e59e0a9f5f86fe6bd86b730d01fba42",
        "88ccd9a91946bc0bbef2c6c60a09bbf4a247b1d2059522449aa1a35758feddfad85efe818bbde3e1e4ab0c852d96e65f0b1f97f239bf3fc918860ea846cbb500fcf7c9d0dd3d851320374460b5fc596b8cfd629f4c07c7507c259bf9beca850a",
        Some("a2237ee39a1a6569cb8e02c6e979c07efe1f30be0ac501436bd325015f1cd6129dc56fd60efcdf9158d74ebfa34bfcbd17803dbca6d2ae8bc3a968e4dc582f8710c69de80b2e649663fef5742d22fff7d1619b75d5f222e8c9b8840bc2044bce"),
    )
}

pub fn mainnet_round_1() -> RandomnessBeacon {
    beacon(
        1,
        "101297f1ca7dc44ef6088d94ad5fb7ba03455dc33d53ddb412bbc4564ed986ec",
        "8d61d9100567de44682506aea1a7a6fa6e5491cd27a0a0ed349ef6910ac5ac20ff7bc3e09d7c046566c9f7f3c6f3b10104990e7cb424998203d8f7de586fb7fa5f60045417a432684f85093b06ca91c769f0e7ca19268375e659c2a2352b4655",
        Some("176f93498eac9ca337150b46d21dd58673ea4e3581185f869672e59fa4cb390a"),
    )
}

pub fn unchained_397092() -> RandomnessBeacon {
    beacon(
        397092,
        "7731783ab8118d7484d0e8e237f3023a4c7ef4532f35016f2e56e89a7570c796",
        "94da96b5b985a22a3d99fa3051a42feb4da9218763f6c836fca3770292dbf4b01f5d378859a113960548d167eaa144250a2c8e34c51c5270152ac2bc7a52632236f746545e0fae52f69068c017745204240d19dae2b4d038cef3c6047fcd6539",
        None,
    )
}

pub fn quicknet_1000() -> RandomnessBeacon {
    beacon(
        1000,
        "fe290beca10872ef2fb164d2aa4442de4566183ec51c56ff3cd603d930e54fdd",
        "b44679b9a59af2ec876b1a6b1ad52ea9b1615fc3982b19576350f93447cb1125e342b73a8dd2bacbe47e4b6b63ed5e39",
        None,
    )
}

pub fn bn254_round_1() -> RandomnessBeacon {
    beacon(
        1,
        "c65b822a6da976d23d83e4bedfef21b10f3724f6c6854a2387c9b88fda95914c",
        "0bd7a8ace85e5b18b8b2f2d15cc0004618c5d98240a3071db6f5f9551f7e33a62ed17bfef42a4e838d34e47c011a739c94e75c4114819dcc4be97ff598b69ef8",
        None,
    )
}

pub fn bn254_round_42() -> RandomnessBeacon {
    beacon(
        42,
        "77b9e1346ced0f6259f8ea50edf234c30cbca1001ef0b647c4de0bcc4f02661f",
        "1ed8b893259cda64c16fde954ac9916db2bf945237846fa3ede5add292c985442ddd55ecf43c5a5ee00476cbf46d702a4cc65d9f5636e0ab0977c4f93fd6f3b6",
        None,
    )
}
