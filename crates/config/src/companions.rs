//! Cross-chain companion links between networks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Network;

/// Role a companion network plays relative to its owner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CompanionRole {
    /// The governing L1 of a rollup testnet.
    L1,
    /// The Optimism-side counterpart of an L1.
    Optimism,
    /// The Arbitrum-side counterpart of an L1.
    Arbitrum,
    /// The Lisk-side counterpart of an L1.
    Lisk,
}

/// Companion links shipped for the given network.
///
/// L1 networks point down to the rollups governed from them; rollup testnets
/// point back up to their L1. Networks without cross-chain deployments have
/// no links.
pub fn companion_links(network: Network) -> BTreeMap<CompanionRole, Network> {
    match network {
        Network::Sepolia => BTreeMap::from([
            (CompanionRole::Optimism, Network::OptimismSepolia),
            (CompanionRole::Arbitrum, Network::ArbitrumTestnet),
            (CompanionRole::Lisk, Network::LiskSepolia),
        ]),
        Network::Main => BTreeMap::from([
            (CompanionRole::Optimism, Network::Optimism),
            (CompanionRole::Arbitrum, Network::Arbitrum),
            (CompanionRole::Lisk, Network::Lisk),
        ]),
        Network::ArbitrumTestnet | Network::OptimismSepolia | Network::LiskSepolia => {
            BTreeMap::from([(CompanionRole::L1, Network::Sepolia)])
        }
        _ => BTreeMap::new(),
    }
}
