//! Supported networks and their fixed on-chain identities.

use serde::{Deserialize, Serialize};

/// EIP-155 chain identifier.
///
/// Fixed per logical network and never inferred from an endpoint, so that a
/// misconfigured RPC URL cannot silently retarget a deployment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Deref,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ChainId(pub u64);

/// The closed set of networks this resolver knows how to configure.
///
/// Every variant carries a static chain id and default RPC endpoint. A network
/// name outside this set fails to parse at the string boundary instead of
/// producing a half-built descriptor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Main,
    Sepolia,
    Goerli,
    TenderlyMain,
    Matic,
    Mumbai,
    Xdai,
    Arbitrum,
    ArbitrumTestnet,
    Optimism,
    OptimismSepolia,
    Lisk,
    LiskSepolia,
    Local,
}

impl Network {
    /// The chain id this network settles under.
    pub const fn chain_id(&self) -> ChainId {
        ChainId(match self {
            Network::Main => 1,
            Network::Sepolia => 11155111,
            Network::Goerli => 5,
            // The upstream pipeline pins its Tenderly forks to chain id 5.
            Network::TenderlyMain => 5,
            Network::Matic => 137,
            Network::Mumbai => 80001,
            Network::Xdai => 100,
            Network::Arbitrum => 42161,
            Network::ArbitrumTestnet => 421611,
            Network::Optimism => 10,
            Network::OptimismSepolia => 11155420,
            Network::Lisk => 1135,
            Network::LiskSepolia => 4202,
            Network::Local => 31337,
        })
    }

    /// Default public RPC endpoint for this network.
    pub const fn rpc_url(&self) -> &'static str {
        match self {
            Network::Main => "https://ethereum-rpc.publicnode.com",
            Network::Sepolia => "https://ethereum-sepolia-rpc.publicnode.com",
            Network::Goerli => "https://ethereum-goerli-rpc.publicnode.com",
            Network::TenderlyMain => "https://mainnet.gateway.tenderly.co",
            Network::Matic => "https://polygon-rpc.com",
            Network::Mumbai => "https://rpc-mumbai.maticvigil.com",
            Network::Xdai => "https://rpc.gnosischain.com",
            Network::Arbitrum => "https://arb1.arbitrum.io/rpc",
            Network::ArbitrumTestnet => "https://rinkeby.arbitrum.io/rpc",
            Network::Optimism => "https://mainnet.optimism.io",
            Network::OptimismSepolia => "https://sepolia.optimism.io",
            Network::Lisk => "https://rpc.api.lisk.com",
            Network::LiskSepolia => "https://rpc.sepolia-api.lisk.com",
            Network::Local => "http://127.0.0.1:8545",
        }
    }

    /// Whether this network is a live public chain with a stable endpoint.
    ///
    /// `local` and `tenderly-main` are excluded: the first only exists while a
    /// dev node runs, the second sits behind per-fork gateways.
    pub const fn probeable(&self) -> bool {
        !matches!(self, Network::Local | Network::TenderlyMain)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_chain_ids() {
        assert_eq!(Network::Main.chain_id(), ChainId(1));
        assert_eq!(Network::Sepolia.chain_id(), ChainId(11155111));
        assert_eq!(Network::Arbitrum.chain_id(), ChainId(42161));
        assert_eq!(Network::ArbitrumTestnet.chain_id(), ChainId(421611));
        assert_eq!(Network::OptimismSepolia.chain_id(), ChainId(11155420));
        assert_eq!(Network::Lisk.chain_id(), ChainId(1135));
        assert_eq!(Network::LiskSepolia.chain_id(), ChainId(4202));
        assert_eq!(Network::Local.chain_id(), ChainId(31337));
    }

    #[test]
    fn test_network_names_round_trip() {
        for network in Network::iter() {
            let name = network.to_string();
            assert_eq!(Network::from_str(&name).ok(), Some(network), "{name}");
        }
    }

    #[test]
    fn test_kebab_case_names() {
        assert_eq!(Network::TenderlyMain.to_string(), "tenderly-main");
        assert_eq!(Network::ArbitrumTestnet.to_string(), "arbitrum-testnet");
        assert_eq!(Network::LiskSepolia.to_string(), "lisk-sepolia");
    }

    #[test]
    fn test_unknown_network_name_is_rejected() {
        assert!(Network::from_str("base").is_err());
        assert!(Network::from_str("").is_err());
    }

    #[test]
    fn test_registry_endpoints_parse() {
        for network in Network::iter() {
            assert!(
                url::Url::parse(network.rpc_url()).is_ok(),
                "endpoint for {network} does not parse"
            );
        }
    }
}
