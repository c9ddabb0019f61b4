//! Contract verification endpoints and explorer API keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ChainId, Env};

/// Tenderly forks are created against Polygon.
pub const TENDERLY_FORK_NETWORK_ID: &str = "137";

/// Explorer endpoints for a chain the verifier does not know natively.
///
/// The `network` field is the verifier plugin's identifier for the chain,
/// which does not always match our network names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerEndpoints {
    pub network: String,
    pub chain_id: ChainId,
    pub api_url: String,
    pub browser_url: String,
}

/// Everything the contract verifier needs: per-chain API keys plus endpoint
/// overrides for chains outside its built-in registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationConfig {
    pub api_keys: BTreeMap<String, String>,
    pub custom_chains: Vec<ExplorerEndpoints>,
}

impl VerificationConfig {
    /// Assemble the verifier configuration from the environment snapshot.
    ///
    /// Missing keys become empty strings so the configuration always
    /// resolves; verification itself will reject them later.
    pub fn from_env(env: &Env) -> Self {
        let etherscan = env.etherscan_key.clone().unwrap_or_default();
        let arbiscan = env.arbiscan_key.clone().unwrap_or_default();
        let optimistic = env.optimistic_etherscan_key.clone().unwrap_or_default();

        let api_keys = BTreeMap::from([
            ("optimisticEthereum".to_string(), optimistic.clone()),
            ("arbitrumOne".to_string(), arbiscan),
            ("optimisticSepolia".to_string(), optimistic),
            ("lisk-sepolia".to_string(), etherscan.clone()),
            ("lisk".to_string(), etherscan),
        ]);

        let custom_chains = vec![
            ExplorerEndpoints {
                network: "sepolia".to_string(),
                chain_id: ChainId(11155111),
                api_url: "https://api-sepolia.etherscan.io/api".to_string(),
                browser_url: "https://sepolia.etherscan.io".to_string(),
            },
            ExplorerEndpoints {
                network: "optimisticSepolia".to_string(),
                chain_id: ChainId(11155420),
                api_url: "https://api-sepolia-optimism.etherscan.io/api".to_string(),
                browser_url: "https://sepolia-optimism.etherscan.io".to_string(),
            },
            ExplorerEndpoints {
                network: "lisk".to_string(),
                chain_id: ChainId(1135),
                api_url: "https://blockscout.lisk.com/api".to_string(),
                browser_url: "https://blockscout.lisk.com".to_string(),
            },
            ExplorerEndpoints {
                network: "lisk-sepolia".to_string(),
                chain_id: ChainId(4202),
                api_url: "https://sepolia-blockscout.lisk.com/api".to_string(),
                browser_url: "https://sepolia-blockscout.lisk.com".to_string(),
            },
        ];

        Self {
            api_keys,
            custom_chains,
        }
    }
}

/// Tenderly project settings for hosted fork simulations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderlyConfig {
    pub project: String,
    pub username: String,
    pub fork_network_id: String,
}

impl TenderlyConfig {
    pub fn from_env(env: &Env) -> Self {
        Self {
            project: env.tenderly_project.clone().unwrap_or_default(),
            username: env.tenderly_username.clone().unwrap_or_default(),
            fork_network_id: TENDERLY_FORK_NETWORK_ID.to_string(),
        }
    }
}
