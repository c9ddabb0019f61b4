//! Deterministic account set and failure semantics for the local simulation node.

use alloy_core::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Env, ForkOverlay, MNEMONIC_PATH, SigningProfile};

/// Seed phrase the local node derives its funded accounts from.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Number of funded accounts on the local node.
pub const DEV_ACCOUNT_COUNT: u32 = 20;

/// Starting balance of each funded account, in wei (10,000 ETH).
pub const DEV_ACCOUNT_BALANCE_WEI: &str = "10000000000000000000000";

/// One funded account on the local simulation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevAccount {
    pub address: Address,
    pub private_key: String,
    pub balance: String,
}

/// Runtime profile of the in-process simulation network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSimulation {
    pub accounts: Vec<DevAccount>,
    pub throw_on_transaction_failures: bool,
    pub throw_on_call_failures: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork: Option<ForkOverlay>,
}

impl LocalSimulation {
    /// Build the simulation profile, honoring a fork request from the
    /// environment.
    pub fn build(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            accounts: dev_accounts()?,
            throw_on_transaction_failures: true,
            throw_on_call_failures: true,
            fork: ForkOverlay::from_env(env)?,
        })
    }
}

/// The well-known funded accounts of the local node, in derivation order.
pub fn dev_accounts() -> Result<Vec<DevAccount>, ConfigError> {
    let profile = SigningProfile::Mnemonic {
        phrase: DEV_MNEMONIC.to_string(),
        path: MNEMONIC_PATH.to_string(),
        initial_index: 0,
        count: DEV_ACCOUNT_COUNT,
    };
    (0..DEV_ACCOUNT_COUNT)
        .map(|index| {
            let signer = profile.signer_at(index)?;
            Ok(DevAccount {
                address: signer.address(),
                private_key: format!("0x{}", hex::encode(signer.to_bytes())),
                balance: DEV_ACCOUNT_BALANCE_WEI.to_string(),
            })
        })
        .collect()
}
