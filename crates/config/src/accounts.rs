//! Signing profiles: how deployment accounts are provisioned for a network.

use alloy_core::primitives::Address;
use alloy_signer_local::coins_bip39::English;
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Env};

/// BIP-44 derivation path prefix for mnemonic-derived accounts.
pub const MNEMONIC_PATH: &str = "m/44'/60'/0'/0";

/// Number of accounts derived from a mnemonic profile.
pub const DERIVED_ACCOUNT_COUNT: u32 = 20;

/// Account index of the deployer in every signing profile.
pub const DEPLOYER_INDEX: u32 = 0;

/// How transaction signers are provisioned for a network.
///
/// Resolution is total: with no credentials in the environment the profile
/// degrades to a mnemonic with an empty phrase, and the failure surfaces only
/// when a signer is actually materialized. A raw private key always wins over
/// a mnemonic, even when both are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SigningProfile {
    /// A single raw private key.
    RawKey { key: String },
    /// A window of accounts derived from a BIP-39 seed phrase.
    Mnemonic {
        phrase: String,
        path: String,
        initial_index: u32,
        count: u32,
    },
}

impl SigningProfile {
    /// Resolve the signing profile from the environment snapshot.
    ///
    /// The raw key is used when present and non-empty; otherwise a mnemonic
    /// profile is built from `MNEMONIC` (possibly empty) with the standard
    /// derivation window.
    pub fn resolve(env: &Env) -> Self {
        match env.private_key.as_deref() {
            Some(key) if !key.is_empty() => Self::RawKey {
                key: key.to_string(),
            },
            _ => Self::Mnemonic {
                phrase: env.mnemonic.clone().unwrap_or_default(),
                path: MNEMONIC_PATH.to_string(),
                initial_index: 0,
                count: DERIVED_ACCOUNT_COUNT,
            },
        }
    }

    /// Whether this profile carries a raw private key.
    pub fn is_raw_key(&self) -> bool {
        matches!(self, Self::RawKey { .. })
    }

    /// Number of accounts this profile can materialize.
    pub fn account_count(&self) -> u32 {
        match self {
            Self::RawKey { .. } => 1,
            Self::Mnemonic { count, .. } => *count,
        }
    }

    /// Materialize the signer at the given account index.
    ///
    /// This is the point where missing or malformed credentials turn into
    /// errors: an empty phrase or an unparsable key resolves fine but fails
    /// here.
    pub fn signer_at(&self, index: u32) -> Result<PrivateKeySigner, ConfigError> {
        match self {
            Self::RawKey { key } => {
                if index != DEPLOYER_INDEX {
                    return Err(ConfigError::AccountIndex { index, count: 1 });
                }
                Ok(key.parse::<PrivateKeySigner>()?)
            }
            Self::Mnemonic {
                phrase,
                path,
                initial_index,
                count,
            } => {
                if index >= *count {
                    return Err(ConfigError::AccountIndex {
                        index,
                        count: *count,
                    });
                }
                let signer = MnemonicBuilder::<English>::default()
                    .phrase(phrase.as_str())
                    .derivation_path(format!("{}/{}", path, initial_index + index))?
                    .build()?;
                Ok(signer)
            }
        }
    }

    /// Materialize the deployer signer (account index 0).
    pub fn deployer(&self) -> Result<PrivateKeySigner, ConfigError> {
        self.signer_at(DEPLOYER_INDEX)
    }

    /// Addresses of every account this profile can materialize, in index order.
    pub fn addresses(&self) -> Result<Vec<Address>, ConfigError> {
        (0..self.account_count())
            .map(|index| self.signer_at(index).map(|signer| signer.address()))
            .collect()
    }
}

/// Named account convention consumed by the task runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAccounts {
    /// Account index of the deployer, on every network.
    pub deployer: u32,
}

impl Default for NamedAccounts {
    fn default() -> Self {
        Self {
            deployer: DEPLOYER_INDEX,
        }
    }
}
