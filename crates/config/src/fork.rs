//! Fork overlay for running the local simulation against mainnet state.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ConfigError, Env, Network};

/// Block height the fork is pinned to when none is requested.
pub const DEFAULT_FORK_BLOCK: u64 = 14_340_480;

/// Network whose state is forked.
pub const FORK_SOURCE: Network = Network::Main;

/// Instruction for the local simulation to fork a live network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkOverlay {
    pub source: Network,
    pub rpc_url: Url,
    pub block_number: u64,
}

impl ForkOverlay {
    /// Read the fork request from the environment snapshot.
    ///
    /// Forking activates only when `MAINNET_FORK` is exactly `true`. An empty
    /// `FORKING_BLOCK_NUMBER` counts as unset and falls back to the pinned
    /// default; anything else that does not parse as a block height is fatal.
    pub fn from_env(env: &Env) -> Result<Option<Self>, ConfigError> {
        if !env.fork_requested() {
            return Ok(None);
        }

        let block_number = match env
            .forking_block_number
            .as_deref()
            .filter(|raw| !raw.is_empty())
        {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidForkHeight {
                value: raw.to_string(),
                source,
            })?,
            None => DEFAULT_FORK_BLOCK,
        };

        let rpc_url = Url::parse(FORK_SOURCE.rpc_url()).map_err(|source| {
            ConfigError::InvalidRpcUrl {
                network: FORK_SOURCE,
                source,
            }
        })?;

        tracing::info!(
            source = %FORK_SOURCE,
            block_number,
            "Fork overlay active"
        );
        Ok(Some(Self {
            source: FORK_SOURCE,
            rpc_url,
            block_number,
        }))
    }
}
