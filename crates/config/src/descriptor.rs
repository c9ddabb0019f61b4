use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ChainId, CompanionRole, ConfigError, Env, Network, SigningProfile, companion_links};

/// Everything the deployment pipeline needs to talk to one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub network: Network,
    pub chain_id: ChainId,
    pub rpc_url: Url,
    pub accounts: SigningProfile,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub companions: BTreeMap<CompanionRole, Network>,
}

impl NetworkDescriptor {
    /// Build the descriptor for a network from the environment snapshot.
    ///
    /// Companions start empty; attach them with [`Self::with_companions`].
    pub fn build(network: Network, env: &Env) -> Result<Self, ConfigError> {
        let rpc_url = Url::parse(network.rpc_url())
            .map_err(|source| ConfigError::InvalidRpcUrl { network, source })?;
        let descriptor = Self {
            network,
            chain_id: network.chain_id(),
            rpc_url,
            accounts: SigningProfile::resolve(env),
            companions: BTreeMap::new(),
        };
        tracing::debug!(
            network = %descriptor.network,
            chain_id = %descriptor.chain_id,
            "Built network descriptor"
        );
        Ok(descriptor)
    }

    /// Attach companion links, replacing any previously attached set.
    pub fn with_companions(mut self, links: BTreeMap<CompanionRole, Network>) -> Self {
        self.companions = links;
        self
    }

    /// Attach the shipped companion links for this descriptor's network.
    pub fn with_default_companions(self) -> Self {
        let links = companion_links(self.network);
        self.with_companions(links)
    }

    /// Companion network registered under the given role, if any.
    pub fn companion(&self, role: CompanionRole) -> Option<Network> {
        self.companions.get(&role).copied()
    }
}
