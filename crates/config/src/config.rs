use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    CompanionRole, ConfigError, ConfigFingerprint, DeployConfigBuilder, ForkOverlay,
    LocalSimulation, NamedAccounts, Network, NetworkDescriptor, SolcCompiler, TenderlyConfig,
    VerificationConfig,
};

/// Name of the resolved configuration file when saved into a directory.
pub const TRESTLE_CONF_FILENAME: &str = "Trestle.toml";

/// The fully resolved deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    pub gas_report: bool,
    pub named_accounts: NamedAccounts,
    pub compilers: Vec<SolcCompiler>,
    pub networks: BTreeMap<Network, NetworkDescriptor>,
    pub local: LocalSimulation,
    pub verification: VerificationConfig,
    pub tenderly: TenderlyConfig,
}

impl DeployConfig {
    pub fn builder() -> DeployConfigBuilder {
        DeployConfigBuilder::new()
    }

    /// Descriptor of a resolved network.
    pub fn descriptor(&self, network: Network) -> Result<&NetworkDescriptor, ConfigError> {
        self.networks
            .get(&network)
            .ok_or(ConfigError::UnknownNetwork(network))
    }

    /// Follow a companion link from `network`.
    ///
    /// Returns `Ok(None)` when the network has no companion in that role.
    /// A link whose target was not resolved is an error.
    pub fn companion(
        &self,
        network: Network,
        role: CompanionRole,
    ) -> Result<Option<&NetworkDescriptor>, ConfigError> {
        let descriptor = self.descriptor(network)?;
        match descriptor.companion(role) {
            None => Ok(None),
            Some(target) => self
                .networks
                .get(&target)
                .map(Some)
                .ok_or(ConfigError::DanglingCompanion {
                    network,
                    role,
                    target,
                }),
        }
    }

    /// The active fork overlay, if the local simulation forks a live network.
    pub fn fork(&self) -> Option<&ForkOverlay> {
        self.local.fork.as_ref()
    }

    pub fn fingerprint(&self) -> ConfigFingerprint {
        ConfigFingerprint::from_config(self)
    }

    /// Save the configuration as TOML. A directory path gets
    /// [`TRESTLE_CONF_FILENAME`] appended.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let path = if path.is_dir() {
            path.join(TRESTLE_CONF_FILENAME)
        } else {
            path.to_path_buf()
        };
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Load a configuration saved by [`Self::save_to_file`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path = if path.is_dir() {
            path.join(TRESTLE_CONF_FILENAME)
        } else {
            path.to_path_buf()
        };
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }
}
