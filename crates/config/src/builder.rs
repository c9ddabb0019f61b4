//! Builder for assembling a [`DeployConfig`] from the environment.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::{
    ConfigError, DeployConfig, Env, LocalSimulation, NamedAccounts, Network, NetworkDescriptor,
    TenderlyConfig, VerificationConfig, default_compilers,
};

/// Builder for [`DeployConfig`].
///
/// Every setting has a default: all shipped networks, the process
/// environment, and companion validation enabled.
#[derive(Debug, Clone)]
pub struct DeployConfigBuilder {
    networks: Option<Vec<Network>>,
    env: Option<Env>,
    validate_companions: bool,
}

impl Default for DeployConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployConfigBuilder {
    pub fn new() -> Self {
        Self {
            networks: None,
            env: None,
            validate_companions: true,
        }
    }

    /// Restrict the configuration to the given networks.
    pub fn networks(mut self, networks: impl IntoIterator<Item = Network>) -> Self {
        self.networks = Some(networks.into_iter().collect());
        self
    }

    /// Resolve against a fixed environment snapshot instead of the process
    /// environment.
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Whether to reject configurations whose companion links point outside
    /// the selected networks. On by default.
    pub fn validate_companions(mut self, validate: bool) -> Self {
        self.validate_companions = validate;
        self
    }

    /// Resolve the deployment configuration.
    pub fn build(self) -> Result<DeployConfig, ConfigError> {
        let env = self.env.unwrap_or_else(Env::from_process);
        let selected: Vec<Network> = self
            .networks
            .unwrap_or_else(|| Network::iter().collect());

        let mut networks = BTreeMap::new();
        for network in selected {
            let descriptor = NetworkDescriptor::build(network, &env)?.with_default_companions();
            networks.insert(network, descriptor);
        }

        if self.validate_companions {
            for descriptor in networks.values() {
                for (role, target) in &descriptor.companions {
                    if !networks.contains_key(target) {
                        return Err(ConfigError::DanglingCompanion {
                            network: descriptor.network,
                            role: *role,
                            target: *target,
                        });
                    }
                }
            }
        }

        let local = LocalSimulation::build(&env)?;
        let fork_active = local.fork.is_some();
        let config = DeployConfig {
            gas_report: env.gas_report(),
            named_accounts: NamedAccounts::default(),
            compilers: default_compilers(),
            networks,
            local,
            verification: VerificationConfig::from_env(&env),
            tenderly: TenderlyConfig::from_env(&env),
        };
        tracing::info!(
            networks = config.networks.len(),
            fork_active,
            "Resolved deployment configuration"
        );
        Ok(config)
    }
}
