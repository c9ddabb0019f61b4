//! Environment variable snapshot consumed by the configuration resolver.

/// Immutable snapshot of the environment variables the resolver reads.
///
/// Captured once at startup with [`Env::from_process`]; tests construct it
/// directly instead of mutating the process environment. Fields hold the raw
/// values, interpretation (flag parsing, defaulting, precedence) lives in the
/// consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    /// Raw deployer private key (`PRIVATE_KEY`). Takes precedence over the mnemonic.
    pub private_key: Option<String>,
    /// BIP-39 seed phrase (`MNEMONIC`).
    pub mnemonic: Option<String>,
    /// Mainnet fork switch (`MAINNET_FORK`). Active only when exactly `"true"`.
    pub mainnet_fork: Option<String>,
    /// Pinned fork block height (`FORKING_BLOCK_NUMBER`).
    pub forking_block_number: Option<String>,
    /// Etherscan API credential (`ETHERSCAN_KEY`).
    pub etherscan_key: Option<String>,
    /// Arbiscan API credential (`ARBISCAN_KEY`).
    pub arbiscan_key: Option<String>,
    /// Optimistic Etherscan API credential (`OPTIMISTIC_ETHERSCAN_KEY`).
    pub optimistic_etherscan_key: Option<String>,
    /// Tenderly project slug (`TENDERLY_PROJECT`).
    pub tenderly_project: Option<String>,
    /// Tenderly username (`TENDERLY_USERNAME`).
    pub tenderly_username: Option<String>,
    /// Gas report switch (`REPORT_GAS`). Any non-empty value enables it.
    pub report_gas: Option<String>,
    /// Task loading switch (`SKIP_LOAD`). Skips only when exactly `"true"`.
    pub skip_load: Option<String>,
}

impl Env {
    /// Capture the resolver's environment variables from the process environment.
    pub fn from_process() -> Self {
        Self {
            private_key: std::env::var("PRIVATE_KEY").ok(),
            mnemonic: std::env::var("MNEMONIC").ok(),
            mainnet_fork: std::env::var("MAINNET_FORK").ok(),
            forking_block_number: std::env::var("FORKING_BLOCK_NUMBER").ok(),
            etherscan_key: std::env::var("ETHERSCAN_KEY").ok(),
            arbiscan_key: std::env::var("ARBISCAN_KEY").ok(),
            optimistic_etherscan_key: std::env::var("OPTIMISTIC_ETHERSCAN_KEY").ok(),
            tenderly_project: std::env::var("TENDERLY_PROJECT").ok(),
            tenderly_username: std::env::var("TENDERLY_USERNAME").ok(),
            report_gas: std::env::var("REPORT_GAS").ok(),
            skip_load: std::env::var("SKIP_LOAD").ok(),
        }
    }

    /// Whether the mainnet fork overlay was requested.
    ///
    /// Only the exact string `"true"` activates the fork. Any other value,
    /// including `"TRUE"` or `"1"`, leaves it inactive.
    pub fn fork_requested(&self) -> bool {
        self.mainnet_fork.as_deref() == Some("true")
    }

    /// Whether task loading should be skipped. Same strictness as [`Self::fork_requested`].
    pub fn skip_tasks(&self) -> bool {
        self.skip_load.as_deref() == Some("true")
    }

    /// Whether gas reporting is enabled. Presence-based: any non-empty value counts.
    pub fn gas_report(&self) -> bool {
        self.report_gas.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fork_flag_requires_exact_true() {
        let mut env = Env::default();
        assert!(!env.fork_requested());

        env.mainnet_fork = Some("true".to_string());
        assert!(env.fork_requested());

        for value in ["TRUE", "True", "1", "yes", ""] {
            env.mainnet_fork = Some(value.to_string());
            assert!(!env.fork_requested(), "{value:?} should not activate the fork");
        }
    }

    #[test]
    fn test_skip_tasks_requires_exact_true() {
        let mut env = Env::default();
        assert!(!env.skip_tasks());

        env.skip_load = Some("true".to_string());
        assert!(env.skip_tasks());

        env.skip_load = Some("1".to_string());
        assert!(!env.skip_tasks());
    }

    #[test]
    fn test_gas_report_is_presence_based() {
        let mut env = Env::default();
        assert!(!env.gas_report());

        env.report_gas = Some("".to_string());
        assert!(!env.gas_report());

        env.report_gas = Some("anything".to_string());
        assert!(env.gas_report());
    }
}
