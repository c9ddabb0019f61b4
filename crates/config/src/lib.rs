//! trestle-config - Configuration resolver for the cross-chain governance
//! bridge deployment pipeline.
//!
//! This crate resolves everything the pipeline needs before it talks to a
//! chain: network descriptors and their companion links, signing profiles,
//! the local simulation node, fork overlays, verification endpoints, and the
//! task registry.

mod builder;
pub use builder::DeployConfigBuilder;

mod accounts;
mod companions;
mod compiler;
mod config;
mod descriptor;
mod env;
mod error;
mod fingerprint;
mod fork;
mod local;
mod network;
pub mod rpc;
mod tasks;
mod verify;

pub use accounts::{
    DEPLOYER_INDEX, DERIVED_ACCOUNT_COUNT, MNEMONIC_PATH, NamedAccounts, SigningProfile,
};
pub use companions::{CompanionRole, companion_links};
pub use compiler::{OPTIMIZER_RUNS, OptimizerSettings, SolcCompiler, default_compilers};
pub use config::{DeployConfig, TRESTLE_CONF_FILENAME};
pub use descriptor::NetworkDescriptor;
pub use env::Env;
pub use error::ConfigError;
pub use fingerprint::{ConfigFingerprint, RESOLVED_VERSION_FILENAME, ResolvedVersion};
pub use fork::{DEFAULT_FORK_BLOCK, FORK_SOURCE, ForkOverlay};
pub use local::{
    DEV_ACCOUNT_BALANCE_WEI, DEV_ACCOUNT_COUNT, DEV_MNEMONIC, DevAccount, LocalSimulation,
    dev_accounts,
};
pub use network::{ChainId, Network};
pub use tasks::{TaskCategory, TaskRegistry, TaskSpec};
pub use verify::{
    ExplorerEndpoints, TENDERLY_FORK_NETWORK_ID, TenderlyConfig, VerificationConfig,
};
