use std::path::PathBuf;

use thiserror::Error;

use crate::{CompanionRole, Network};

/// Errors raised while resolving or persisting the deployment configuration.
///
/// Missing credentials are deliberately not represented here: a configuration
/// without secrets still resolves, and the failure surfaces later when a
/// signer is materialized.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no descriptor for network `{0}` in this configuration")]
    UnknownNetwork(Network),
    #[error("companion `{role}` of `{network}` points at `{target}`, which has no descriptor in this configuration")]
    DanglingCompanion {
        network: Network,
        role: CompanionRole,
        target: Network,
    },
    #[error("FORKING_BLOCK_NUMBER is set but is not a valid block height: `{value}`")]
    InvalidForkHeight {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("duplicate task `{0}` in the task registry")]
    DuplicateTask(&'static str),
    #[error("account index {index} is out of range for this signing profile ({count} available)")]
    AccountIndex { index: u32, count: u32 },
    #[error("failed to derive account from mnemonic: {0}")]
    Mnemonic(#[from] alloy_signer_local::MnemonicBuilderError),
    #[error("failed to build signer: {0}")]
    Signer(#[from] alloy_signer_local::LocalSignerError),
    #[error("invalid RPC endpoint registered for `{network}`: {source}")]
    InvalidRpcUrl {
        network: Network,
        #[source]
        source: url::ParseError,
    },
    #[error("error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error serializing configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("error parsing configuration: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("error (de)serializing version metadata: {0}")]
    Json(#[from] serde_json::Error),
}
