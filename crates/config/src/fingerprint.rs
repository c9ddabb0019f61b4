use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{ChainId, ConfigError, DeployConfig, Network};

/// Name of the version metadata file when saved into a directory.
pub const RESOLVED_VERSION_FILENAME: &str = ".trestle-version.json";

/// Configuration parameters that affect deployment wiring.
///
/// This struct contains only the parameters that, when changed, invalidate
/// previously exported deployment artifacts. Secrets, signing material, and
/// explorer API keys are explicitly excluded so the fingerprint is safe to
/// store and compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFingerprint {
    /// Chain id of every resolved network
    pub chain_ids: BTreeMap<Network, ChainId>,
    /// RPC endpoint of every resolved network
    pub rpc_urls: BTreeMap<Network, String>,
    /// Network the local simulation forks, if any
    pub fork_source: Option<Network>,
    /// Block height the fork is pinned to
    pub fork_block_number: Option<u64>,
    /// Compiler matrix, in selection order
    pub compiler_versions: Vec<String>,
}

impl ConfigFingerprint {
    /// Extract the fingerprint-relevant parameters from a resolved
    /// configuration.
    pub fn from_config(config: &DeployConfig) -> Self {
        Self {
            chain_ids: config
                .networks
                .iter()
                .map(|(network, descriptor)| (*network, descriptor.chain_id))
                .collect(),
            rpc_urls: config
                .networks
                .iter()
                .map(|(network, descriptor)| (*network, descriptor.rpc_url.to_string()))
                .collect(),
            fork_source: config.fork().map(|fork| fork.source),
            fork_block_number: config.fork().map(|fork| fork.block_number),
            compiler_versions: config
                .compilers
                .iter()
                .map(|compiler| compiler.version.clone())
                .collect(),
        }
    }

    /// Compute a SHA-256 hash of this fingerprint.
    ///
    /// The hash is deterministic - the same configuration always produces the
    /// same hash. The fingerprint is serialized to JSON (with sorted keys)
    /// before hashing to ensure consistent ordering.
    pub fn compute_hash(&self) -> String {
        // Serialize to JSON with sorted keys for consistent hashing
        let json = serde_json::to_string(self)
            .expect("ConfigFingerprint serialization should never fail");

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        hex::encode(result)
    }
}

/// Version metadata stored alongside exported deployment artifacts.
///
/// Used to detect when configuration changes require re-exporting artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVersion {
    /// SHA-256 hash of the configuration fingerprint
    pub config_hash: String,
    /// Unix timestamp when this configuration was resolved
    pub resolved_at: u64,
    /// Trestle version that resolved this configuration
    pub trestle_version: String,
}

impl ResolvedVersion {
    /// Create a new ResolvedVersion with the given config hash.
    ///
    /// The timestamp is set to the current system time, and the version is
    /// taken from the CARGO_PKG_VERSION environment variable.
    pub fn new(config_hash: String) -> Self {
        Self {
            config_hash,
            resolved_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("System time should be after Unix epoch")
                .as_secs(),
            trestle_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Save this version metadata as formatted JSON. A directory path gets
    /// [`RESOLVED_VERSION_FILENAME`] appended.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let path = if path.is_dir() {
            path.join(RESOLVED_VERSION_FILENAME)
        } else {
            path.to_path_buf()
        };
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Load version metadata saved by [`Self::save_to_file`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path = if path.is_dir() {
            path.join(RESOLVED_VERSION_FILENAME)
        } else {
            path.to_path_buf()
        };
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let version: Self = serde_json::from_str(&content)?;
        Ok(version)
    }
}
