//! Integration tests for trestle-config.
//!
//! These tests resolve complete configurations through the public API without
//! touching the network. Run with: cargo test --test integration_test

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tempdir::TempDir;
use trestle_config::{
    ChainId, CompanionRole, ConfigError, DEFAULT_FORK_BLOCK, DERIVED_ACCOUNT_COUNT,
    DEV_ACCOUNT_COUNT, DeployConfig, Env, Network, ResolvedVersion, TaskCategory, TaskRegistry,
    companion_links, dev_accounts,
};

/// Initialize tracing for tests (idempotent).
fn init_test_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init()
        .ok();
}

#[test]
fn test_default_resolution_covers_all_networks() -> Result<()> {
    init_test_tracing();

    let config = DeployConfig::builder().env(Env::default()).build()?;

    assert_eq!(config.networks.len(), Network::iter().count());
    for network in Network::iter() {
        let descriptor = config.descriptor(network)?;
        assert_eq!(descriptor.network, network);
        assert_eq!(descriptor.chain_id, network.chain_id());
        assert_eq!(descriptor.companions, companion_links(network));
    }

    assert_eq!(config.local.accounts.len(), DEV_ACCOUNT_COUNT as usize);
    assert!(config.local.throw_on_transaction_failures);
    assert!(config.fork().is_none());
    Ok(())
}

#[test]
fn test_fork_resolution_worked_example() -> Result<()> {
    init_test_tracing();

    let env = Env {
        mainnet_fork: Some("true".to_string()),
        forking_block_number: Some("100".to_string()),
        ..Env::default()
    };
    let config = DeployConfig::builder().env(env).build()?;

    let fork = config.fork().context("fork overlay should be active")?;
    assert_eq!(fork.source, Network::Main);
    assert_eq!(fork.block_number, 100);

    let fingerprint = config.fingerprint();
    assert_eq!(fingerprint.fork_source, Some(Network::Main));
    assert_eq!(fingerprint.fork_block_number, Some(100));
    Ok(())
}

#[test]
fn test_fork_defaults_and_failure_modes() -> Result<()> {
    init_test_tracing();

    // No block requested: pinned default.
    let config = DeployConfig::builder()
        .env(Env {
            mainnet_fork: Some("true".to_string()),
            ..Env::default()
        })
        .build()?;
    assert_eq!(
        config.fork().map(|fork| fork.block_number),
        Some(DEFAULT_FORK_BLOCK)
    );

    // Unparsable block: resolution fails outright.
    let result = DeployConfig::builder()
        .env(Env {
            mainnet_fork: Some("true".to_string()),
            forking_block_number: Some("latest".to_string()),
            ..Env::default()
        })
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidForkHeight { .. })));
    Ok(())
}

#[test]
fn test_deployer_account_worked_example() -> Result<()> {
    init_test_tracing();

    let env = Env {
        mnemonic: Some(
            "test test test test test test test test test test test junk".to_string(),
        ),
        ..Env::default()
    };
    let config = DeployConfig::builder().env(env).build()?;

    let descriptor = config.descriptor(Network::Sepolia)?;
    assert_eq!(descriptor.accounts.account_count(), DERIVED_ACCOUNT_COUNT);

    let deployer = descriptor.accounts.deployer()?;
    assert_eq!(
        deployer.address().to_string(),
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
    );

    // The configured profile matches the local node's derivation.
    assert_eq!(dev_accounts()?[0].address, deployer.address());
    Ok(())
}

#[test]
fn test_raw_key_wins_on_every_network() -> Result<()> {
    init_test_tracing();

    let env = Env {
        private_key: Some(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        ),
        mnemonic: Some("some other phrase".to_string()),
        ..Env::default()
    };
    let config = DeployConfig::builder().env(env).build()?;

    for network in Network::iter() {
        let descriptor = config.descriptor(network)?;
        assert!(descriptor.accounts.is_raw_key(), "{network}");
        assert_eq!(descriptor.accounts.account_count(), 1);
    }

    let deployer = config.descriptor(Network::Main)?.accounts.deployer()?;
    assert_eq!(
        deployer.address().to_string(),
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
    );
    assert!(config.fork().is_none());
    Ok(())
}

#[test]
fn test_companion_traversal_end_to_end() -> Result<()> {
    init_test_tracing();

    let config = DeployConfig::builder().env(Env::default()).build()?;

    // L1 down to each rollup.
    let optimism = config
        .companion(Network::Main, CompanionRole::Optimism)?
        .context("main should link to optimism")?;
    assert_eq!(optimism.chain_id, ChainId(10));

    // Rollup testnet back up to its L1.
    let l1 = config
        .companion(Network::ArbitrumTestnet, CompanionRole::L1)?
        .context("arbitrum-testnet should link back to sepolia")?;
    assert_eq!(l1.network, Network::Sepolia);

    // And down again on the other side.
    let lisk_sepolia = config
        .companion(l1.network, CompanionRole::Lisk)?
        .context("sepolia should link to lisk-sepolia")?;
    assert_eq!(lisk_sepolia.chain_id, ChainId(4202));

    // Mainnet rollups carry no links of their own.
    assert!(config.companion(Network::Optimism, CompanionRole::L1)?.is_none());
    Ok(())
}

#[test]
fn test_subset_validation_rejects_dangling_links() {
    init_test_tracing();

    let result = DeployConfig::builder()
        .networks([Network::Main])
        .env(Env::default())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::DanglingCompanion {
            network: Network::Main,
            ..
        })
    ));
}

#[test]
fn test_subset_validation_opt_out() -> Result<()> {
    init_test_tracing();

    let config = DeployConfig::builder()
        .networks([Network::Main])
        .env(Env::default())
        .validate_companions(false)
        .build()?;

    // The link survives resolution but fails on traversal.
    assert!(matches!(
        config.companion(Network::Main, CompanionRole::Optimism),
        Err(ConfigError::DanglingCompanion { .. })
    ));

    // Unresolved networks are reported as unknown, not dangling.
    assert!(matches!(
        config.descriptor(Network::Sepolia),
        Err(ConfigError::UnknownNetwork(Network::Sepolia))
    ));
    Ok(())
}

#[test]
fn test_configuration_roundtrip() -> Result<()> {
    init_test_tracing();

    let env = Env {
        mainnet_fork: Some("true".to_string()),
        report_gas: Some("true".to_string()),
        etherscan_key: Some("testkey".to_string()),
        ..Env::default()
    };
    let config = DeployConfig::builder().env(env).build()?;

    let dir = TempDir::new("trestle-roundtrip")?;
    config.save_to_file(dir.path())?;

    let loaded = DeployConfig::load_from_file(dir.path())?;
    assert_eq!(config, loaded);
    assert_eq!(
        config.fingerprint().compute_hash(),
        loaded.fingerprint().compute_hash()
    );
    Ok(())
}

#[test]
fn test_resolved_version_tracks_fingerprint() -> Result<()> {
    init_test_tracing();

    let config = DeployConfig::builder().env(Env::default()).build()?;
    let hash = config.fingerprint().compute_hash();

    let dir = TempDir::new("trestle-version")?;
    ResolvedVersion::new(hash.clone()).save_to_file(dir.path())?;

    let loaded = ResolvedVersion::load_from_file(dir.path())?;
    assert_eq!(loaded.config_hash, hash);

    // Resolving the same environment again still matches the stored hash.
    let again = DeployConfig::builder().env(Env::default()).build()?;
    assert_eq!(again.fingerprint().compute_hash(), loaded.config_hash);
    Ok(())
}

#[test]
fn test_task_registry_load_and_skip() -> Result<()> {
    init_test_tracing();

    let registry = TaskRegistry::load(false)?;
    assert!(registry.is_active());
    assert!(!registry.is_empty());

    // Categories load in declaration order.
    let first = registry.tasks().first().context("registry is empty")?;
    assert_eq!(first.category, TaskCategory::Deploy);
    let last = registry.tasks().last().context("registry is empty")?;
    assert_eq!(last.category, TaskCategory::Verify);

    let skipped = TaskRegistry::load(true)?;
    assert!(skipped.skipped());
    assert!(skipped.is_empty());
    Ok(())
}
