//! trestle resolves the network, account and fork configuration the
//! governance bridge deployment pipeline runs against.

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::Table;
use strum::IntoEnumIterator;

use cli::{Cli, Command, OutputFormat};
use trestle_config::{
    DeployConfig, Env, ForkOverlay, Network, ResolvedVersion, SigningProfile, TaskCategory,
    TaskRegistry, companion_links, dev_accounts, rpc,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let env = Env::from_process();

    // Task loading is part of configuration evaluation and happens for every
    // command unless skipped.
    let tasks = TaskRegistry::load(cli.skip_tasks || env.skip_tasks())?;

    match cli.command {
        Command::Networks => cmd_networks(),
        Command::Accounts { network, count } => cmd_accounts(&env, network, count),
        Command::Fork => cmd_fork(&env),
        Command::Tasks { category } => cmd_tasks(&tasks, category),
        Command::Resolve {
            out,
            format,
            networks,
            allow_dangling,
        } => cmd_resolve(env, networks, allow_dangling, out, format),
        Command::Check { networks } => cmd_check(env, networks).await,
    }
}

fn cmd_networks() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Network", "Chain ID", "RPC Endpoint", "Companions"]);

    for network in Network::iter() {
        let companions = companion_links(network)
            .iter()
            .map(|(role, target)| format!("{role} -> {target}"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            network.to_string(),
            network.chain_id().to_string(),
            network.rpc_url().to_string(),
            companions,
        ]);
    }

    println!("{table}");
    Ok(())
}

fn cmd_accounts(env: &Env, network: Network, count: u32) -> Result<()> {
    let mut table = Table::new();

    // The local node always runs the well-known funded accounts, regardless
    // of what the environment provides.
    if network == Network::Local {
        table.set_header(vec!["Index", "Address", "Balance (wei)"]);
        for (index, account) in dev_accounts()?.iter().take(count as usize).enumerate() {
            table.add_row(vec![
                index.to_string(),
                account.address.to_string(),
                account.balance.clone(),
            ]);
        }
        println!("Local simulation accounts:");
        println!("{table}");
        return Ok(());
    }

    let profile = SigningProfile::resolve(env);
    let shown = count.min(profile.account_count());

    table.set_header(vec!["Index", "Address"]);
    for index in 0..shown {
        let signer = profile
            .signer_at(index)
            .context("No usable credentials in the environment (set PRIVATE_KEY or MNEMONIC)")?;
        table.add_row(vec![index.to_string(), signer.address().to_string()]);
    }

    let mode = if profile.is_raw_key() {
        "raw key"
    } else {
        "mnemonic"
    };
    println!("Signing profile for {network}: {mode}");
    println!("{table}");
    Ok(())
}

fn cmd_fork(env: &Env) -> Result<()> {
    match ForkOverlay::from_env(env)? {
        Some(fork) => {
            println!("Fork overlay active:");
            println!("  source:       {}", fork.source);
            println!("  rpc url:      {}", fork.rpc_url);
            println!("  block number: {}", fork.block_number);
        }
        None => println!("No fork requested (set MAINNET_FORK=true to enable)"),
    }
    Ok(())
}

fn cmd_tasks(registry: &TaskRegistry, category: Option<TaskCategory>) -> Result<()> {
    if registry.skipped() {
        println!("Task loading skipped (SKIP_LOAD or --skip-tasks)");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Task", "Category", "Description"]);
    for task in registry.tasks() {
        if category.is_some_and(|wanted| wanted != task.category) {
            continue;
        }
        table.add_row(vec![
            task.name.to_string(),
            task.category.to_string(),
            task.description.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn cmd_resolve(
    env: Env,
    networks: Vec<Network>,
    allow_dangling: bool,
    out: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut builder = DeployConfig::builder()
        .env(env)
        .validate_companions(!allow_dangling);
    if !networks.is_empty() {
        builder = builder.networks(networks);
    }
    let config = builder.build()?;

    let hash = config.fingerprint().compute_hash();
    tracing::info!(config_hash = %hash, "Configuration resolved");

    match out {
        Some(path) => {
            config.save_to_file(&path)?;
            if path.is_dir() {
                ResolvedVersion::new(hash).save_to_file(&path)?;
            }
        }
        None => {
            let rendered = match format {
                OutputFormat::Toml => toml::to_string_pretty(&config)?,
                OutputFormat::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{rendered}");
        }
    }
    Ok(())
}

async fn cmd_check(env: Env, networks: Vec<Network>) -> Result<()> {
    let selected: Vec<Network> = if networks.is_empty() {
        Network::iter().filter(Network::probeable).collect()
    } else {
        networks
    };

    // Dangling links are irrelevant when probing endpoints.
    let config = DeployConfig::builder()
        .networks(selected)
        .env(env)
        .validate_companions(false)
        .build()?;

    let client = rpc::create_client()?;
    let mut table = Table::new();
    table.set_header(vec!["Network", "Chain ID", "Status"]);
    let mut failures = 0usize;

    for descriptor in config.networks.values() {
        let status = match rpc::verify_chain_id(&client, descriptor).await {
            Ok(()) => "ok".to_string(),
            Err(error) => {
                failures += 1;
                format!("{error:#}")
            }
        };
        table.add_row(vec![
            descriptor.network.to_string(),
            descriptor.chain_id.to_string(),
            status,
        ]);
    }

    println!("{table}");
    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} endpoints failed verification",
            config.networks.len()
        );
    }
    Ok(())
}
