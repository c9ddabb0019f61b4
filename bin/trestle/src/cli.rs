use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use trestle_config::{Network, TaskCategory};

/// Print format for the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    Toml,
    Json,
}

#[derive(Parser)]
#[command(name = "trestle")]
#[command(
    author,
    version,
    about = "Resolve the network and deployment configuration for the governance bridge pipeline"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "TRESTLE_VERBOSITY", default_value_t = LevelFilter::INFO, global = true)]
    pub verbosity: LevelFilter,

    /// Skip loading the task registry.
    ///
    /// Loading is also skipped when SKIP_LOAD=true is set in the environment.
    #[arg(long, global = true)]
    pub skip_tasks: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the shipped networks with their chain ids, endpoints and
    /// companion links.
    Networks,

    /// Show the accounts the current environment provisions for a network.
    Accounts {
        /// The network whose signing profile to inspect.
        #[arg(long, default_value_t = Network::Local)]
        network: Network,

        /// How many accounts to show.
        #[arg(long, default_value_t = 5)]
        count: u32,
    },

    /// Show the fork overlay the current environment requests.
    Fork,

    /// List the registered pipeline tasks.
    Tasks {
        /// Only show tasks in this category.
        #[arg(long)]
        category: Option<TaskCategory>,
    },

    /// Resolve the full configuration and print or save it.
    Resolve {
        /// Write the configuration here instead of printing it.
        ///
        /// A directory gets Trestle.toml plus version metadata; a file path
        /// gets the configuration alone.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print format when no output path is given.
        #[arg(long, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Restrict resolution to these networks.
        #[arg(long, value_delimiter = ',')]
        networks: Vec<Network>,

        /// Allow companion links that point outside the selected networks.
        #[arg(long)]
        allow_dangling: bool,
    },

    /// Probe the configured RPC endpoints and compare reported chain ids
    /// against the registry.
    Check {
        /// Networks to probe. Defaults to every network with a public
        /// endpoint.
        #[arg(long, value_delimiter = ',')]
        networks: Vec<Network>,
    },
}
