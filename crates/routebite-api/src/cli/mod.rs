//! CLI argument definitions and command handlers.

pub mod resolve;
pub mod routes;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Routebite: restaurants along highway routes, over Telegram or HTTP.
#[derive(Parser)]
#[command(name = "rbite", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the lookup endpoint and the Telegram poller
    Serve {
        /// Bind host (overrides RBITE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides RBITE_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Resolve a route locally without starting the bot
    Resolve {
        /// Start city
        start: String,
        /// End city
        end: String,
    },

    /// Print the known route connections
    Routes,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
