//! Sequential command-line interface.
//!
//! The CLI is the caller boundary the credential store and launch
//! coordinator compose at: it owns policy (launch eligibility, how an empty
//! load is rendered) while the library crates stay policy-free.

pub mod commands;
pub mod context;

use clap::{Parser, Subcommand};
use context::AppContext;

/// Sequential - local encrypted credential manager
#[derive(Parser)]
#[command(name = "sequential")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create the credential directory tree and a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Encrypt and store a credential
    Save(commands::credentials::SaveArgs),

    /// Decrypt and print a stored credential
    Load(commands::credentials::LoadArgs),

    /// List providers with a stored credential
    List(commands::credentials::ListArgs),

    /// Launch the bot with its stored token
    Launch(commands::launch::LaunchArgs),

    /// Run diagnostics
    Doctor,

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Version = cli.command {
        println!("sequential {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let ctx = AppContext::init()?;

    match cli.command {
        Commands::Init { force } => commands::init::run(&ctx, force).await,
        Commands::Save(args) => commands::credentials::save(&ctx, args).await,
        Commands::Load(args) => commands::credentials::load(&ctx, args).await,
        Commands::List(args) => commands::credentials::list(&ctx, args).await,
        Commands::Launch(args) => commands::launch::run(&ctx, args).await,
        Commands::Doctor => commands::doctor::run(&ctx).await,
        Commands::Version => unreachable!("handled above"),
    }
}
