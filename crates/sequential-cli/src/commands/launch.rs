//! Bot launch command.
//!
//! This is the policy boundary the launch coordinator deliberately lacks:
//! only the `tokens` category is launch-eligible, so the command always
//! draws from the tokens subtree, and an empty load is refused here before
//! any process is spawned.

use crate::context::AppContext;
use clap::Args;
use sequential_core::SecretString;
use sequential_secrets::{Category, CredentialStore, Provider};
use std::path::PathBuf;

/// Launch command arguments.
#[derive(Args)]
pub struct LaunchArgs {
    /// Provider whose token to hand to the bot (default: config `bot.provider`)
    pub provider: Option<String>,

    /// Executable to start (default: config `bot.target`)
    #[arg(long)]
    pub target: Option<PathBuf>,
}

/// Run the launch command.
pub async fn run(ctx: &AppContext, args: LaunchArgs) -> anyhow::Result<()> {
    let label = args
        .provider
        .as_deref()
        .unwrap_or(&ctx.config.bot.provider);
    let provider = Provider::new(label)?;

    let target = args
        .target
        .or_else(|| ctx.config.bot.target.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No launch target configured; pass --target or set bot.target")
        })?;

    let token = SecretString::new(ctx.store.load(Category::Tokens, &provider).await);
    if token.is_empty() {
        anyhow::bail!(
            "No token stored for '{provider}'; save one with `sequential save tokens {provider}`"
        );
    }

    let launched = sequential_launcher::launch(&token, &target)?;
    println!("Bot started (pid {}).", launched.pid());
    Ok(())
}
