//! Credential commands: save, load, list.

use crate::context::AppContext;
use clap::Args;
use sequential_secrets::{Category, CredentialStore, Provider};

/// Save command arguments.
#[derive(Args)]
pub struct SaveArgs {
    /// Credential category: `tokens` or `apis`
    pub category: String,

    /// Provider label (free-form; normalized to lowercase)
    pub provider: String,

    /// Credential value (if omitted, prompts for hidden input)
    #[arg(long)]
    pub value: Option<String>,
}

/// Load command arguments.
#[derive(Args)]
pub struct LoadArgs {
    /// Credential category: `tokens` or `apis`
    pub category: String,

    /// Provider label
    pub provider: String,
}

/// List command arguments.
#[derive(Args)]
pub struct ListArgs {
    /// Credential category: `tokens` or `apis`
    pub category: String,
}

/// Run the save command.
pub async fn save(ctx: &AppContext, args: SaveArgs) -> anyhow::Result<()> {
    let category: Category = args.category.parse()?;
    let provider = Provider::new(&args.provider)?;

    let value = match args.value {
        Some(v) => v,
        None => {
            let prompt = format!("Enter {category} credential for '{provider}': ");
            rpassword::prompt_password(prompt)
                .map_err(|e| anyhow::anyhow!("Failed to read credential: {e}"))?
        }
    };

    ctx.store.save(category, &provider, &value).await?;
    println!("Credential for '{provider}' saved under {category}.");
    Ok(())
}

/// Run the load command.
pub async fn load(ctx: &AppContext, args: LoadArgs) -> anyhow::Result<()> {
    let category: Category = args.category.parse()?;
    let provider = Provider::new(&args.provider)?;

    // "Never saved" and "saved but unreadable" both render as empty here;
    // the distinction exists one level down in LoadOutcome.
    let plaintext = ctx.store.load(category, &provider).await;
    if plaintext.is_empty() {
        println!("(no credential stored for '{provider}' under {category})");
    } else {
        println!("{plaintext}");
    }
    Ok(())
}

/// Run the list command.
pub async fn list(ctx: &AppContext, args: ListArgs) -> anyhow::Result<()> {
    let category: Category = args.category.parse()?;

    let providers = ctx.store.list(category).await?;
    if providers.is_empty() {
        println!("No credentials stored under {category}.");
    } else {
        for provider in &providers {
            println!("{provider}");
        }
        println!("\n{} credential(s) under {category}.", providers.len());
    }
    Ok(())
}
