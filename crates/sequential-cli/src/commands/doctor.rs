//! Diagnostic command.

use crate::context::AppContext;
use console::{style, Emoji};
use sequential_core::paths;
use sequential_secrets::{Category, CredentialStore};

static CHECK: Emoji = Emoji("✓", "+");
static CROSS: Emoji = Emoji("✗", "x");
static WARN: Emoji = Emoji("⚠", "!");

/// Run the doctor command.
pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    println!("Sequential Doctor\n");

    let mut warnings = 0;

    // Check directories
    println!("Checking directories...");
    let base = ctx.store.layout().base();
    if base.exists() {
        println!("  {} Base directory exists: {:?}", style(CHECK).green(), base);
    } else {
        println!(
            "  {} Base directory missing: {:?} (run 'sequential init')",
            style(WARN).yellow(),
            base
        );
        warnings += 1;
    }

    for category in [Category::Tokens, Category::Apis] {
        let encrypted = ctx.store.layout().encrypted_dir(category);
        let key = ctx.store.layout().key_dir(category);
        if encrypted.is_dir() && key.is_dir() {
            println!("  {} {category} subtree present", style(CHECK).green());
        } else {
            println!("  {} {category} subtree incomplete", style(WARN).yellow());
            warnings += 1;
        }
    }

    // Check configuration
    println!("\nChecking configuration...");
    let config_path = paths::config_file()?;
    if config_path.exists() {
        println!("  {} Config file found: {:?}", style(CHECK).green(), config_path);
    } else {
        println!(
            "  {} Config file not found (defaults in effect)",
            style(WARN).yellow()
        );
        warnings += 1;
    }

    // Check launch target
    println!("\nChecking bot launch...");
    match &ctx.config.bot.target {
        Some(target) if target.exists() => {
            println!("  {} Launch target exists: {:?}", style(CHECK).green(), target);
        }
        Some(target) => {
            println!("  {} Launch target missing: {:?}", style(CROSS).red(), target);
            warnings += 1;
        }
        None => {
            println!(
                "  {} No launch target configured (set bot.target or pass --target)",
                style(WARN).yellow()
            );
            warnings += 1;
        }
    }

    let stored = ctx
        .store
        .exists(Category::Tokens, &ctx.config.bot.provider.parse()?)
        .await;
    if stored {
        println!(
            "  {} Token stored for provider '{}'",
            style(CHECK).green(),
            ctx.config.bot.provider
        );
    } else {
        println!(
            "  {} No token stored for provider '{}'",
            style(WARN).yellow(),
            ctx.config.bot.provider
        );
        warnings += 1;
    }

    println!();
    if warnings == 0 {
        println!("{} All checks passed.", style(CHECK).green());
    } else {
        println!("{} {warnings} warning(s).", style(WARN).yellow());
    }

    Ok(())
}
