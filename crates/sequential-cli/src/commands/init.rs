//! Init command: create the directory tree and a default config file.

use crate::context::AppContext;
use console::style;
use sequential_core::{paths, Config};
use sequential_secrets::CredentialStore;

/// Run the init command.
pub async fn run(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    ctx.store.ensure_layout().await?;
    println!(
        "{} Credential directories ready under {:?}",
        style("✓").green(),
        ctx.store.layout().base()
    );

    let config_path = paths::config_file()?;
    if config_path.exists() && !force {
        println!(
            "{} Config file already exists: {:?} (use --force to overwrite)",
            style("·").dim(),
            config_path
        );
    } else {
        Config::default().save(&config_path)?;
        println!("{} Wrote default config: {:?}", style("✓").green(), config_path);
    }

    Ok(())
}
