//! Launch error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when launching the bot process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The target executable does not exist. Reported before any spawn
    /// attempt, and distinct from the store's empty-load signal.
    #[error("Launch target not found: {0}")]
    TargetMissing(PathBuf),

    /// The OS refused to create the child process.
    #[error("Failed to spawn bot process: {0}")]
    Spawn(#[source] std::io::Error),
}
