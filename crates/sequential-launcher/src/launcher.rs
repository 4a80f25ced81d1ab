//! Fire-and-forget process spawn with environment injection.

use crate::error::LaunchError;
use sequential_core::SecretString;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Environment variable the spawned bot reads its token from.
///
/// The variable is set on the child's environment only; the parent's
/// environment is never mutated, and the token is never passed as a
/// command-line argument (argv is visible in process listings).
pub const BOT_TOKEN_ENV: &str = "DISCORD_TOKEN";

/// A successfully launched bot process.
///
/// Holds only the child's pid -- no secret material -- so it is safe to log
/// or display. The coordinator does not supervise the child: there is no
/// handle to wait on and no exit status to collect.
#[derive(Debug, Clone, Copy)]
pub struct LaunchedBot {
    pid: u32,
}

impl LaunchedBot {
    /// OS process id of the spawned bot.
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// Launch `target` as a new, independent process with `secret` injected
/// into its environment under [`BOT_TOKEN_ENV`].
///
/// Returns as soon as the spawn call succeeds. The child inherits the
/// parent's stdio and runs until it terminates on its own; the caller gets
/// its pid and nothing else. Missing targets fail with
/// [`LaunchError::TargetMissing`] before any spawn attempt.
pub fn launch(secret: &SecretString, target: &Path) -> Result<LaunchedBot, LaunchError> {
    if !target.exists() {
        return Err(LaunchError::TargetMissing(target.to_path_buf()));
    }

    debug!(target = %target.display(), "spawning bot process");
    let child = Command::new(target)
        .env(BOT_TOKEN_ENV, secret.expose_secret())
        .spawn()
        .map_err(LaunchError::Spawn)?;

    let launched = LaunchedBot { pid: child.id() };
    info!(pid = launched.pid, "bot process started");
    // The Child handle is dropped here on purpose: the coordinator does not
    // wait for or supervise the bot's lifetime.
    Ok(launched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_target_rejected() {
        let secret = SecretString::new("abc.def.ghi");
        let target = PathBuf::from("/nonexistent/bot/main");

        let result = launch(&secret, &target);
        assert!(matches!(result, Err(LaunchError::TargetMissing(path)) if path == target));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_returns_pid() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("bot.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let secret = SecretString::new("abc.def.ghi");
        let launched = launch(&secret, &script).unwrap();
        assert!(launched.pid() > 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_target_is_spawn_error() {
        // The file exists, so the missing-target check passes; the OS then
        // refuses to execute it.
        let dir = tempfile::TempDir::new().unwrap();
        let plain = dir.path().join("not-a-program");
        std::fs::write(&plain, "just data").unwrap();

        let secret = SecretString::new("abc.def.ghi");
        let result = launch(&secret, &plain);
        assert!(matches!(result, Err(LaunchError::Spawn(_))));
    }

    #[test]
    fn test_launched_bot_debug_has_no_secret() {
        let launched = LaunchedBot { pid: 4242 };
        let rendered = format!("{launched:?}");
        assert!(rendered.contains("4242"));
    }
}
