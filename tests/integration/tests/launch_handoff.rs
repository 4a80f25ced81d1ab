//! Launch handoff integration tests.
//!
//! The secret is only observable from within the spawned child, so the
//! child here is a shell script that writes its environment variable to a
//! file the test can poll for.

#![cfg(unix)]

use sequential_core::SecretString;
use sequential_launcher::{launch, LaunchError, BOT_TOKEN_ENV};
use sequential_secrets::{Category, CredentialStore, FileCredentialStore, Provider};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Write an executable script that dumps the token env var to `out`.
fn write_probe_script(dir: &Path, out: &Path) -> PathBuf {
    let script = dir.join("bot.sh");
    std::fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s' \"${BOT_TOKEN_ENV}\" > {}\n", out.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Poll for the probe output file; the child runs unsupervised.
fn wait_for_file(path: &Path) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if let Ok(content) = std::fs::read_to_string(path) {
            if !content.is_empty() {
                return content;
            }
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("probe output never appeared at {}", path.display());
}

#[test]
fn test_child_receives_secret_in_environment() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("observed-token");
    let script = write_probe_script(dir.path(), &out);

    let secret = SecretString::new("abc.def.ghi");
    let launched = launch(&secret, &script).unwrap();
    assert!(launched.pid() > 0);

    assert_eq!(wait_for_file(&out), "abc.def.ghi");
}

#[test]
fn test_parent_environment_is_never_mutated() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("observed-token");
    let script = write_probe_script(dir.path(), &out);

    launch(&SecretString::new("abc.def.ghi"), &script).unwrap();
    wait_for_file(&out);

    // The variable lives in the child's process table entry only.
    assert!(std::env::var(BOT_TOKEN_ENV).is_err());
}

#[test]
fn test_missing_target_fails_before_spawn() {
    let result = launch(
        &SecretString::new("abc.def.ghi"),
        Path::new("/nonexistent/bot"),
    );
    assert!(matches!(result, Err(LaunchError::TargetMissing(_))));
}

/// The full end-to-end scenario: save, load, launch, verify from the child.
#[tokio::test]
async fn test_save_load_launch_scenario() {
    let store_dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(store_dir.path());
    let discord = Provider::new("Discord").unwrap();

    store
        .save(Category::Tokens, &discord, "abc.def.ghi")
        .await
        .unwrap();

    let token = store.load(Category::Tokens, &discord).await;
    assert_eq!(token, "abc.def.ghi");

    let bot_dir = TempDir::new().unwrap();
    let out = bot_dir.path().join("observed-token");
    let script = write_probe_script(bot_dir.path(), &out);

    let launched = launch(&SecretString::new(token), &script).unwrap();
    assert!(launched.pid() > 0);
    assert_eq!(wait_for_file(&out), "abc.def.ghi");
}
