//! Bot process launch with one-shot secret handoff.
//!
//! The coordinator starts an external process and injects the decrypted
//! token into that child's environment only. The secret never touches the
//! parent's environment, the command line, a file, or a log line; once the
//! parent drops its [`sequential_core::SecretString`] after spawn, its copy
//! of the plaintext is zeroed.

pub mod error;
pub mod launcher;

pub use error::LaunchError;
pub use launcher::{launch, LaunchedBot, BOT_TOKEN_ENV};
