//! # sequential-core
//!
//! Shared foundation for the Sequential credential manager.
//!
//! This crate provides the pieces every other Sequential crate leans on:
//!
//! - **Configuration**: the `~/.sequential/sequential.json5` config file
//! - **Paths**: resolution of the base directory and files under it
//! - **Secrets**: [`SecretString`], a zeroize-on-drop plaintext wrapper
//! - **Environment**: small helpers for reading environment variables

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use secret::SecretString;
