//! Command-line adapter for `release-assets`.
//!
//! Reads the run configuration from flags or the GitHub Actions environment,
//! wires the GitHub client into the core orchestrator, and reports the result
//! as a `browser_download_urls` step output.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use config::CliConfig;
pub use error::CliError;
pub use parser::Cli;
