//! CLI bootstrap - the composition root.
//!
//! This is the ONLY place where the GitHub adapter is wired into the core
//! orchestrator.

use std::sync::Arc;

use anyhow::{Context, Result};
use release_assets_core::ReleaseAssetUploader;
use release_assets_github::DefaultGithubClient;

use crate::config::CliConfig;

/// Fully composed application context.
pub struct CliContext {
    /// Orchestrator bound to the GitHub client.
    pub uploader: ReleaseAssetUploader,
}

/// Build the application context from validated configuration.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client = DefaultGithubClient::new(&config.client)
        .context("Failed to create GitHub client")?;

    let uploader =
        ReleaseAssetUploader::new(Arc::new(client)).with_max_concurrent(config.max_concurrent);

    Ok(CliContext { uploader })
}
