//! Validated run configuration built from the parsed command line.

use std::path::PathBuf;
use std::time::Duration;

use release_assets_core::{PatternSet, RepositoryIdentity, UploadRequest};
use release_assets_github::GithubClientConfig;

use crate::error::CliError;
use crate::parser::Cli;

/// Everything the composition root needs, validated.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// The upload run to perform.
    pub request: UploadRequest,
    /// GitHub client settings, including the token.
    pub client: GithubClientConfig,
    /// Step output file, if running under Actions.
    pub output_file: Option<PathBuf>,
    /// Maximum concurrent uploads.
    pub max_concurrent: usize,
}

impl CliConfig {
    /// Validate parsed arguments.
    ///
    /// Malformed `asset_paths` surfaces as the run's `InvalidPatternSet` error.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let repository = RepositoryIdentity::parse(&cli.repository).ok_or_else(|| {
            CliError::Arguments(format!(
                "repository must be given as owner/name, got '{}'",
                cli.repository
            ))
        })?;

        if cli.token.trim().is_empty() {
            return Err(CliError::Arguments("GitHub token is empty".to_string()));
        }

        let patterns = PatternSet::parse(&cli.asset_paths, cli.paths_format.into())?;

        let client = GithubClientConfig::new()
            .with_base_url(cli.api_url.clone())
            .with_token(cli.token.clone())
            .with_timeout(Duration::from_secs(cli.timeout_secs));

        Ok(Self {
            request: UploadRequest {
                repository,
                triggering_ref: cli.git_ref.clone(),
                patterns,
            },
            client,
            output_file: cli.output_file.clone(),
            max_concurrent: cli.max_concurrent,
        })
    }
}
