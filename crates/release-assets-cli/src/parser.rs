//! Command-line interface definition.
//!
//! Every flag falls back to the environment variable a GitHub Actions step
//! provides, so the binary runs unmodified as an action entry point.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use release_assets_core::{DEFAULT_MAX_CONCURRENT_UPLOADS, PatternFormat};
use release_assets_github::DEFAULT_API_URL;

use crate::error::CliError;

/// Upload build artifacts to an existing GitHub release.
#[derive(Parser, Debug)]
#[command(name = "upload-release-assets")]
#[command(about = "Upload build artifacts to an existing GitHub release")]
#[command(version)]
pub struct Cli {
    /// Asset paths or glob patterns, encoded as set by --paths-format
    #[arg(long = "asset-paths", env = "INPUT_ASSET_PATHS")]
    pub asset_paths: String,

    /// Encoding of --asset-paths
    #[arg(
        long = "paths-format",
        env = "INPUT_PATHS_FORMAT",
        value_enum,
        default_value_t = PathsFormatArg::Newline
    )]
    pub paths_format: PathsFormatArg,

    /// Repository owning the release, as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Ref that triggered the run, e.g. refs/tags/v1.2.3
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: String,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub REST API base URL
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File to append step outputs to
    #[arg(long = "output-file", env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Maximum number of uploads in flight
    #[arg(
        long = "max-concurrent",
        env = "INPUT_MAX_CONCURRENT",
        default_value_t = DEFAULT_MAX_CONCURRENT_UPLOADS
    )]
    pub max_concurrent: usize,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// `--paths-format` values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathsFormatArg {
    /// One path or glob per line
    Newline,
    /// JSON array of paths or globs
    Json,
}

impl From<PathsFormatArg> for PatternFormat {
    fn from(arg: PathsFormatArg) -> Self {
        match arg {
            PathsFormatArg::Newline => Self::Newline,
            PathsFormatArg::Json => Self::Json,
        }
    }
}

/// Parse the command line without letting clap exit on bad input.
///
/// `--help` and `--version` still print and exit through clap. Every other
/// parse failure becomes [`CliError::Arguments`] so it is reported through
/// the same failure path as a failed run.
pub fn parse_args<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let rendered = err.render().to_string();
            CliError::Arguments(rendered.trim().trim_start_matches("error: ").to_string())
        }
    })
}
