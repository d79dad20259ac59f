//! Result and failure reporting in GitHub Actions conventions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use release_assets_core::UploadOutcome;

use crate::error::CliError;

/// Name of the step output carrying the download URLs.
pub const OUTPUT_NAME: &str = "browser_download_urls";

/// Escape a value for use in a workflow command.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Append `name=value` to a step output file.
pub fn write_step_output<W: Write>(writer: &mut W, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(writer, "{name}={value}")
}

/// Report a successful run: JSON on stdout, and in the output file if set.
pub fn publish(outcome: &UploadOutcome, output_file: Option<&Path>) -> Result<(), CliError> {
    let json = outcome
        .to_json()
        .map_err(|e| CliError::Output(e.to_string()))?;

    if let Some(path) = output_file {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write_step_output(&mut file, OUTPUT_NAME, &json)?;
    }

    println!("{json}");
    Ok(())
}

/// Format a failure as a workflow `error` command.
pub fn failure_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report a failed run on stdout and in the log.
pub fn report_failure(err: &anyhow::Error) {
    let message = format!("{err:#}");
    tracing::error!("{message}");
    println!("{}", failure_command(&message));
}
