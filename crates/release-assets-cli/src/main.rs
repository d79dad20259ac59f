//! CLI entry point - the composition root.

use std::process::ExitCode;

use release_assets_cli::parser::parse_args;
use release_assets_cli::{Cli, CliConfig, CliError, bootstrap, logging, output};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(&config)?;

    let outcome = ctx
        .uploader
        .run(&config.request)
        .await
        .map_err(CliError::from)?;

    output::publish(&outcome, config.output_file.as_deref())?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            logging::init(false);
            let code = err.exit_code();
            output::report_failure(&err.into());
            return ExitCode::from(code);
        }
    };
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_failure(&err);
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
