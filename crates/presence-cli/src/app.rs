//! Process wiring: tracing, configuration, and error reporting

use std::io;
use std::process::ExitCode;

use presence_common::{
    try_init_tracing_with_config, AppConfig, AppError, ErrorResponse, TracingConfig,
};
use tracing::{debug, error, Level};

use crate::commands::Cli;

/// Run a parsed command line against the real stdin/stdout
pub fn run(cli: Cli) -> ExitCode {
    init_tracing(&cli);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "Command failed");
            report(&e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    debug!(env = ?config.app.env, max_buttons = config.normalize.max_buttons, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli.execute(&config, &mut stdin.lock(), &mut stdout.lock())
}

fn init_tracing(cli: &Cli) {
    let mut config = TracingConfig::cli();
    if cli.verbose {
        config.level = Level::DEBUG;
    }

    if let Err(e) = try_init_tracing_with_config(config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }
}

/// Print a machine-readable error report to stderr
fn report(err: &AppError) {
    let response = ErrorResponse::from(err);
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
}
