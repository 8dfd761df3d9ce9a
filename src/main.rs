use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use proxy_dbg::cli::Cli;
use proxy_dbg::commands::{self, Context, Outcome};
use proxy_dbg::config::loader::resolve_config;
use proxy_dbg::error::DbgError;
use proxy_dbg::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit here (code 2) before any I/O.
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "Command failed");
            let _ = writeln!(io::stdout(), "{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: &Cli) -> Result<Outcome, DbgError> {
    let config = resolve_config(cli.config.as_deref(), cli.overrides())?;

    logging::init(logging::effective_level(
        &config.observability.log_level,
        cli.verbose,
    ));

    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "Configuration file loaded");
    }
    tracing::debug!(
        endpoint = %config.endpoint.base_url,
        timeout_secs = config.endpoint.timeout_secs,
        conf_path = %config.nginx.conf_path.display(),
        "Configuration resolved"
    );

    let ctx = Context::from_config(&config)?;
    let command = cli.to_command();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&command, &ctx, &mut out).await
}
