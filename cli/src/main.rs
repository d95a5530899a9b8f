use std::process::ExitCode;

use clap::Parser;
use task_core::{PlainTextRenderer, Report, TaskApiClient};
use tracing::info;

mod args;
mod commands;
mod logging;

use args::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = match commands::configure(&cli) {
        Ok(config) => config,
        Err(report) => return emit(&report),
    };
    info!(base_url = %config.base_url(), "port set");
    if cli.log_level.is_verbose() {
        emit(&Report::port_set(&config))?;
    }

    let client = TaskApiClient::connect(&config);
    let report = commands::run(&client, &PlainTextRenderer, &cli.command);
    emit(&report)
}

fn emit(report: &Report) -> anyhow::Result<ExitCode> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{report}")?;
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
