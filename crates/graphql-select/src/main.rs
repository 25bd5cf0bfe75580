mod cli;
mod command_result;
mod commands;
mod introspection;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.cmd {
        Some(command) => command.run().await.print(),
        None => match Cli::print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Install a stderr `tracing` subscriber. Library crates log through `log`,
/// which the subscriber bridges.
fn init_logging(cli: &Cli) {
    let env_value = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = cli.log_level(env_value.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests;
