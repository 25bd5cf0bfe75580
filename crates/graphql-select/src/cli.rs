use clap::CommandFactory;
use crate::commands;
use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlsel",
    version,
    about = "Run typed GraphQL selections against an endpoint.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at debug level. Takes precedence over `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn print_help() -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// Resolve the log level from `--verbose`, then from the `LOG_LEVEL`
    /// value (any `tracing` level name or number, plus `verbose`).
    ///
    /// An unrecognized `LOG_LEVEL` falls back to `INFO` and yields a warning
    /// to be logged once the subscriber is up.
    pub(crate) fn log_level(&self, env_value: Option<&str>) -> (Level, Option<String>) {
        if self.verbose {
            return (Level::DEBUG, None);
        }

        match env_value.map(str::trim) {
            None | Some("") => (DEFAULT_LOG_LEVEL, None),
            Some(value) if value.eq_ignore_ascii_case("verbose") => (Level::DEBUG, None),
            Some(value) => match value.parse::<Level>() {
                Ok(level) => (level, None),
                Err(_) => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!("Invalid `LOG_LEVEL` environment variable value: `{value}`")),
                ),
            },
        }
    }
}
