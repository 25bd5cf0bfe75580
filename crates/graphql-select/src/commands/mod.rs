mod introspect;

use crate::CommandResult;
use introspect::IntrospectCmd;

/// A `gqlsel` subcommand. Runs to completion and reports through a
/// [`CommandResult`] instead of printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self) -> CommandResult;
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Run a schema introspection query against a GraphQL endpoint.
    Introspect(Box<IntrospectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandResult {
        match self {
            Self::Introspect(cmd) => cmd.run().await,
        }
    }
}
