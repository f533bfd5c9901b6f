use crate::Cli;
use crate::CommandResult;

/// A `graphql-exec` subcommand.
///
/// Commands never print or exit on their own. `main` logs the command's
/// `label`, then writes out the returned [`CommandResult`] and exits with its
/// code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// The subcommand and its operands, as shown in log lines.
    fn label(&self) -> String;

    async fn run(self, cli: Cli) -> CommandResult;
}
