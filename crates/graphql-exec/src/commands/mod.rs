mod check;
mod run;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use run::RunCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-exec")]
pub(crate) enum CommandEnum {
    /// Parse and validate query documents against the demo schema.
    Check(Box<CheckCmd>),

    /// Execute a query document against the demo schema and print the
    /// response.
    Run(Box<RunCmd>),
}
impl CommandEnum {
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Check(cmd) => cmd.label(),
            Self::Run(cmd) => cmd.label(),
        }
    }

    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Run(cmd) => cmd.run(cli).await,
        }
    }
}
