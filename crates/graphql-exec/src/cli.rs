use clap::CommandFactory;
use crate::commands;

/// Runs GraphQL query documents against a built-in schema of wizards.
///
/// `run` parses, validates, and executes one document and prints the JSON
/// response. Queries and mutations run against their roots directly;
/// subscriptions run once for the payload given with `--event`. `check` only
/// parses and validates, so whole directories of documents can be vetted.
#[derive(clap::Parser, Debug)]
#[command(
    after_help = "Examples:\n  \
        graphql-exec run queries/wizards.graphql --variables '{\"house\": \"SLYTHERIN\"}'\n  \
        graphql-exec run queries/owl_post.graphql --event 'Hedwig has a letter'\n  \
        graphql-exec check queries/",
    name = "graphql-exec",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Log at debug level, overriding the LOG_LEVEL environment variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to run; show how to pick one.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
