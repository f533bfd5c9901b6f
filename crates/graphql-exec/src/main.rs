mod cli;
mod command;
mod command_result;
mod commands;
mod demo_schema;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    log::debug!("Running `{}`.", command.label());
    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Picks the log level from `--verbose`, then from the `LOG_LEVEL`
/// environment variable.
fn log_level(verbose: bool, env_val: Option<&str>) -> Result<tracing::Level, String> {
    if verbose {
        return Ok(tracing::Level::DEBUG);
    }
    match env_val.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(name) => name.parse::<tracing::Level>()
            .map_err(|_| format!("Invalid `LOG_LEVEL` environment variable value: `{name}`")),
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (level, warning) = match log_level(cli.verbose, env_val.as_deref()) {
        Ok(level) => (level, None),
        Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
