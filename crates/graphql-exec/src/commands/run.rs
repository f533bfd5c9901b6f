use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::demo_schema;
use crate::demo_schema::Caster;
use crate::output_utils;
use libgraphql_exec::Context;
use libgraphql_exec::Request;
use libgraphql_exec::schema::SubscriptionEvent;
use libgraphql_exec::types::FieldValue;
use libgraphql_exec::value::Value;
use libgraphql_exec::value::Variables;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub(crate) struct RunCmd {
    #[arg(
        help="Name of the wizard performing mutations.",
        long,
    )]
    caster: Option<String>,

    #[arg(
        help="Payload of the event a subscription operation is executed for.",
        long,
    )]
    event: Option<String>,

    #[arg(
        help="Path to the file holding the query document to execute.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,

    #[arg(
        help="Abandon execution after this many milliseconds.",
        long,
    )]
    timeout_ms: Option<u64>,

    #[arg(
        help="Variables for the operation, as a JSON object.",
        long,
    )]
    variables: Option<String>,
}
impl RunCmd {
    fn variables(&self) -> anyhow::Result<Variables> {
        let Some(json) = &self.variables else {
            return Ok(Variables::new());
        };
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|err| anyhow::anyhow!("--variables must be a JSON object: {err}"))?;
        Ok(entries.into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect())
    }

    fn context(&self) -> Context {
        let mut ctx = Context::new();
        if let Some(timeout_ms) = self.timeout_ms {
            ctx = ctx.with_timeout(Duration::from_millis(timeout_ms));
        }
        if let Some(caster) = &self.caster {
            ctx = ctx.with_data(Caster(caster.clone()));
        }
        ctx
    }
}

#[inherent::inherent]
impl RunnableCommand for RunCmd {
    pub fn label(&self) -> String {
        format!("run {}", self.query_file.display())
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        let query = match tokio::fs::read_to_string(&self.query_file).await {
            Ok(query) => query,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to read {:#?}: {err}",
                output_utils::RED_X,
                self.query_file,
            )),
        };
        let variables = match self.variables() {
            Ok(variables) => variables,
            Err(err) => return CommandResult::failure(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Read {} bytes of query text and {} variables.", query.len(), variables.len());

        let schema = match demo_schema::build() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to build the demo schema: {err}",
                output_utils::RED_X,
            )),
        };

        let ctx = self.context();
        let request = Request::new(query).with_variables(variables);
        let source = match self.event {
            Some(payload) => FieldValue::object(SubscriptionEvent::new(payload.into_bytes())),
            None => FieldValue::Null,
        };

        // Lazy fields may block while they wait on their results.
        let outcome = tokio::task::spawn_blocking(move || {
            schema.execute_request(&ctx, &request, source)
        }).await;

        let response = match outcome {
            Ok(Some(response)) => response,
            Ok(None) => return CommandResult::success(format_args!(
                "{} The event produced no update.",
                output_utils::GREEN_CHECK,
            )),
            Err(err) => return CommandResult::failure(format_args!(
                "{} Execution did not complete: {err}",
                output_utils::RED_X,
            )),
        };

        let json = match serde_json::to_string_pretty(&response) {
            Ok(json) => json,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to serialize the response: {err}",
                output_utils::RED_X,
            )),
        };
        if response.is_ok() {
            CommandResult::success(format_args!("{json}"))
        } else {
            log::debug!("Request failed with {} errors.", response.errors.len());
            CommandResult::failure_with_stdout(format_args!("{json}"))
        }
    }
}
