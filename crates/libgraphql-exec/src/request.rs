use crate::context::Context;
use crate::error::ExecutionError;
use crate::error::GraphQLError;
use crate::execution::Executor;
use crate::operation::parse;
use crate::schema::Schema;
use crate::types::FieldValue;
use crate::validation::validate;
use crate::value::Value;
use crate::value::Variables;
use serde::Deserialize;
use serde::Serialize;

/// A query document along with the variables it is executed with.
///
/// Deserializes from the usual `{"query": ..., "variables": {...}}` request
/// body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "RawRequest")]
pub struct Request {
    query: String,
    variables: Variables,
}
impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Variables::new(),
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }
}

#[derive(Deserialize)]
struct RawRequest {
    query: String,
    #[serde(default)]
    variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl From<RawRequest> for Request {
    fn from(raw: RawRequest) -> Self {
        Self {
            query: raw.query,
            variables: raw.variables
                .unwrap_or_default()
                .into_iter()
                .map(|(name, value)| (name, Value::from(value)))
                .collect(),
        }
    }
}

/// The outcome of a [`Request`]: either a result tree or the errors that
/// prevented one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl Response {
    fn error(err: impl Into<GraphQLError>) -> Self {
        Self {
            data: None,
            errors: vec![err.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Schema {
    /// Parses, validates, and executes `request` against the root type its
    /// operation names.
    ///
    /// `source` is the root value: `FieldValue::Null` for queries and
    /// mutations, the current
    /// [`SubscriptionEvent`](crate::schema::SubscriptionEvent) for a
    /// subscription. Returns `None` when a resolver signalled that the event
    /// produced no update.
    pub fn execute_request(
        &self,
        ctx: &Context,
        request: &Request,
        source: FieldValue,
    ) -> Option<Response> {
        let query = match parse(&request.query, &request.variables) {
            Ok(query) => query,
            Err(err) => return Some(Response::error(err)),
        };

        let root = self.root_type(query.kind());
        if let Err(err) = validate(self, root, query.selection_set()) {
            return Some(Response::error(err));
        }

        match Executor::new(self).execute(ctx, root, source, &query) {
            Ok(data) => Some(Response {
                data: Some(data),
                errors: vec![],
            }),
            Err(ExecutionError::NoUpdate) => None,
            Err(ExecutionError::Failed(err)) => Some(Response::error(err)),
        }
    }
}
