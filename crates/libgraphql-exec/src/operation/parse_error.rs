use crate::error::ErrorCode;
use crate::error::GraphQLError;
use thiserror::Error;

/// A reason a query document was rejected before validation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("same alias with different args")]
    AliasArgsConflict {
        alias: String,
    },

    #[error("same alias with different name")]
    AliasNameConflict {
        alias: String,
    },

    #[error("duplicate arg")]
    DuplicateArgument {
        argument_name: String,
    },

    #[error("duplicate fragment")]
    DuplicateFragment {
        fragment_name: String,
    },

    #[error("fragment contains itself")]
    FragmentCycle {
        cycle_path: Vec<String>,
    },

    #[error("bad int arg")]
    InvalidInt,

    #[error("only support a single query")]
    MultipleOperations,

    #[error("must have a single query")]
    NoOperation,

    #[error("required variable cannot provide a default value: ${variable_name}")]
    RequiredVariableWithDefault {
        variable_name: String,
    },

    #[error("{0}")]
    Syntax(String),

    #[error("unknown fragment")]
    UnknownFragment {
        fragment_name: String,
    },

    #[error("unused fragment")]
    UnusedFragment {
        fragment_name: String,
    },
}
impl From<ParseError> for GraphQLError {
    fn from(err: ParseError) -> Self {
        GraphQLError::new(err.to_string(), ErrorCode::InvalidArgument)
    }
}
