use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable status codes attached to every reported error.
///
/// The names follow the gRPC status code set so that errors originating in
/// RPC-backed resolvers can be surfaced without translation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum ErrorCode {
    Aborted,
    AlreadyExists,
    Cancelled,
    DataLoss,
    DeadlineExceeded,
    FailedPrecondition,
    Internal,
    InvalidArgument,
    NotFound,
    OutOfRange,
    PermissionDenied,
    ResourceExhausted,
    Unauthenticated,
    Unavailable,
    Unimplemented,
    #[default]
    Unknown,
}
impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aborted => "Aborted",
            Self::AlreadyExists => "AlreadyExists",
            Self::Cancelled => "Cancelled",
            Self::DataLoss => "DataLoss",
            Self::DeadlineExceeded => "DeadlineExceeded",
            Self::FailedPrecondition => "FailedPrecondition",
            Self::Internal => "Internal",
            Self::InvalidArgument => "InvalidArgument",
            Self::NotFound => "NotFound",
            Self::OutOfRange => "OutOfRange",
            Self::PermissionDenied => "PermissionDenied",
            Self::ResourceExhausted => "ResourceExhausted",
            Self::Unauthenticated => "Unauthenticated",
            Self::Unavailable => "Unavailable",
            Self::Unimplemented => "Unimplemented",
            Self::Unknown => "Unknown",
        }
    }
}
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step on the path from the query root to the site of an error: either
/// the output alias of a selection or the index of a list element.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}
impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}
impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FieldErrorKind {
    Failure,
    NoUpdate,
}

/// The error type returned by field resolvers.
///
/// Resolvers may return any error convertible into a `FieldError`; strings
/// and [`anyhow::Error`] convert with [`ErrorCode::Unknown`].
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    code: ErrorCode,
    kind: FieldErrorKind,
    message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Unknown,
            kind: FieldErrorKind::Failure,
            message: message.into(),
        }
    }

    /// The suppress-update sentinel. A subscription resolver returns this to
    /// signal that the current event produced nothing worth sending; it
    /// reaches the caller as [`ExecutionError::NoUpdate`].
    pub fn no_update() -> Self {
        Self {
            code: ErrorCode::Unknown,
            kind: FieldErrorKind::NoUpdate,
            message: "no update".to_string(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn is_no_update(&self) -> bool {
        self.kind == FieldErrorKind::NoUpdate
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
impl From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
impl From<anyhow::Error> for FieldError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<FieldError>() {
            Ok(field_err) => field_err,
            Err(err) => Self::new(format!("{err:#}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct ErrorExtensions {
    code: ErrorCode,
}

/// A structured, user-facing error: a human-readable message, a
/// machine-readable [`ErrorCode`], and the path from the query root to the
/// selection (or list element) where the error occurred.
#[derive(Clone, Debug, Error, PartialEq, Serialize)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,
    extensions: ErrorExtensions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<PathSegment>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            extensions: ErrorExtensions { code },
            path: vec![],
        }
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.extensions.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn path(&self) -> &[PathSegment] {
        self.path.as_slice()
    }

    /// Prepends `segment` to this error's path.
    pub(crate) fn nest(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }
}

/// An error produced while executing a validated query.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    /// See [`FieldError::no_update`]. Dispatchers must drop the response
    /// rather than report this as a failure.
    #[error("no update")]
    NoUpdate,

    #[error(transparent)]
    Failed(GraphQLError),
}
impl ExecutionError {
    pub(crate) fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self::Failed(GraphQLError::new(message, code))
    }

    pub fn is_no_update(&self) -> bool {
        matches!(self, Self::NoUpdate)
    }

    /// The structured error, or `None` for the suppress-update sentinel.
    pub fn graphql_error(&self) -> Option<&GraphQLError> {
        match self {
            Self::NoUpdate => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Prepends a path segment as the error propagates toward the root. The
    /// suppress-update sentinel passes through untouched.
    pub(crate) fn nest(self, segment: impl Into<PathSegment>) -> Self {
        match self {
            Self::NoUpdate => Self::NoUpdate,
            Self::Failed(err) => Self::Failed(err.nest(segment.into())),
        }
    }
}
impl From<FieldError> for ExecutionError {
    fn from(err: FieldError) -> Self {
        if err.is_no_update() {
            Self::NoUpdate
        } else {
            Self::Failed(GraphQLError::new(err.message, err.code))
        }
    }
}
