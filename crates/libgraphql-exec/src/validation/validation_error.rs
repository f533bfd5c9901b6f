use crate::error::ErrorCode;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use thiserror::Error;

/// Why a selection set does not fit the type it was validated against.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationErrorKind {
    #[error("enum field must have no selections")]
    EnumWithSelection,

    #[error("fragment on \"{type_condition}\" cannot apply to \"{type_name}\"")]
    InapplicableFragment {
        type_condition: String,
        type_name: String,
    },

    #[error("error parsing args for \"{field_name}\": {message}")]
    InvalidArguments {
        field_name: String,
        message: String,
    },

    #[error("{message}")]
    InvalidDirective {
        message: String,
    },

    #[error("object field must have selections")]
    MissingSelection,

    #[error("scalar field must have no selections")]
    ScalarWithSelection,

    #[error("error parsing args for \"__typename\": no args expected")]
    TypenameWithArguments,

    #[error("scalar field \"__typename\" must have no selection")]
    TypenameWithSelection,

    #[error("unknown field \"{field_name}\"")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("input type \"{type_name}\" cannot be selected")]
    UnselectableType {
        type_name: String,
    },
}

/// A [`ValidationErrorKind`] along with the path of selection aliases from
/// the validated root to the offending selection.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    path: Vec<PathSegment>,
}
impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            path: vec![],
        }
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &[PathSegment] {
        self.path.as_slice()
    }

    pub(crate) fn nest(mut self, alias: &str) -> Self {
        self.path.insert(0, PathSegment::from(alias));
        self
    }
}
impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
impl From<ValidationError> for GraphQLError {
    fn from(err: ValidationError) -> Self {
        GraphQLError::new(err.kind.to_string(), ErrorCode::InvalidArgument)
            .with_path(err.path)
    }
}
