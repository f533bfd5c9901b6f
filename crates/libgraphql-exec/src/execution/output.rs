use crate::operation::SelectionSet;
use crate::types::Thunk;
use crate::types::TypeRef;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A result tree under construction.
///
/// `Pending` marks the position of a lazy field whose computation has not
/// run yet; [`Executor`](crate::execution::Executor) replaces every one of
/// them before the tree is turned into a [`Value`].
pub(crate) enum Output {
    List(Vec<Output>),
    Object(IndexMap<String, Output>),
    Pending(Pending),
    Value(Value),
}
impl Output {
    pub(crate) fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::List(items) => Value::List(items.into_iter().map(Output::into_value).collect()),
            Self::Object(fields) => Value::Object(
                fields.into_iter()
                    .map(|(key, output)| (key, output.into_value()))
                    .collect(),
            ),
            Self::Pending(_) => Value::Null,
            Self::Value(value) => value,
        }
    }
}
impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Object(fields) => f.debug_map().entries(fields).finish(),
            Self::Pending(_) => f.write_str("Pending"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// A lazy field's computation, with what is needed to carry on executing
/// its value once the computation has run.
pub(crate) struct Pending {
    pub(crate) selection_set: Option<Arc<SelectionSet>>,
    pub(crate) thunk: Thunk,
    pub(crate) type_ref: TypeRef,
}
