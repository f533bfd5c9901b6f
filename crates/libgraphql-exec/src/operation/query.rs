use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use std::sync::Arc;

/// A parsed query document: its single operation, with every fragment
/// spread resolved to its definition.
#[derive(Clone, Debug)]
pub struct Query {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: Arc<SelectionSet>,
}
impl Query {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
