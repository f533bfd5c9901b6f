use crate::operation::FragmentSpread;
use crate::operation::Selection;
use std::sync::Arc;

/// The fields and fragments selected at one level of a query.
///
/// Field selections and fragment spreads (named or inline) are kept apart,
/// each in document order.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    pub(crate) fragments: Vec<FragmentSpread>,
    pub(crate) selections: Vec<Arc<Selection>>,
}
impl SelectionSet {
    pub fn fragments(&self) -> &[FragmentSpread] {
        &self.fragments
    }

    pub fn selections(&self) -> &[Arc<Selection>] {
        &self.selections
    }
}
