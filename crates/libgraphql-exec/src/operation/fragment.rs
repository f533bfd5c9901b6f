use crate::operation::Directive;
use crate::operation::SelectionSet;
use std::sync::Arc;

/// A fragment's selections and the type they apply to.
///
/// Inline fragments are represented as unnamed definitions; an inline
/// fragment without a type condition applies to whatever type it appears on.
#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    pub(crate) name: Option<String>,
    pub(crate) selection_set: Arc<SelectionSet>,
    pub(crate) type_condition: Option<String>,
}
impl FragmentDefinition {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

/// A use of a fragment within a selection set. Every spread of the same
/// named fragment shares one [`FragmentDefinition`].
#[derive(Clone, Debug)]
pub struct FragmentSpread {
    pub(crate) directives: Vec<Directive>,
    pub(crate) fragment: Arc<FragmentDefinition>,
}
impl FragmentSpread {
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn fragment(&self) -> &FragmentDefinition {
        &self.fragment
    }
}
