use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::should_include;
use crate::schema::ArgumentError;
use crate::schema::Schema;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Collects the selections that apply to an object of type `object_name`,
/// one per output alias.
///
/// Fragment spreads are expanded (each fragment at most once) when their
/// directives include them and their type condition applies to the object.
/// Selections excluded by their own directives are dropped. When several
/// selections with nested selection sets share an alias, they are merged
/// into one whose nested selection set holds all of theirs; that set is in
/// turn flattened when the nested value is executed.
pub(crate) fn flatten(
    schema: &Schema,
    object_name: &str,
    selection_set: &SelectionSet,
) -> Result<Vec<Arc<Selection>>, ArgumentError> {
    let mut collector = Collector {
        groups: IndexMap::new(),
        object_name,
        schema,
        visited: HashSet::new(),
    };
    collector.collect(selection_set)?;

    Ok(collector.groups.into_values()
        .filter_map(|group| match group.as_slice() {
            [single] => Some(single.clone()),
            [first, ..] if first.selection_set.is_none() => Some(first.clone()),
            _ => Selection::merged(&group).map(Arc::new),
        })
        .collect())
}

struct Collector<'c> {
    groups: IndexMap<String, Vec<Arc<Selection>>>,
    object_name: &'c str,
    schema: &'c Schema,
    visited: HashSet<*const SelectionSet>,
}
impl Collector<'_> {
    fn collect(&mut self, selection_set: &SelectionSet) -> Result<(), ArgumentError> {
        if !self.visited.insert(selection_set as *const SelectionSet) {
            return Ok(());
        }

        for selection in &selection_set.selections {
            if should_include(&selection.directives)? {
                self.groups.entry(selection.alias.clone())
                    .or_default()
                    .push(selection.clone());
            }
        }

        for spread in &selection_set.fragments {
            if !should_include(&spread.directives)? {
                continue;
            }
            let fragment = &spread.fragment;
            if self.schema.fragment_applies(fragment.type_condition(), self.object_name) {
                self.collect(&fragment.selection_set)?;
            }
        }
        Ok(())
    }
}
