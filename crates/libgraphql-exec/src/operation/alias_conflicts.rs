use crate::operation::FragmentDefinition;
use crate::operation::ParseError;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ParseError>;

/// Rejects selection sets in which two selections reported under the same
/// key (directly or through fragment spreads) name different fields or pass
/// different arguments.
pub(crate) fn check_alias_conflicts(selection_set: &SelectionSet) -> Result<()> {
    check_level(selection_set, &mut HashSet::new())
}

fn check_level(
    selection_set: &SelectionSet,
    visited: &mut HashSet<*const SelectionSet>,
) -> Result<()> {
    if !visited.insert(selection_set as *const SelectionSet) {
        return Ok(());
    }

    collect_siblings(selection_set, &mut HashMap::new(), &mut HashSet::new())?;

    for selection in &selection_set.selections {
        if let Some(nested) = &selection.selection_set {
            check_level(nested, visited)?;
        }
    }
    for spread in &selection_set.fragments {
        check_level(&spread.fragment.selection_set, visited)?;
    }
    Ok(())
}

fn collect_siblings<'s>(
    selection_set: &'s SelectionSet,
    by_alias: &mut HashMap<&'s str, &'s Selection>,
    expanded: &mut HashSet<*const FragmentDefinition>,
) -> Result<()> {
    for selection in &selection_set.selections {
        match by_alias.get(selection.alias.as_str()) {
            Some(other) if other.name != selection.name =>
                return Err(ParseError::AliasNameConflict {
                    alias: selection.alias.clone(),
                }),

            Some(other) if other.args != selection.args =>
                return Err(ParseError::AliasArgsConflict {
                    alias: selection.alias.clone(),
                }),

            Some(_) => (),

            None => {
                by_alias.insert(selection.alias.as_str(), selection.as_ref());
            },
        }
    }

    for spread in &selection_set.fragments {
        if expanded.insert(Arc::as_ptr(&spread.fragment)) {
            collect_siblings(&spread.fragment.selection_set, by_alias, expanded)?;
        }
    }
    Ok(())
}
