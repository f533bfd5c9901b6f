use crate::operation::ParseError;
use graphql_parser::query as ast;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ParseError>;

pub(crate) type FragmentDefs<'d, 'a> = IndexMap<String, &'d ast::FragmentDefinition<'a, String>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VisitState {
    Visiting,
    Visited,
}

/// Checks how a document's fragments spread one another: every spread must
/// name a defined fragment, no fragment may (transitively) spread itself, and
/// every fragment must be reachable from the operation.
///
/// These checks run on the syntax tree, before any fragment is translated,
/// so that translation can assume the fragment graph is acyclic.
pub(crate) struct FragmentGraph<'g, 'd, 'a> {
    definitions: &'g FragmentDefs<'d, 'a>,
    path: Vec<String>,
    states: HashMap<String, VisitState>,
}
impl<'g, 'd, 'a> FragmentGraph<'g, 'd, 'a> {
    pub(crate) fn new(definitions: &'g FragmentDefs<'d, 'a>) -> Self {
        Self {
            definitions,
            path: vec![],
            states: HashMap::new(),
        }
    }

    pub(crate) fn check(mut self, root: &ast::SelectionSet<'a, String>) -> Result<()> {
        self.check_references(root)?;
        for definition in self.definitions.values() {
            self.check_references(&definition.selection_set)?;
        }

        self.visit_selection_set(root)?;

        match self.definitions.keys().find(|name| {
            self.states.get(name.as_str()) != Some(&VisitState::Visited)
        }) {
            Some(unused) => Err(ParseError::UnusedFragment {
                fragment_name: unused.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_references(&self, selection_set: &ast::SelectionSet<'a, String>) -> Result<()> {
        for item in &selection_set.items {
            match item {
                ast::Selection::Field(field) =>
                    self.check_references(&field.selection_set)?,

                ast::Selection::FragmentSpread(spread) => {
                    if !self.definitions.contains_key(&spread.fragment_name) {
                        return Err(ParseError::UnknownFragment {
                            fragment_name: spread.fragment_name.clone(),
                        });
                    }
                },

                ast::Selection::InlineFragment(inline) =>
                    self.check_references(&inline.selection_set)?,
            }
        }
        Ok(())
    }

    fn visit_selection_set(&mut self, selection_set: &ast::SelectionSet<'a, String>) -> Result<()> {
        for item in &selection_set.items {
            match item {
                ast::Selection::Field(field) =>
                    self.visit_selection_set(&field.selection_set)?,

                ast::Selection::FragmentSpread(spread) =>
                    self.visit_fragment(&spread.fragment_name)?,

                ast::Selection::InlineFragment(inline) =>
                    self.visit_selection_set(&inline.selection_set)?,
            }
        }
        Ok(())
    }

    fn visit_fragment(&mut self, fragment_name: &str) -> Result<()> {
        match self.states.get(fragment_name) {
            Some(VisitState::Visited) => return Ok(()),
            Some(VisitState::Visiting) => {
                let cycle_start = self.path.iter()
                    .position(|name| name == fragment_name)
                    .unwrap_or(0);
                let mut cycle_path = self.path[cycle_start..].to_vec();
                cycle_path.push(fragment_name.to_string());
                return Err(ParseError::FragmentCycle { cycle_path });
            },
            None => (),
        }

        let definition = self.definitions.get(fragment_name)
            .copied()
            .ok_or_else(|| ParseError::UnknownFragment {
                fragment_name: fragment_name.to_string(),
            })?;

        self.states.insert(fragment_name.to_string(), VisitState::Visiting);
        self.path.push(fragment_name.to_string());
        self.visit_selection_set(&definition.selection_set)?;
        self.path.pop();
        self.states.insert(fragment_name.to_string(), VisitState::Visited);
        Ok(())
    }
}
