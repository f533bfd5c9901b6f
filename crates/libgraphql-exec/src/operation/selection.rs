use crate::operation::Directive;
use crate::operation::SelectionSet;
use crate::types::ParsedArguments;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

/// One selected field.
///
/// A selection keeps its raw argument object as written in the document (with
/// variables substituted). The validator decodes it with the field's
/// argument parser the first time the selection is visited and caches the
/// result; later visits, e.g. through another spread of the same fragment,
/// reuse it.
pub struct Selection {
    pub(crate) alias: String,
    pub(crate) args: Value,
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
    pub(crate) parsed_args: OnceLock<ParsedArguments>,
    pub(crate) selection_set: Option<Arc<SelectionSet>>,
}
impl Selection {
    pub(crate) fn new(
        name: String,
        alias: Option<String>,
        args: Value,
        directives: Vec<Directive>,
        selection_set: Option<Arc<SelectionSet>>,
    ) -> Self {
        Self {
            alias: alias.unwrap_or_else(|| name.clone()),
            args,
            directives,
            name,
            parsed_args: OnceLock::new(),
            selection_set,
        }
    }

    /// A selection standing for every selection in `group` (all sharing one
    /// alias), whose nested selection set concatenates theirs. It takes its
    /// field name and arguments from the first of the group.
    pub(crate) fn merged(group: &[Arc<Selection>]) -> Option<Self> {
        let first = group.first()?;
        let mut selection_set = SelectionSet::default();
        for selection in group {
            if let Some(nested) = &selection.selection_set {
                selection_set.selections.extend(nested.selections.iter().cloned());
                selection_set.fragments.extend(nested.fragments.iter().cloned());
            }
        }
        let parsed_args = OnceLock::new();
        if let Some(args) = first.parsed_args.get() {
            let _ = parsed_args.set(args.clone());
        }
        Some(Self {
            alias: first.alias.clone(),
            args: first.args.clone(),
            directives: vec![],
            name: first.name.clone(),
            parsed_args,
            selection_set: Some(Arc::new(selection_set)),
        })
    }

    /// The key this selection's result is reported under: its alias if one
    /// was given, else the field name.
    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    /// The raw argument object.
    pub fn args(&self) -> &Value {
        &self.args
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Whether this selection's arguments have been decoded.
    pub fn is_parsed(&self) -> bool {
        self.parsed_args.get().is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parsed_args(&self) -> Option<&ParsedArguments> {
        self.parsed_args.get()
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_deref()
    }
}
impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("alias", &self.alias)
            .field("name", &self.name)
            .field("args", &self.args)
            .field("directives", &self.directives)
            .field("parsed", &self.is_parsed())
            .field("selection_set", &self.selection_set)
            .finish()
    }
}
