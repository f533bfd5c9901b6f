mod alias_conflicts;
mod directive;
mod fragment;
mod fragment_graph;
mod operation_kind;
mod parse_error;
mod parser;
mod query;
mod selection;
mod selection_set;

pub use directive::Directive;
pub(crate) use directive::should_include;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use operation_kind::OperationKind;
pub use parse_error::ParseError;
pub use parser::parse;
pub use query::Query;
pub use selection::Selection;
pub use selection_set::SelectionSet;

#[cfg(test)]
mod tests;
