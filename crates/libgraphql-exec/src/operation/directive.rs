use crate::schema::ArgumentError;
use crate::value::Value;
use indexmap::IndexMap;

/// A directive annotation (`@name(arg: value)`) on a field, fragment spread,
/// or inline fragment, with variables already substituted.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl Directive {
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Evaluates `@skip` and `@include` over a node's directives.
///
/// A node is included unless `@skip(if: true)` is present or `@include` is
/// present with `if: false`. Both directives' `if` arguments are checked
/// before either is applied, so a malformed one is reported even when the
/// other would already exclude the node. Other directives are ignored.
pub(crate) fn should_include(directives: &[Directive]) -> Result<bool, ArgumentError> {
    let skip = condition(directives, "skip")?;
    let include = condition(directives, "include")?;
    Ok(!skip.unwrap_or(false) && include.unwrap_or(true))
}

fn condition(directives: &[Directive], directive_name: &str) -> Result<Option<bool>, ArgumentError> {
    let Some(directive) = directives.iter().find(|d| d.name == directive_name) else {
        return Ok(None);
    };
    match directive.args.get("if") {
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ArgumentError::new(format!("expected type Boolean, found {other}"))),
        None => Err(ArgumentError::new("required argument not provided: if")),
    }
}
