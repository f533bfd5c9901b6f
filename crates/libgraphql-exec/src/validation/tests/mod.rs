mod fragment_tests;

use crate::operation::parse;
use crate::schema::Schema;
use crate::validation::ValidationError;
use crate::validation::validate;
use crate::value::Variables;

/// Parses `source` and validates it against its operation's root type.
fn check(schema: &Schema, source: &str) -> Result<(), ValidationError> {
    let query = parse(source, &Variables::new()).expect("query should parse");
    validate(schema, schema.root_type(query.kind()), query.selection_set())
}
