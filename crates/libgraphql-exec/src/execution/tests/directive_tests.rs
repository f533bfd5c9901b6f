use crate::error::ExecutionError;
use crate::operation::Directive;
use crate::operation::should_include;
use crate::tests::fixtures;
use crate::value::Value;
use indexmap::IndexMap;
use serde_json::json;

fn directive(name: &str, condition: Option<Value>) -> Directive {
    let mut args = IndexMap::new();
    if let Some(condition) = condition {
        args.insert("if".to_string(), condition);
    }
    Directive {
        args,
        name: name.to_string(),
    }
}

#[test]
fn skip_and_include_truth_table() {
    for skip in [None, Some(false), Some(true)] {
        for include in [None, Some(false), Some(true)] {
            let mut directives = vec![];
            if let Some(skip) = skip {
                directives.push(directive("skip", Some(Value::Bool(skip))));
            }
            if let Some(include) = include {
                directives.push(directive("include", Some(Value::Bool(include))));
            }
            let expected = !skip.unwrap_or(false) && include.unwrap_or(true);
            assert_eq!(
                should_include(&directives),
                Ok(expected),
                "skip={skip:?} include={include:?}",
            );
        }
    }
}

#[test]
fn missing_condition_is_an_error_even_when_skipped() {
    let directives = vec![
        directive("skip", Some(Value::Bool(true))),
        directive("include", None),
    ];
    let err = should_include(&directives).unwrap_err();
    assert_eq!(err.message(), "required argument not provided: if");

    let directives = vec![
        directive("skip", None),
        directive("include", Some(Value::Bool(false))),
    ];
    let err = should_include(&directives).unwrap_err();
    assert_eq!(err.message(), "required argument not provided: if");
}

#[test]
fn non_boolean_condition_is_an_error() {
    let directives = vec![directive("include", Some(Value::Int(1)))];
    let err = should_include(&directives).unwrap_err();
    assert_eq!(err.message(), "expected type Boolean, found 1");
}

#[test]
fn unrelated_directives_are_ignored() {
    let directives = vec![directive("deprecated", None)];
    assert_eq!(should_include(&directives), Ok(true));
}

#[test]
fn directives_filter_fields_and_fragments() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let query = r#"
        {
            a: mirror(value: 1) @skip(if: true)
            b: mirror(value: 2) @include(if: true)
            c: mirror(value: 3) @include(if: false)
            ... on Query @skip(if: true) { d: mirror(value: 4) }
            ...Extra @include(if: true)
        }
        fragment Extra on Query { e: mirror(value: 5) }
    "#;
    let result = fixtures::execute(&schema, query)?;
    assert_eq!(fixtures::to_json(&result), json!({"b": -2, "e": -5}));
    Ok(())
}
