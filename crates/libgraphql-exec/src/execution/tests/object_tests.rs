use crate::context::Context;
use crate::error::ErrorCode;
use crate::error::ExecutionError;
use crate::error::PathSegment;
use crate::schema::SubscriptionEvent;
use crate::tests::fixtures;
use crate::types::FieldValue;
use crate::value::Value;
use crate::value::Variables;
use serde_json::json;
use std::time::Duration;

#[test]
fn scalar_argument_round_trips() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ mirror(value: 2) }")?;
    assert_eq!(fixtures::to_json(&result), json!({"mirror": -2}));
    Ok(())
}

#[test]
fn scalar_argument_from_variable_round_trips() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let mut variables = Variables::new();
    variables.insert("v".to_string(), Value::Int(2));
    let result = fixtures::execute_with(
        &schema,
        &Context::new(),
        "query Mirror($v: Int) { mirror(value: $v) }",
        &variables,
        FieldValue::Null,
    )?;
    assert_eq!(fixtures::to_json(&result), json!({"mirror": -2}));
    Ok(())
}

#[test]
fn enum_value_is_echoed_by_name() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    for name in ["LOW", "HIGH"] {
        let result = fixtures::execute(&schema, &format!("{{ echo(level: {name}) }}"))?;
        assert_eq!(fixtures::to_json(&result), json!({"echo": name}));
    }
    Ok(())
}

#[test]
fn custom_scalar_is_serialized() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ now a: after(at: 5) b: after }")?;
    assert_eq!(fixtures::to_json(&result), json!({"now": 1000, "a": 5, "b": null}));
    Ok(())
}

#[test]
fn aliases_and_typename_are_reported() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(
        &schema,
        "{ kind: __typename low: mirror(value: 1) high: mirror(value: 10) }",
    )?;
    assert_eq!(
        fixtures::to_json(&result),
        json!({"kind": "Query", "low": -1, "high": -10}),
    );
    Ok(())
}

#[test]
fn output_keeps_selection_order() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ b: mirror(value: 1) a: mirror(value: 2) }")?;
    let keys: Vec<&str> = result.as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["b", "a"]);
    Ok(())
}

#[test]
fn list_elements_keep_their_nulls() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ nums maybeDogs { name } }")?;
    assert_eq!(
        fixtures::to_json(&result),
        json!({
            "nums": [1, null, 3],
            "maybeDogs": [{"name": "Rex"}, null],
        }),
    );
    Ok(())
}

#[test]
fn missing_list_is_empty() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ noNums }")?;
    assert_eq!(fixtures::to_json(&result), json!({"noNums": []}));
    Ok(())
}

#[test]
fn key_field_is_always_reported() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ user { name } }")?;
    assert_eq!(
        fixtures::to_json(&result),
        json!({"user": {"name": "ann", "__key": "u1"}}),
    );
    Ok(())
}

#[test]
fn resolver_error_carries_path_through_list() {
    let schema = fixtures::schema();
    let err = fixtures::execute(&schema, "{ items { id check } }").unwrap_err();
    let err = err.graphql_error().cloned().expect("a reported error");
    assert_eq!(err.message(), "item 2 failed");
    assert_eq!(err.path(), &[
        PathSegment::Key("items".to_string()),
        PathSegment::Index(1),
        PathSegment::Key("check".to_string()),
    ]);
}

#[test]
fn first_error_discards_sibling_results() {
    let schema = fixtures::schema();
    let err = fixtures::execute(&schema, "{ a: mirror(value: 1) fail b: mirror(value: 2) }")
        .unwrap_err();
    let err = err.graphql_error().cloned().expect("a reported error");
    assert_eq!(err.message(), "resolver failed");
    assert_eq!(err.path(), &[PathSegment::Key("fail".to_string())]);
}

#[test]
fn subscription_resolves_against_event() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute_with(
        &schema,
        &Context::new(),
        "subscription { payload }",
        &Variables::new(),
        FieldValue::object(SubscriptionEvent::new(b"hello".to_vec())),
    )?;
    assert_eq!(fixtures::to_json(&result), json!({"payload": "hello"}));
    Ok(())
}

#[test]
fn no_update_passes_through_unnested() {
    let schema = fixtures::schema();
    let err = fixtures::execute_with(
        &schema,
        &Context::new(),
        "subscription { payload quiet }",
        &Variables::new(),
        FieldValue::object(SubscriptionEvent::new(b"hello".to_vec())),
    ).unwrap_err();
    assert!(err.is_no_update());
    assert_eq!(err, ExecutionError::NoUpdate);
}

#[test]
fn cancelled_context_stops_execution() {
    let schema = fixtures::schema();
    let ctx = Context::new();
    ctx.cancel();
    let err = fixtures::execute_with(
        &schema,
        &ctx,
        "{ mirror(value: 1) }",
        &Variables::new(),
        FieldValue::Null,
    ).unwrap_err();
    assert_eq!(err.graphql_error().map(|err| err.code()), Some(ErrorCode::Cancelled));
}

#[test]
fn expired_deadline_stops_execution() {
    let schema = fixtures::schema();
    let ctx = Context::new().with_timeout(Duration::ZERO);
    let err = fixtures::execute_with(
        &schema,
        &ctx,
        "{ mirror(value: 1) }",
        &Variables::new(),
        FieldValue::Null,
    ).unwrap_err();
    assert_eq!(
        err.graphql_error().map(|err| err.code()),
        Some(ErrorCode::DeadlineExceeded),
    );
}
