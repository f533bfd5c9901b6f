use crate::context::Context;
use crate::error::ExecutionError;
use crate::execution::Executor;
use crate::operation::parse;
use crate::tests::fixtures;
use crate::tests::fixtures::TraceLog;
use crate::types::FieldValue;
use crate::validation::validate;
use crate::value::Variables;
use serde_json::json;

#[test]
fn each_depth_of_lazy_fields_takes_one_pass() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let query = parse(
        "{ chain(length: 2) { depth next { depth next { depth next { depth } } } } }",
        &Variables::new(),
    ).expect("query should parse");
    let root = schema.root_type(query.kind());
    validate(&schema, root, query.selection_set()).expect("query should validate");

    let (result, passes) = Executor::new(&schema)
        .execute_counting_passes(&Context::new(), root, FieldValue::Null, &query)?;
    assert_eq!(passes, 4);
    assert_eq!(
        fixtures::to_json(&result),
        json!({
            "chain": {
                "depth": 0,
                "next": {
                    "depth": 1,
                    "next": {"depth": 2, "next": null},
                },
            },
        }),
    );
    Ok(())
}

#[test]
fn query_without_lazy_fields_takes_no_pass() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let query = parse("{ nums }", &Variables::new()).expect("query should parse");
    let root = schema.root_type(query.kind());
    let (_result, passes) = Executor::new(&schema)
        .execute_counting_passes(&Context::new(), root, FieldValue::Null, &query)?;
    assert_eq!(passes, 0);
    Ok(())
}

#[test]
fn lazy_fields_run_breadth_first() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let log = TraceLog::default();
    let ctx = Context::new().with_data(log.clone());
    let result = fixtures::execute_with(
        &schema,
        &ctx,
        "{ left { next { level } } right { next { level } } }",
        &Variables::new(),
        FieldValue::Null,
    )?;

    assert_eq!(log.entries(), vec!["left0", "right0", "left1", "right1"]);
    assert_eq!(
        fixtures::to_json(&result),
        json!({"left": {"next": {"level": 1}}, "right": {"next": {"level": 1}}}),
    );
    Ok(())
}

#[test]
fn lazy_field_completed_from_another_thread() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let result = fixtures::execute(&schema, "{ slow nums }")?;
    assert_eq!(fixtures::to_json(&result), json!({"slow": 42, "nums": [1, null, 3]}));
    Ok(())
}

#[test]
fn lazy_fields_are_not_run_when_unselected() -> Result<(), ExecutionError> {
    let schema = fixtures::schema();
    let log = TraceLog::default();
    let ctx = Context::new().with_data(log.clone());
    fixtures::execute_with(
        &schema,
        &ctx,
        "{ left { level } }",
        &Variables::new(),
        FieldValue::Null,
    )?;
    assert_eq!(log.entries(), vec!["left0"]);
    Ok(())
}
