use crate::operation::OperationKind;
use crate::operation::ParseError;
use crate::operation::parse;
use crate::value::Value;
use crate::value::Variables;

#[test]
fn anonymous_selection_set_is_a_query() -> Result<(), ParseError> {
    let query = parse("{ mirror(value: 2) }", &Variables::new())?;
    assert_eq!(query.kind(), OperationKind::Query);
    assert_eq!(query.name(), None);

    let selections = query.selection_set().selections();
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0].name(), "mirror");
    assert_eq!(selections[0].alias(), "mirror");
    assert_eq!(
        selections[0].args().as_object().and_then(|args| args.get("value")),
        Some(&Value::Int(2)),
    );
    assert!(selections[0].selection_set().is_none());
    Ok(())
}

#[test]
fn named_operations_keep_their_kind_and_name() -> Result<(), ParseError> {
    let query = parse("mutation Bump { bump }", &Variables::new())?;
    assert_eq!(query.kind(), OperationKind::Mutation);
    assert_eq!(query.name(), Some("Bump"));

    let query = parse("subscription Watch { events { id } }", &Variables::new())?;
    assert_eq!(query.kind(), OperationKind::Subscription);
    assert_eq!(query.name(), Some("Watch"));
    Ok(())
}

#[test]
fn alias_is_kept_separately_from_field_name() -> Result<(), ParseError> {
    let query = parse("{ first: user(id: 1) { name } }", &Variables::new())?;
    let selection = &query.selection_set().selections()[0];
    assert_eq!(selection.alias(), "first");
    assert_eq!(selection.name(), "user");
    assert!(selection.selection_set().is_some());
    Ok(())
}

#[test]
fn variables_are_substituted() -> Result<(), ParseError> {
    let mut variables = Variables::new();
    variables.insert("v".to_string(), Value::Int(7));

    let query = parse("query Q($v: Int) { mirror(value: $v) }", &variables)?;
    let args = query.selection_set().selections()[0].args();
    assert_eq!(args.as_object().and_then(|args| args.get("value")), Some(&Value::Int(7)));
    Ok(())
}

#[test]
fn missing_variable_becomes_null() -> Result<(), ParseError> {
    let query = parse("query Q($v: Int) { mirror(value: $v) }", &Variables::new())?;
    let args = query.selection_set().selections()[0].args();
    assert_eq!(args.as_object().and_then(|args| args.get("value")), Some(&Value::Null));
    Ok(())
}

#[test]
fn variable_default_applies_when_missing_or_null() -> Result<(), ParseError> {
    let source = "query Q($v: Int = 5) { mirror(value: $v) }";

    let query = parse(source, &Variables::new())?;
    let args = query.selection_set().selections()[0].args();
    assert_eq!(args.as_object().and_then(|args| args.get("value")), Some(&Value::Int(5)));

    let mut variables = Variables::new();
    variables.insert("v".to_string(), Value::Null);
    let query = parse(source, &variables)?;
    let args = query.selection_set().selections()[0].args();
    assert_eq!(args.as_object().and_then(|args| args.get("value")), Some(&Value::Int(5)));

    // The caller's mapping is left alone.
    assert_eq!(variables.get("v"), Some(&Value::Null));
    Ok(())
}

#[test]
fn supplied_variable_wins_over_default() -> Result<(), ParseError> {
    let mut variables = Variables::new();
    variables.insert("v".to_string(), Value::Int(9));
    let query = parse("query Q($v: Int = 5) { mirror(value: $v) }", &variables)?;
    let args = query.selection_set().selections()[0].args();
    assert_eq!(args.as_object().and_then(|args| args.get("value")), Some(&Value::Int(9)));
    Ok(())
}

#[test]
fn non_null_variable_with_default_is_rejected() {
    let err = parse("query Q($v: Int! = 5) { mirror(value: $v) }", &Variables::new())
        .unwrap_err();
    assert_eq!(err, ParseError::RequiredVariableWithDefault {
        variable_name: "v".to_string(),
    });
    assert_eq!(err.to_string(), "required variable cannot provide a default value: $v");
}

#[test]
fn list_and_object_literals_are_converted() -> Result<(), ParseError> {
    let mut variables = Variables::new();
    variables.insert("name".to_string(), Value::from("bob"));
    let query = parse(
        r#"{ search(filter: {tags: ["a", "b"], owner: $name, level: HIGH, ratio: 0.5, on: true}) }"#,
        &variables,
    )?;
    let args = query.selection_set().selections()[0].args();
    let filter = args.as_object()
        .and_then(|args| args.get("filter"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    assert_eq!(
        filter.get("tags"),
        Some(&Value::List(vec![Value::from("a"), Value::from("b")])),
    );
    assert_eq!(filter.get("owner"), Some(&Value::from("bob")));
    assert_eq!(filter.get("level"), Some(&Value::Enum("HIGH".to_string())));
    assert_eq!(filter.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(filter.get("on"), Some(&Value::Bool(true)));
    Ok(())
}

#[test]
fn directives_are_recorded() -> Result<(), ParseError> {
    let query = parse("{ a @skip(if: true) @include(if: false) }", &Variables::new())?;
    let directives = query.selection_set().selections()[0].directives();
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].name(), "skip");
    assert_eq!(directives[0].args().get("if"), Some(&Value::Bool(true)));
    assert_eq!(directives[1].name(), "include");
    assert_eq!(directives[1].args().get("if"), Some(&Value::Bool(false)));
    Ok(())
}

#[test]
fn inline_fragments_become_unnamed_definitions() -> Result<(), ParseError> {
    let query = parse("{ pet { ... on Dog { bark } ... { name } } }", &Variables::new())?;
    let pet = query.selection_set().selections()[0].selection_set()
        .cloned()
        .unwrap_or_default();
    let fragments = pet.fragments();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].fragment().name(), None);
    assert_eq!(fragments[0].fragment().type_condition(), Some("Dog"));
    assert_eq!(fragments[1].fragment().type_condition(), None);
    Ok(())
}

#[test]
fn repeated_spreads_share_one_definition() -> Result<(), ParseError> {
    let query = parse(
        r#"
        { a { ...F } b { ...F } }
        fragment F on T { x }
        "#,
        &Variables::new(),
    )?;
    let selections = query.selection_set().selections();
    let first = selections[0].selection_set()
        .map(|set| std::ptr::from_ref(set.fragments()[0].fragment()));
    let second = selections[1].selection_set()
        .map(|set| std::ptr::from_ref(set.fragments()[0].fragment()));
    assert!(first.is_some());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn syntax_errors_are_reported() {
    let err = parse("{ a ", &Variables::new()).unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)));
}

#[test]
fn document_without_operation_is_rejected() {
    let err = parse("fragment F on T { x }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::NoOperation);
    assert_eq!(err.to_string(), "must have a single query");
}

#[test]
fn document_with_two_operations_is_rejected() {
    let err = parse("query A { a } query B { b }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::MultipleOperations);
    assert_eq!(err.to_string(), "only support a single query");
}

#[test]
fn duplicate_argument_is_rejected() {
    let err = parse("{ a(x: 1, x: 2) }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::DuplicateArgument {
        argument_name: "x".to_string(),
    });
}
