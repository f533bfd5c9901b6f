use crate::operation::ParseError;
use crate::operation::parse;
use crate::value::Variables;

#[test]
fn same_alias_different_field_is_rejected() {
    let err = parse("{ a: x a: y }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::AliasNameConflict {
        alias: "a".to_string(),
    });
    assert_eq!(err.to_string(), "same alias with different name");
}

#[test]
fn same_alias_different_args_is_rejected() {
    let err = parse("{ a: x(v: 1) a: x(v: 2) }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::AliasArgsConflict {
        alias: "a".to_string(),
    });
    assert_eq!(err.to_string(), "same alias with different args");
}

#[test]
fn identical_repeated_selections_are_allowed() -> Result<(), ParseError> {
    parse("{ x(v: 1) { a } x(v: 1) { b } }", &Variables::new())?;
    Ok(())
}

#[test]
fn conflict_through_fragment_is_rejected() {
    let err = parse(
        r#"
        { x: a ...F }
        fragment F on Query { x: b }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert!(matches!(err, ParseError::AliasNameConflict { .. }));
}

#[test]
fn conflict_in_nested_selection_set_is_rejected() {
    let err = parse("{ user { n: name n: email } }", &Variables::new()).unwrap_err();
    assert!(matches!(err, ParseError::AliasNameConflict { .. }));
}

#[test]
fn same_alias_at_different_levels_is_allowed() -> Result<(), ParseError> {
    parse("{ a: user { a: name } }", &Variables::new())?;
    Ok(())
}
