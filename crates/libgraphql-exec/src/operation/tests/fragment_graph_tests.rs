use crate::operation::ParseError;
use crate::operation::parse;
use crate::value::Variables;

#[test]
fn fragment_spreading_itself_is_a_cycle() {
    let err = parse(
        r#"
        { a { ...F } }
        fragment F on T { x ...F }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert_eq!(err, ParseError::FragmentCycle {
        cycle_path: vec!["F".to_string(), "F".to_string()],
    });
    assert_eq!(err.to_string(), "fragment contains itself");
}

#[test]
fn transitive_cycle_is_detected() {
    let err = parse(
        r#"
        { a { ...A } }
        fragment A on T { x ...B }
        fragment B on T { y { ...C } }
        fragment C on T { z ...A }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert_eq!(err, ParseError::FragmentCycle {
        cycle_path: vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "A".to_string(),
        ],
    });
}

#[test]
fn cycle_through_inline_fragment_is_detected() {
    let err = parse(
        r#"
        { a { ...A } }
        fragment A on T { ... on T { ...A } }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert!(matches!(err, ParseError::FragmentCycle { .. }));
}

#[test]
fn diamond_is_not_a_cycle() -> Result<(), ParseError> {
    parse(
        r#"
        { a { ...A ...B } }
        fragment A on T { x ...C }
        fragment B on T { y ...C }
        fragment C on T { z }
        "#,
        &Variables::new(),
    )?;
    Ok(())
}

#[test]
fn unused_fragment_is_rejected() {
    let err = parse(
        r#"
        { a { x } }
        fragment Unused on T { x }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert_eq!(err, ParseError::UnusedFragment {
        fragment_name: "Unused".to_string(),
    });
    assert_eq!(err.to_string(), "unused fragment");
}

#[test]
fn fragment_only_reachable_from_unused_fragment_is_unused() {
    let err = parse(
        r#"
        { a { x } }
        fragment A on T { ...B }
        fragment B on T { x }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert!(matches!(err, ParseError::UnusedFragment { .. }));
}

#[test]
fn unknown_fragment_is_rejected() {
    let err = parse("{ a { ...Missing } }", &Variables::new()).unwrap_err();
    assert_eq!(err, ParseError::UnknownFragment {
        fragment_name: "Missing".to_string(),
    });
}

#[test]
fn duplicate_fragment_is_rejected() {
    let err = parse(
        r#"
        { a { ...F } }
        fragment F on T { x }
        fragment F on T { y }
        "#,
        &Variables::new(),
    ).unwrap_err();
    assert_eq!(err, ParseError::DuplicateFragment {
        fragment_name: "F".to_string(),
    });
}
