use crate::error::ErrorCode;
use crate::error::PathSegment;
use crate::tests::fixtures;
use rayon::prelude::*;
use serde_json::json;

#[test]
fn panicking_resolver_becomes_internal_error() {
    let schema = fixtures::schema();
    let err = fixtures::execute(&schema, "{ nums boom }").unwrap_err();
    let err = err.graphql_error().cloned().expect("a reported error");
    assert!(
        err.message().starts_with("graphql: panic: kaboom"),
        "unexpected message: {}",
        err.message(),
    );
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(err.path(), &[PathSegment::Key("boom".to_string())]);
}

#[test]
fn panics_stay_within_their_own_execution() {
    let schema = fixtures::schema();
    let outcomes: Vec<(bool, bool)> = (0..32)
        .into_par_iter()
        .map(|idx| {
            let panics = idx % 2 == 0;
            let query = if panics { "{ boom }" } else { "{ mirror(value: 7) }" };
            (panics, fixtures::execute(&schema, query).is_ok())
        })
        .collect();

    for (panics, succeeded) in outcomes {
        assert_eq!(succeeded, !panics);
    }

    let result = fixtures::execute(&schema, "{ mirror(value: 7) }").expect("schema still usable");
    assert_eq!(fixtures::to_json(&result), json!({"mirror": -7}));
}
