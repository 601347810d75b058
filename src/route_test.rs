use super::*;

#[test]
fn new_binds_pattern_name_and_view() {
    let route = Route::new("/answers/:task_number", "answers", "TestAnswers").expect("route");
    assert_eq!(route.pattern().as_str(), "/answers/:task_number");
    assert_eq!(route.name(), "answers");
    assert_eq!(*route.view(), "TestAnswers");
}

#[test]
fn props_forwarding_is_off_by_default() {
    let route = Route::new("/", "home", "TestPage").expect("route");
    assert!(!route.props_from_params());
}

#[test]
fn with_props_from_params_enables_forwarding() {
    let route = Route::new("/answers/:task_number", "answers", "TestAnswers")
        .expect("route")
        .with_props_from_params();
    assert!(route.props_from_params());
}

#[test]
fn new_rejects_invalid_pattern() {
    let err = Route::new("answers", "answers", "TestAnswers").expect_err("should fail");
    assert!(matches!(err, PatternError::MissingLeadingSlash(_)));
}

#[test]
fn spec_deserializes_with_props_flag() {
    let spec: RouteSpec = serde_json::from_str(
        r#"{"path": "/answers/:task_number", "name": "answers", "view": "TestAnswers", "props": true}"#,
    )
    .expect("deserialize");
    assert_eq!(spec.path, "/answers/:task_number");
    assert_eq!(spec.name, "answers");
    assert_eq!(spec.view, "TestAnswers");
    assert!(spec.props_from_params);
}

#[test]
fn spec_props_flag_defaults_to_false() {
    let spec: RouteSpec =
        serde_json::from_str(r#"{"path": "/", "name": "home", "view": "TestPage"}"#)
            .expect("deserialize");
    assert!(!spec.props_from_params);
}

#[test]
fn spec_round_trips_through_json() {
    let spec = RouteSpec {
        path: "/answers/:task_number".to_owned(),
        name: "answers".to_owned(),
        view: "TestAnswers".to_owned(),
        props_from_params: true,
    };
    let json = serde_json::to_string(&spec).expect("serialize");
    let back: RouteSpec = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, spec);
}
