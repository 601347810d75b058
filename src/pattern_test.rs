use std::cmp::Ordering;

use super::*;

#[test]
fn parses_root_pattern() {
    let pattern = PathPattern::parse("/").expect("parse");
    assert!(pattern.is_root());
    assert!(pattern.segments().is_empty());
    assert_eq!(pattern.to_string(), "/");
}

#[test]
fn parses_static_segments() {
    let pattern = PathPattern::parse("/answers/latest").expect("parse");
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Static("answers".to_owned()),
            Segment::Static("latest".to_owned()),
        ]
    );
}

#[test]
fn parses_dynamic_segment() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Static("answers".to_owned()),
            Segment::Param("task_number".to_owned()),
        ]
    );
    assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["task_number"]);
}

#[test]
fn rejects_missing_leading_slash() {
    let err = PathPattern::parse("answers").expect_err("should fail");
    assert!(matches!(err, PatternError::MissingLeadingSlash(_)));
}

#[test]
fn rejects_empty_segment() {
    let err = PathPattern::parse("/answers//3").expect_err("should fail");
    assert!(matches!(err, PatternError::EmptySegment(_)));
}

#[test]
fn rejects_trailing_slash() {
    let err = PathPattern::parse("/answers/").expect_err("should fail");
    assert!(matches!(err, PatternError::EmptySegment(_)));
}

#[test]
fn rejects_unnamed_param() {
    let err = PathPattern::parse("/answers/:").expect_err("should fail");
    assert!(matches!(err, PatternError::EmptyParamName(_)));
}

#[test]
fn rejects_duplicate_param_names() {
    let err = PathPattern::parse("/a/:id/b/:id").expect_err("should fail");
    assert!(matches!(err, PatternError::DuplicateParam(_, name) if name == "id"));
}

#[test]
fn rejects_colon_inside_segment() {
    let err = PathPattern::parse("/answers/task:number").expect_err("should fail");
    assert!(matches!(err, PatternError::InvalidParamPosition(_)));

    let err = PathPattern::parse("/answers/:task:number").expect_err("should fail");
    assert!(matches!(err, PatternError::InvalidParamPosition(_)));
}

#[test]
fn root_matches_only_root_path() {
    let root = PathPattern::parse("/").expect("parse");
    assert_eq!(root.match_path("/"), Some(BTreeMap::new()));
    assert_eq!(root.match_path("/answers"), None);
}

#[test]
fn static_match_is_exact_and_case_sensitive() {
    let pattern = PathPattern::parse("/answers/latest").expect("parse");
    assert!(pattern.match_path("/answers/latest").is_some());
    assert_eq!(pattern.match_path("/answers/Latest"), None);
    assert_eq!(pattern.match_path("/answers"), None);
}

#[test]
fn dynamic_segment_captures_value() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    let params = pattern.match_path("/answers/3").expect("match");
    assert_eq!(params.get("task_number").map(String::as_str), Some("3"));
}

#[test]
fn dynamic_segment_rejects_empty_value() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(pattern.match_path("/answers/"), None);
}

#[test]
fn match_requires_equal_segment_count() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(pattern.match_path("/answers/3/extra"), None);
    assert_eq!(pattern.match_path("/"), None);
}

#[test]
fn match_ignores_query_and_fragment() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    let params = pattern.match_path("/answers/3?review=1#top").expect("match");
    assert_eq!(params.get("task_number").map(String::as_str), Some("3"));

    let root = PathPattern::parse("/").expect("parse");
    assert!(root.match_path("/?utm=x").is_some());
}

#[test]
fn captured_values_are_verbatim_substrings() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    let params = pattern.match_path("/answers/a%20b").expect("match");
    assert_eq!(params.get("task_number").map(String::as_str), Some("a%20b"));
}

#[test]
fn match_requires_leading_slash_on_path() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(pattern.match_path("answers/3"), None);
}

#[test]
fn static_segment_orders_before_dynamic() {
    let fixed = PathPattern::parse("/answers/latest").expect("parse");
    let dynamic = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(fixed.cmp_specificity(&dynamic), Ordering::Less);
    assert_eq!(dynamic.cmp_specificity(&fixed), Ordering::Greater);
}

#[test]
fn earlier_positions_dominate_specificity() {
    let static_first = PathPattern::parse("/a/:x").expect("parse");
    let param_first = PathPattern::parse("/:x/a").expect("parse");
    assert_eq!(static_first.cmp_specificity(&param_first), Ordering::Less);
}

#[test]
fn shorter_pattern_breaks_ties() {
    let short = PathPattern::parse("/answers").expect("parse");
    let long = PathPattern::parse("/answers/:task_number").expect("parse");
    assert_eq!(short.cmp_specificity(&long), Ordering::Less);
}

#[test]
fn shadows_detects_patterns_equal_up_to_param_names() {
    let a = PathPattern::parse("/answers/:task_number").expect("parse");
    let b = PathPattern::parse("/answers/:id").expect("parse");
    let c = PathPattern::parse("/answers/latest").expect("parse");
    assert!(a.shadows(&b));
    assert!(!a.shadows(&c));
    assert!(!a.shadows(&PathPattern::parse("/").expect("parse")));
}

#[test]
fn serializes_as_source_string() {
    let pattern = PathPattern::parse("/answers/:task_number").expect("parse");
    let json = serde_json::to_string(&pattern).expect("serialize");
    assert_eq!(json, "\"/answers/:task_number\"");
}

#[test]
fn deserializes_and_validates() {
    let pattern: PathPattern =
        serde_json::from_str("\"/answers/:task_number\"").expect("deserialize");
    assert_eq!(pattern.as_str(), "/answers/:task_number");

    assert!(serde_json::from_str::<PathPattern>("\"answers\"").is_err());
}
