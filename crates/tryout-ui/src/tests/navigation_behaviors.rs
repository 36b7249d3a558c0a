//! Behavioral tests for navigation and routing

use tryout_core::views::nav;

use crate::router::routes;

/// Fill `:id` and `:question_id` in a route pattern.
fn fill(pattern: &str, id: &str, question_id: &str) -> String {
    pattern
        .replace(":question_id", question_id)
        .replace(":id", id)
}

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
    assert_eq!(nav::LIST, routes::HOME);
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let all = [
        routes::HOME,
        routes::NEW_TRYOUT,
        routes::TRYOUT_DETAIL,
        routes::EDIT_TRYOUT,
        routes::NEW_QUESTION,
        routes::EDIT_QUESTION,
    ];

    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "All routes should be unique");
}

#[test]
fn given_route_constants_except_home_when_checked_then_no_trailing_slash() {
    for route in [
        routes::NEW_TRYOUT,
        routes::TRYOUT_DETAIL,
        routes::EDIT_TRYOUT,
        routes::NEW_QUESTION,
        routes::EDIT_QUESTION,
    ] {
        assert!(route.starts_with('/'), "{route} should start with /");
        assert!(!route.ends_with('/'), "{route} should not end with /");
    }
}

// ============================================================================
// LINK BUILDER BEHAVIORS
// ============================================================================

#[test]
fn given_new_tryout_link_when_built_then_matches_route() {
    assert_eq!(nav::NEW_TRYOUT, routes::NEW_TRYOUT);
}

#[test]
fn given_tryout_links_when_built_then_match_route_patterns() {
    assert_eq!(nav::tryout_detail("t1"), fill(routes::TRYOUT_DETAIL, "t1", ""));
    assert_eq!(nav::tryout_edit("t1"), fill(routes::EDIT_TRYOUT, "t1", ""));
}

#[test]
fn given_question_links_when_built_then_match_route_patterns() {
    assert_eq!(nav::question_new("t1"), fill(routes::NEW_QUESTION, "t1", ""));
    assert_eq!(
        nav::question_edit("t1", "q7"),
        fill(routes::EDIT_QUESTION, "t1", "q7")
    );
}

#[test]
fn given_route_params_when_named_then_match_patterns() {
    assert!(routes::TRYOUT_DETAIL.contains(&format!(":{}", routes::TRYOUT_ID)));
    assert!(routes::EDIT_QUESTION.contains(&format!(":{}", routes::QUESTION_ID)));
}
