use super::*;

#[test]
fn anonymous_user_is_sent_to_entry_with_return_target() {
    assert_eq!(evaluate(false, "/dashboard"), GuardDecision::redirect_from("/", "/dashboard"));
}

#[test]
fn anonymous_user_may_render_entry() {
    assert_eq!(evaluate(false, "/"), GuardDecision::Render);
    assert_eq!(evaluate(false, ""), GuardDecision::Render);
}

#[test]
fn authenticated_user_skips_entry() {
    assert_eq!(evaluate(true, "/"), GuardDecision::redirect("/dashboard"));
}

#[test]
fn authenticated_user_renders_protected_location() {
    assert_eq!(evaluate(true, "/dashboard"), GuardDecision::Render);
}

#[test]
fn evaluation_is_idempotent() {
    for has_credential in [false, true] {
        for location in ["/", "/dashboard", "/anything"] {
            assert_eq!(evaluate(has_credential, location), evaluate(has_credential, location));
        }
    }
}

#[test]
fn navigation_url_encodes_return_target() {
    assert_eq!(GuardDecision::Render.navigation_url(), None);
    assert_eq!(GuardDecision::redirect("/dashboard").navigation_url(), Some("/dashboard".to_owned()));
    assert_eq!(
        GuardDecision::redirect_from("/", "/dashboard").navigation_url(),
        Some("/?next=%2Fdashboard".to_owned())
    );
}

#[test]
fn post_login_target_honors_local_paths_only() {
    assert_eq!(post_login_target(Some("/dashboard")), "/dashboard");
    assert_eq!(post_login_target(None), "/dashboard");
    assert_eq!(post_login_target(Some("/")), "/dashboard");
    assert_eq!(post_login_target(Some("//evil.example.com")), "/dashboard");
    assert_eq!(post_login_target(Some("https://evil.example.com")), "/dashboard");
    assert_eq!(post_login_target(Some("dashboard")), "/dashboard");
}
