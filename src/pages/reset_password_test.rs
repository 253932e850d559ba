use super::*;

#[test]
fn reset_token_requires_a_non_blank_value() {
    assert_eq!(reset_token(None), None);
    assert_eq!(reset_token(Some("   ".to_owned())), None);
}

#[test]
fn reset_token_trims_surrounding_whitespace() {
    assert_eq!(reset_token(Some(" abc123 ".to_owned())), Some("abc123".to_owned()));
}

#[test]
fn changed_notice_falls_back_when_reply_is_silent() {
    assert_eq!(changed_notice(String::new()), "Password changed. You can sign in now.");
    assert_eq!(changed_notice("ok".to_owned()), "ok");
}
