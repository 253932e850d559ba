use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn jwt(payload: &str) -> String {
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn in_memory_session_starts_anonymous() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn sign_in_then_sign_out_round_trips_state() {
    let session = Session::in_memory();
    session.sign_in("tok");
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok"));

    session.sign_out();
    assert!(!session.is_authenticated());
}

#[test]
fn cloned_sessions_share_the_store() {
    let session = Session::in_memory();
    let clone = session.clone();
    clone.sign_in("tok");
    assert!(session.is_authenticated());
}

#[test]
fn email_and_subject_come_from_current_token() {
    let session = Session::new(MemoryStore::with_token(&jwt(r#"{"sub":"9","email":"a@b.co"}"#)));
    assert_eq!(session.email().as_deref(), Some("a@b.co"));
    assert_eq!(session.subject().as_deref(), Some("9"));
}

#[test]
fn claims_follow_token_changes() {
    let session = Session::new(MemoryStore::with_token(&jwt(r#"{"sub":"1","email":"old@b.co"}"#)));
    session.sign_in(&jwt(r#"{"sub":"2","email":"new@b.co"}"#));
    assert_eq!(session.email().as_deref(), Some("new@b.co"));

    session.sign_out();
    assert_eq!(session.claims(), None);
}

#[test]
fn opaque_token_is_authenticated_without_identity() {
    let session = Session::new(MemoryStore::with_token("opaque"));
    assert!(session.is_authenticated());
    assert_eq!(session.email(), None);
}

#[test]
fn debug_output_hides_token() {
    let session = Session::new(MemoryStore::with_token("secret-token"));
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("authenticated: true"));
}
