use super::*;

#[test]
fn only_post_and_put_send_bodies() {
    assert!(Method::Post.sends_body());
    assert!(Method::Put.sends_body());
    assert!(!Method::Get.sends_body());
    assert!(!Method::Delete.sends_body());
}

#[test]
fn method_displays_uppercase_verb() {
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[test]
fn json_body_sets_content_type() {
    let request = HttpRequest::new(Method::Post, "/api/metrics").json_body("{}".to_owned());
    assert_eq!(request.header_value("content-type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some("{}"));
}

#[test]
fn header_value_is_case_insensitive() {
    let request = HttpRequest::new(Method::Get, "/x").header("Authorization", "Bearer t");
    assert_eq!(request.header_value("authorization"), Some("Bearer t"));
    assert_eq!(request.header_value("accept"), None);
}

#[test]
fn success_range_is_2xx() {
    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(201, "").is_success());
    assert!(!HttpResponse::new(199, "").is_success());
    assert!(!HttpResponse::new(300, "").is_success());
    assert!(!HttpResponse::new(401, "").is_success());
}

#[test]
fn status_line_includes_reason_when_known() {
    let mut resp = HttpResponse::new(503, "");
    assert_eq!(resp.status_line(), "HTTP 503");
    resp.status_text = "Service Unavailable".to_owned();
    assert_eq!(resp.status_line(), "HTTP 503 Service Unavailable");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn browser_transport_fails_outside_browser() {
    let result = BrowserTransport.send(HttpRequest::new(Method::Get, "/api/metrics")).await;
    assert_eq!(result, Err(TransportError("not available on server".to_owned())));
}
