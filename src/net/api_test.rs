use super::*;

#[test]
fn share_endpoint_formats_expected_path() {
    assert_eq!(share_endpoint("AB12CD"), "/share/AB12CD");
}

#[test]
fn login_payload_carries_both_fields() {
    let payload = login_payload("ana@example.com", "hunter2");
    assert_eq!(payload["email"], "ana@example.com");
    assert_eq!(payload["password"], "hunter2");
}

#[test]
fn register_payload_carries_all_fields() {
    let payload = register_payload("Ana", "ana@example.com", "hunter2");
    assert_eq!(payload["name"], "Ana");
    assert_eq!(payload["email"], "ana@example.com");
    assert_eq!(payload["password"], "hunter2");
}

#[test]
fn fetch_current_user_swallows_failure_outside_browser() {
    // Outside the browser the transport always fails; the whoami helper must
    // read that as unauthenticated rather than propagate an error.
    let http = HttpClient::new("http://localhost:8000");
    let user = futures::executor::block_on(fetch_current_user(http));
    assert!(user.is_none());
}
