use reqwest::StatusCode;
use serde_json::json;
use writerai::auth::{login_outcome, AuthResponse};
use writerai::error::WriterAiError;

fn body_from(value: serde_json::Value) -> AuthResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_successful_login_yields_token() {
    let body = body_from(json!({
        "token": "tok-abc123",
        "message": "Login successful!"
    }));

    let token = login_outcome(StatusCode::OK, body).unwrap();
    assert_eq!(token, "tok-abc123");
}

#[test]
fn test_rejected_login_surfaces_server_message() {
    let body = body_from(json!({ "message": "Invalid credentials" }));

    let result = login_outcome(StatusCode::UNAUTHORIZED, body);
    match result {
        Err(WriterAiError::Auth(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected auth error, got {:?}", other),
    }
}

#[test]
fn test_rejected_login_without_message_has_fallback() {
    let body = body_from(json!({}));

    let result = login_outcome(StatusCode::INTERNAL_SERVER_ERROR, body);
    match result {
        Err(WriterAiError::Auth(message)) => assert_eq!(message, "Login failed"),
        other => panic!("expected auth error, got {:?}", other),
    }
}

#[test]
fn test_success_without_token_is_malformed_payload() {
    // No Ok result, so the caller never has a token to store.
    let body = body_from(json!({ "message": "Login successful!" }));

    let result = login_outcome(StatusCode::OK, body);
    assert!(matches!(
        result,
        Err(WriterAiError::ExternalService { status: 200, .. })
    ));
}
