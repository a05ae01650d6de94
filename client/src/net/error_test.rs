use super::*;

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401, "");
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), UNAUTHORIZED_FALLBACK);
}

#[test]
fn from_status_401_keeps_server_message() {
    let err = ApiError::from_status(401, r#"{"status":"fail","message":"Token expired"}"#);
    assert_eq!(err, ApiError::Unauthorized("Token expired".to_owned()));
}

#[test]
fn from_status_uses_json_message_when_present() {
    let err = ApiError::from_status(400, r#"{"status":"fail","message":"Title is required"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "Title is required".to_owned() });
    assert_eq!(err.message(), "Title is required");
}

#[test]
fn from_status_falls_back_for_plain_text_body() {
    let err = ApiError::from_status(500, "Internal Server Error");
    assert_eq!(err.message(), "request failed: 500");
}

#[test]
fn from_status_ignores_blank_message() {
    let err = ApiError::from_status(404, r#"{"message":"   "}"#);
    assert_eq!(err.message(), "request failed: 404");
}

#[test]
fn non_401_statuses_are_not_unauthorized() {
    for status in [400, 403, 404, 500, 502] {
        assert!(!ApiError::from_status(status, "").is_unauthorized(), "status {status}");
    }
}

#[test]
fn network_and_decode_messages_are_prefixed() {
    assert_eq!(ApiError::Network("offline".to_owned()).message(), "network error: offline");
    assert_eq!(ApiError::Decode("missing field".to_owned()).message(), "unexpected response: missing field");
}
