use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    let req = validate_login_input("  editor@example.com ", "secret").unwrap();
    assert_eq!(req.email, "editor@example.com");
    assert_eq!(req.password, "secret");
    assert!(validate_login_input("", "secret").is_err());
    assert!(validate_login_input("editor@example.com", "").is_err());
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let req = validate_login_input("a@b.c", " pass ").unwrap();
    assert_eq!(req.password, " pass ");
}

#[test]
fn login_failure_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: "Incorrect email or password".to_owned() };
    assert_eq!(login_failure_message(&err), "Incorrect email or password");
}

#[test]
fn login_failure_falls_back_to_generic_text() {
    assert_eq!(login_failure_message(&ApiError::Network("offline".to_owned())), INVALID_CREDENTIALS);
    let blank = ApiError::Status { status: 500, message: " ".to_owned() };
    assert_eq!(login_failure_message(&blank), INVALID_CREDENTIALS);
}
