use super::*;

fn session(token: &str) -> AuthSession {
    AuthSession {
        token: token.to_owned(),
        user: Some(User {
            id: "u1".to_owned(),
            name: "Jayed".to_owned(),
            email: "editor@example.com".to_owned(),
            created_at: None,
        }),
    }
}

#[test]
fn default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_token_authenticates() {
    let mut state = AuthState::default();
    state.restore(Some("tok".to_owned()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn restore_without_token_finishes_loading() {
    let mut state = AuthState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_then_out() {
    let mut state = AuthState::default();
    state.sign_in(session("abc"));
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.display_name(), "Jayed");

    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert_eq!(state.display_name(), "Editor");
}
