use super::*;

#[test]
fn should_redirect_unauth_when_loaded_without_token() {
    let state = AuthState { token: None, user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn token_alone_is_enough_to_stay() {
    let mut state = AuthState::default();
    state.restore(Some("jwt".to_owned()));
    assert!(state.user.is_none());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn sign_out_triggers_redirect() {
    let mut state = AuthState::default();
    state.restore(Some("jwt".to_owned()));
    state.sign_out();
    assert!(should_redirect_unauth(&state));
}
