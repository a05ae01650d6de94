use super::*;

fn config(upstream: Option<&str>) -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|_| None).unwrap();
    config.api_upstream_url = upstream.map(str::to_owned);
    config
}

#[test]
fn upstream_reflects_config() {
    let state = AppState::new(config(Some("http://up.test/api/v1"))).unwrap();
    assert_eq!(state.upstream(), Some("http://up.test/api/v1"));

    let state = AppState::new(config(None)).unwrap();
    assert_eq!(state.upstream(), None);
}

#[test]
fn clones_share_config() {
    let state = AppState::new(config(None)).unwrap();
    let other = state.clone();
    assert!(Arc::ptr_eq(&state.config, &other.config));
}
