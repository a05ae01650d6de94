use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_to_development_with_local_upstream() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.app_env, AppEnv::Development);
    assert_eq!(config.api_upstream_url.as_deref(), Some(DEV_API_UPSTREAM_URL));
    assert_eq!(config.site.cloudinary_upload_preset, "ml_default");
    assert_eq!(config.site.cloudinary_cloud_name, None);
    assert_eq!(config.assets_dir, PathBuf::from("public/assets"));
}

#[test]
fn production_defaults_to_hosted_upstream() {
    let config = ServerConfig::from_lookup(lookup(&[("APP_ENV", "production")])).unwrap();
    assert_eq!(config.app_env, AppEnv::Production);
    assert_eq!(config.api_upstream_url.as_deref(), Some(PROD_API_UPSTREAM_URL));
}

#[test]
fn upstream_none_disables_proxy() {
    let config = ServerConfig::from_lookup(lookup(&[("APP_ENV", "production"), ("API_UPSTREAM_URL", "None")])).unwrap();
    assert_eq!(config.api_upstream_url, None);
}

#[test]
fn explicit_upstream_wins_and_loses_trailing_slash() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("APP_ENV", "Production"),
        ("API_UPSTREAM_URL", "https://api.example.com/api/v1/"),
    ]))
    .unwrap();
    assert_eq!(config.api_upstream_url.as_deref(), Some("https://api.example.com/api/v1"));
}

#[test]
fn upstream_must_be_http() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "ftp://x")])).unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("ftp://x".to_owned()));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn unknown_app_env_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("APP_ENV", "staging")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "APP_ENV", .. }));
}

#[test]
fn blank_values_count_as_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("CLOUDINARY_CLOUD_NAME", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site.cloudinary_cloud_name, None);
}

#[test]
fn site_config_is_read_from_env() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_UPLOAD_PRESET", "reels"),
        ("EMAILJS_SERVICE_ID", "svc"),
        ("EMAILJS_TEMPLATE_ID", "tpl"),
        ("EMAILJS_PUBLIC_KEY", "pk"),
    ]))
    .unwrap();
    assert_eq!(config.site.cloudinary_cloud_name.as_deref(), Some("demo"));
    assert_eq!(config.site.cloudinary_upload_preset, "reels");
    assert_eq!(config.site.emailjs_public_key.as_deref(), Some("pk"));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));
}
