use super::*;

fn configured() -> SiteConfig {
    SiteConfig {
        emailjs_service_id: Some("service_x".to_owned()),
        emailjs_template_id: Some("template_y".to_owned()),
        emailjs_public_key: Some("pk_z".to_owned()),
        ..SiteConfig::default()
    }
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        message: "Wedding in June?".to_owned(),
    }
}

#[test]
fn send_request_maps_template_params() {
    let config = configured();
    let msg = message();
    let req = build_send_request(&config, &msg).unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "service_id": "service_x",
            "template_id": "template_y",
            "user_id": "pk_z",
            "template_params": {
                "from_name": "Ana",
                "from_email": "ana@example.com",
                "message": "Wedding in June?"
            }
        })
    );
}

#[test]
fn send_request_requires_every_id() {
    let msg = message();
    let mut config = configured();
    config.emailjs_template_id = None;
    assert_eq!(
        build_send_request(&config, &msg).unwrap_err(),
        ApiError::Config("email template id".to_owned())
    );

    let mut config = configured();
    config.emailjs_public_key = Some(" ".to_owned());
    assert_eq!(
        build_send_request(&config, &msg).unwrap_err(),
        ApiError::Config("email public key".to_owned())
    );
}
