use super::*;

use crate::state::config::ConfigState;
use crate::state::toast::ToastState;

#[test]
fn renders_screenshot_upload_field() {
    let owner = Owner::new();
    let html = owner.with(|| {
        let mut dashboard = DashboardState::default();
        dashboard.reviews.open_create();
        provide_context(RwSignal::new(dashboard));
        provide_context(RwSignal::new(ConfigState::default()));
        provide_context(RwSignal::new(ToastState::default()));
        view! { <ReviewFormModal on_submit=Callback::new(|()| {}) on_close=Callback::new(|()| {})/> }.to_html()
    });

    assert_eq!(html.matches("upload-field__input").count(), 1);
    assert!(html.contains("type=\"file\""));
    assert!(html.contains("Add Review"));
}
