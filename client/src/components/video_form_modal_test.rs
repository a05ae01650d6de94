use super::*;

use crate::state::config::ConfigState;
use crate::state::toast::ToastState;

fn render(dashboard: DashboardState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(dashboard));
        provide_context(RwSignal::new(ConfigState::default()));
        provide_context(RwSignal::new(ToastState::default()));
        view! { <VideoFormModal on_submit=Callback::new(|()| {}) on_close=Callback::new(|()| {})/> }.to_html()
    })
}

#[test]
fn renders_video_and_thumbnail_upload_fields() {
    let mut dashboard = DashboardState::default();
    dashboard.videos.open_create();
    let html = render(dashboard);

    assert_eq!(html.matches("upload-field__input").count(), 2);
    assert!(html.contains("type=\"file\""));
    assert!(html.contains("accept=\"video/*\""));
    assert!(html.contains("accept=\"image/*\""));
}

#[test]
fn heading_follows_modal_mode() {
    let mut dashboard = DashboardState::default();
    dashboard.videos.open_create();
    assert!(render(dashboard).contains("Add Video"));
}
