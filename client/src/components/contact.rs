//! Contact section: direct links plus a form sent through the email service.

use leptos::prelude::*;

use crate::state::config::ConfigState;
use crate::state::contact::{ContactForm, ContactRejection, ContactState, ContactStatus};

struct ContactLink {
    platform: &'static str,
    handle: &'static str,
    url: &'static str,
}

const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink { platform: "Call", handle: "+8801906979013", url: "tel:+8801906979013" },
    ContactLink { platform: "Email", handle: "jayedbinkibria@gmail.com", url: "mailto:jayedbinkibria@gmail.com" },
    ContactLink { platform: "WhatsApp", handle: "01794598569", url: "https://wa.me/8801794598569" },
    ContactLink { platform: "X", handle: "jayedbinkibria", url: "https://x.com/jayedbinkibria" },
];

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();
    let state = RwSignal::new(ContactState::default());
    let invalid = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = match state.try_update(ContactState::begin_submit) {
            Some(Ok(message)) => message,
            Some(Err(ContactRejection::Invalid(reason))) => {
                invalid.set(Some(reason));
                return;
            }
            Some(Err(ContactRejection::Busy)) | None => return,
        };
        invalid.set(None);

        #[cfg(feature = "hydrate")]
        {
            let site = config.get_untracked().site;
            leptos::task::spawn_local(async move {
                let result = crate::net::email::send_contact_email(&site, &message).await;
                if let Err(e) = &result {
                    log::error!("contact email failed: {e}");
                }
                state.update(|s| s.finish(result));
                if state.with_untracked(|s| s.status == ContactStatus::Sent) {
                    gloo_timers::future::TimeoutFuture::new(crate::state::contact::CONTACT_RESET_MS).await;
                    state.update(ContactState::reset_after_sent);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (message, config);
        }
    };

    let edit = move |write: fn(&mut ContactForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| write(&mut s.form, value));
        }
    };
    let sending = move || state.with(ContactState::is_sending);

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Let's Create Together"</h2>
            <div class="contact__layout">
                <ul class="contact__links">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a class="contact__link" href=link.url target="_blank" rel="noopener noreferrer">
                                        <span class="contact__platform">{link.platform}</span>
                                        <span class="contact__handle">{link.handle}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <form class="contact__form" on:submit=on_submit>
                    <input
                        class="contact__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || state.with(|s| s.form.name.clone())
                        on:input=edit(|f, v| f.name = v)
                    />
                    <input
                        class="contact__input"
                        type="email"
                        placeholder="Your email"
                        prop:value=move || state.with(|s| s.form.email.clone())
                        on:input=edit(|f, v| f.email = v)
                    />
                    <textarea
                        class="contact__input contact__input--area"
                        placeholder="Tell me about your project"
                        prop:value=move || state.with(|s| s.form.message.clone())
                        on:input=edit(|f, v| f.message = v)
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=sending>
                        {move || if sending() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || invalid.get().map(|reason| view! { <p class="contact__error">{reason}</p> })}
                    {move || match state.with(|s| s.status.clone()) {
                        ContactStatus::Sent => {
                            Some(view! { <p class="contact__success">"Message sent! I'll get back to you soon."</p> }.into_any())
                        }
                        ContactStatus::Failed(message) => Some(view! { <p class="contact__error">{message}</p> }.into_any()),
                        ContactStatus::Idle | ContactStatus::Sending => None,
                    }}
                </form>
            </div>
        </section>
    }
}
