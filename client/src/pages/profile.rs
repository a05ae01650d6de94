//! Profile page: account details, password change, and password reset.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::profile::{
    PasswordForm, ProfileState, ProfileTab, ResetForm, SecurityMode, display_date, validate_forgot_email,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let token = query.with_untracked(|q| q.get("token"));
    let state = RwSignal::new(ProfileState::from_query(token.as_deref()));
    let account = RwSignal::new(None::<User>);

    Effect::new(move || {
        if !state.with_untracked(ProfileState::needs_account) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_current_user().await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user.clone()));
                    account.set(Some(user));
                }
                Err(e) => log::warn!("failed to fetch user data: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, account);
    });

    let tab_class = move |tab: ProfileTab| {
        move || if state.with(|s| s.tab) == tab { "profile__tab profile__tab--active" } else { "profile__tab" }
    };
    let name = move || {
        account
            .with(|u| u.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| auth.with(AuthState::display_name))
    };

    view! {
        <section class="profile-page">
            <header class="profile-page__header">
                <div>
                    <h1>{move || format!("{}'s Profile", name())}</h1>
                    <p class="profile-page__crumbs">"EDITOR_DASHBOARD / PROFILE_SETTINGS"</p>
                </div>
                <a class="btn" href="/dashboard">"← Back to Dashboard"</a>
            </header>
            <nav class="profile__tabs">
                <button class=tab_class(ProfileTab::Profile) on:click=move |_| state.update(|s| s.select_tab(ProfileTab::Profile))>
                    "Profile Info"
                </button>
                <button class=tab_class(ProfileTab::Security) on:click=move |_| state.update(|s| s.select_tab(ProfileTab::Security))>
                    "Security"
                </button>
            </nav>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="profile__error">{e}</p> })}
            {move || state.with(|s| s.success.clone()).map(|m| view! { <p class="profile__success">{m}</p> })}
            {move || match (state.with(|s| s.tab), state.with(|s| s.mode.clone())) {
                (ProfileTab::Profile, _) => view! { <AccountPanel account=account/> }.into_any(),
                (ProfileTab::Security, SecurityMode::ChangePassword) => view! { <ChangePasswordForm state=state/> }.into_any(),
                (ProfileTab::Security, SecurityMode::ForgotPassword) => view! { <ForgotPasswordForm state=state/> }.into_any(),
                (ProfileTab::Security, SecurityMode::Reset(token)) => view! { <ResetPasswordForm state=state token=token/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn AccountPanel(account: RwSignal<Option<User>>) -> impl IntoView {
    let field = move |read: fn(&User) -> String| move || account.with(|u| u.as_ref().map(read).unwrap_or_default());

    view! {
        <dl class="profile__details">
            <dt>"Name"</dt>
            <dd>{field(|u| u.name.clone())}</dd>
            <dt>"Email"</dt>
            <dd>{field(|u| u.email.clone())}</dd>
            <dt>"Member since"</dt>
            <dd>{field(|u| u.created_at.as_deref().map(display_date).unwrap_or_default())}</dd>
        </dl>
    }
}

#[component]
fn ChangePasswordForm(state: RwSignal<ProfileState>) -> impl IntoView {
    let form = RwSignal::new(PasswordForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match form.with_untracked(PasswordForm::validate) {
            Ok(update) => update,
            Err(msg) => {
                state.update(|s| s.reject(msg));
                return;
            }
        };
        if !state.try_update(ProfileState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::profile::PASSWORD_UPDATED;

            let result = crate::net::api::update_password(&update).await;
            if result.is_ok() {
                form.set(PasswordForm::default());
            }
            state.update(|s| s.finish(result.map(|()| PASSWORD_UPDATED).map_err(|e| e.message())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    };

    let input = move |placeholder: &'static str, read: fn(&PasswordForm) -> String, write: fn(&mut PasswordForm, String)| {
        view! {
            <input
                class="dialog__input"
                type="password"
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        }
    };

    view! {
        <form class="profile__form" on:submit=on_submit>
            <h2>"Change Password"</h2>
            {input("Current password", |f| f.current.clone(), |f, v| f.current = v)}
            {input("New password", |f| f.new.clone(), |f, v| f.new = v)}
            {input("Confirm new password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
            <div class="dialog__actions">
                <button
                    class="btn btn--link"
                    type="button"
                    on:click=move |_| state.update(|s| s.set_mode(SecurityMode::ForgotPassword))
                >
                    "Forgot password?"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.busy)>
                    "Update Password"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ForgotPasswordForm(state: RwSignal<ProfileState>) -> impl IntoView {
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = match validate_forgot_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(msg) => {
                state.update(|s| s.reject(msg));
                return;
            }
        };
        if !state.try_update(ProfileState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::profile::RESET_LINK_SENT;

            let result = crate::net::api::forgot_password(&address).await;
            if result.is_ok() {
                email.set(String::new());
            }
            state.update(|s| s.finish(result.map(|()| RESET_LINK_SENT).map_err(|e| e.message())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = address;
    };

    view! {
        <form class="profile__form" on:submit=on_submit>
            <h2>"Reset Password"</h2>
            <p>"We'll email you a link to choose a new password."</p>
            <input
                class="dialog__input"
                type="email"
                placeholder="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <div class="dialog__actions">
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| state.update(|s| s.set_mode(SecurityMode::ChangePassword))
                >
                    "Back"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.busy)>
                    "Send Reset Link"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ResetPasswordForm(state: RwSignal<ProfileState>, token: String) -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(ResetForm::default());
    let token = StoredValue::new(token);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let password = match form.with_untracked(ResetForm::validate) {
            Ok(password) => password,
            Err(msg) => {
                state.update(|s| s.reject(msg));
                return;
            }
        };
        if !state.try_update(ProfileState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::profile::PASSWORD_RESET;

                let result = crate::net::api::reset_password(&token.get_value(), &password).await;
                let ok = result.is_ok();
                state.update(|s| s.finish(result.map(|()| PASSWORD_RESET).map_err(|e| e.message())));
                if ok {
                    navigate("/", leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (password, token, &navigate);
    };

    view! {
        <form class="profile__form" on:submit=on_submit>
            <h2>"Choose a New Password"</h2>
            <input
                class="dialog__input"
                type="password"
                placeholder="New password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.password = value);
                }
            />
            <input
                class="dialog__input"
                type="password"
                placeholder="Confirm new password"
                prop:value=move || form.with(|f| f.confirm.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.confirm = value);
                }
            />
            <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.busy)>
                "Reset Password"
            </button>
        </form>
    }
}
