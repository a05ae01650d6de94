//! Toast notification queue.
//!
//! DESIGN
//! ======
//! A loading toast is created first and later resolved in place to success
//! or error, so long operations show one notification rather than two.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// How long a resolved toast stays on screen.
pub const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Show a spinner toast that stays until resolved.
    pub fn loading(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Loading, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Replace a toast's kind and text. Missing ids become new toasts.
    pub fn resolve(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.kind = kind;
            toast.message = message;
            return id;
        }
        self.push(kind, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Remove toast `id` after [`TOAST_DISMISS_MS`].
#[cfg(feature = "hydrate")]
pub fn schedule_dismiss(toasts: leptos::prelude::RwSignal<ToastState>, id: u64) {
    use leptos::prelude::*;

    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
}

/// Resolve toast `id` in place and schedule its dismissal.
#[cfg(feature = "hydrate")]
pub fn settle(toasts: leptos::prelude::RwSignal<ToastState>, id: u64, kind: ToastKind, message: impl Into<String>) {
    use leptos::prelude::*;

    let message = message.into();
    let id = toasts.try_update(|t| t.resolve(id, kind, message)).unwrap_or(id);
    schedule_dismiss(toasts, id);
}

/// Show a short-lived toast with no loading phase.
#[cfg(feature = "hydrate")]
pub fn notify(toasts: leptos::prelude::RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    use leptos::prelude::*;

    let message = message.into();
    if let Some(id) = toasts.try_update(|t| t.push(kind, message)) {
        schedule_dismiss(toasts, id);
    }
}
