//! Contact form state.
//!
//! `Idle -> Sending -> Sent | Failed`. A sent message clears the form and the
//! view drops back to `Idle` after [`CONTACT_RESET_MS`]; a failed send keeps
//! whatever the visitor typed so they can retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::error::ApiError;
use crate::net::types::ContactMessage;

pub const CONTACT_RESET_MS: u32 = 3000;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validate and trim into an outgoing message.
    ///
    /// # Errors
    ///
    /// Returns the first user-facing validation message.
    pub fn validate(&self) -> Result<ContactMessage, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err("Please enter your name");
        }
        if email.is_empty() {
            return Err("Please enter your email address");
        }
        if !is_plausible_email(email) {
            return Err("Please enter a valid email address");
        }
        if message.is_empty() {
            return Err("Please enter a message");
        }
        Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

/// Exactly one `@` with something on both sides.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactRejection {
    Busy,
    Invalid(&'static str),
}

#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
}

impl ContactState {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    /// Move to `Sending` and hand back the message to send.
    ///
    /// # Errors
    ///
    /// `Busy` while a send is in flight, `Invalid` when the form fails
    /// validation. Neither changes the current status.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactRejection> {
        if self.is_sending() {
            return Err(ContactRejection::Busy);
        }
        let message = self.form.validate().map_err(ContactRejection::Invalid)?;
        self.status = ContactStatus::Sending;
        Ok(message)
    }

    pub fn finish(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = ContactStatus::Sent;
            }
            Err(_) => {
                self.status = ContactStatus::Failed(SEND_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Timer callback after a successful send. No-op for any other status.
    pub fn reset_after_sent(&mut self) {
        if self.status == ContactStatus::Sent {
            self.status = ContactStatus::Idle;
        }
    }
}
