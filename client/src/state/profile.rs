//! Profile page state: account details and password forms.
//!
//! DESIGN
//! ======
//! A `?token=` query means the visitor followed a reset link, so the page
//! opens on the security tab in reset mode and skips loading the account
//! (there is no session yet).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::PasswordUpdate;

pub const PASSWORD_MISMATCH: &str = "New passwords don't match";
pub const EMAIL_REQUIRED: &str = "Please enter your email address";
pub const PASSWORD_UPDATED: &str = "Password updated successfully";
pub const RESET_LINK_SENT: &str = "Password reset link sent to your email";
pub const PASSWORD_RESET: &str = "Password has been reset";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    Security,
}

/// Which form the security tab shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SecurityMode {
    #[default]
    ChangePassword,
    ForgotPassword,
    Reset(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    /// # Errors
    ///
    /// Returns a user-facing message when fields are missing or the new
    /// passwords differ.
    pub fn validate(&self) -> Result<PasswordUpdate, &'static str> {
        if self.current.is_empty() || self.new.is_empty() {
            return Err("Please fill in every password field");
        }
        if self.new != self.confirm {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(PasswordUpdate { current_password: self.current.clone(), new_password: self.new.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub password: String,
    pub confirm: String,
}

impl ResetForm {
    /// # Errors
    ///
    /// Returns a user-facing message when the password is empty or the two
    /// entries differ.
    pub fn validate(&self) -> Result<String, &'static str> {
        if self.password.is_empty() {
            return Err("Please enter a new password");
        }
        if self.password != self.confirm {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(self.password.clone())
    }
}

/// # Errors
///
/// [`EMAIL_REQUIRED`] when the trimmed address is empty.
pub fn validate_forgot_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    Ok(email.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub mode: SecurityMode,
    pub busy: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ProfileState {
    /// Initial state for the page given the optional `token` query value.
    #[must_use]
    pub fn from_query(token: Option<&str>) -> Self {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => Self {
                tab: ProfileTab::Security,
                mode: SecurityMode::Reset(token.to_owned()),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn needs_account(&self) -> bool {
        !matches!(self.mode, SecurityMode::Reset(_))
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
        self.clear_messages();
    }

    pub fn set_mode(&mut self, mode: SecurityMode) {
        self.mode = mode;
        self.clear_messages();
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    /// Start a request. Returns `false` when one is already running.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.clear_messages();
        true
    }

    pub fn reject(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.success = None;
    }

    pub fn finish(&mut self, result: Result<&str, String>) {
        self.busy = false;
        match result {
            Ok(msg) => self.success = Some(msg.to_owned()),
            Err(msg) => self.error = Some(msg),
        }
    }
}

/// Date part of an ISO-8601 timestamp, e.g. `2024-03-09`.
#[must_use]
pub fn display_date(iso: &str) -> String {
    iso.split('T').next().unwrap_or_default().trim().to_owned()
}
