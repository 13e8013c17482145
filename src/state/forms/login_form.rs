//! Login form controller
//!
//! Owns the email and password fields, derives `form_is_valid` through a
//! debounced recomputation, and decides what a submit does.

use super::debounce::Debouncer;
use super::field::{FieldEvent, FieldKind, FormField};
use crate::auth::AuthSession;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Focusable stops in the login form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Email => Self::Submit,
            Self::Password => Self::Email,
            Self::Submit => Self::Password,
        }
    }

    /// The text field behind this stop, if any
    pub fn kind(self) -> Option<FieldKind> {
        match self {
            Self::Email => Some(FieldKind::Email),
            Self::Password => Some(FieldKind::Password),
            Self::Submit => None,
        }
    }
}

/// Capability to move input focus onto a login field
pub trait Focusable {
    fn focus(&mut self, field: LoginField);
}

/// Result of a scheduled validity recomputation, delivered by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityCheck {
    pub generation: u64,
    pub form_is_valid: bool,
}

/// What a submit ended up doing. Exactly one per submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoginAttempted,
    Focused(LoginField),
}

/// Decide a submit from the debounced form validity and the email validity
pub fn submit_target(form_is_valid: bool, email_is_valid: Option<bool>) -> SubmitOutcome {
    if form_is_valid {
        SubmitOutcome::LoginAttempted
    } else if email_is_valid != Some(true) {
        SubmitOutcome::Focused(LoginField::Email)
    } else {
        SubmitOutcome::Focused(LoginField::Password)
    }
}

pub struct LoginForm {
    email: FormField,
    password: FormField,
    active: LoginField,
    form_is_valid: bool,
    /// Validity pair the latest check was scheduled for
    scheduled_for: (Option<bool>, Option<bool>),
    generation: u64,
    debouncer: Debouncer<ValidityCheck>,
}

impl LoginForm {
    pub fn new(delay: Duration, tx: UnboundedSender<ValidityCheck>) -> Self {
        Self {
            email: FormField::new(FieldKind::Email),
            password: FormField::new(FieldKind::Password),
            active: LoginField::Email,
            form_is_valid: false,
            scheduled_for: (None, None),
            generation: 0,
            debouncer: Debouncer::new(delay, tx),
        }
    }

    pub fn email(&self) -> &FormField {
        &self.email
    }

    pub fn password(&self) -> &FormField {
        &self.password
    }

    pub fn active_field(&self) -> LoginField {
        self.active
    }

    pub fn form_is_valid(&self) -> bool {
        self.form_is_valid
    }

    pub fn is_check_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
        }
    }

    /// Apply an event to one field and re-arm the validity check if needed
    pub fn dispatch(&mut self, kind: FieldKind, event: FieldEvent) {
        self.field_mut(kind).dispatch(event);
        self.validity_changed();
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(kind) = self.active.kind() {
            self.field_mut(kind).push_char(c);
            self.validity_changed();
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(kind) = self.active.kind() {
            self.field_mut(kind).pop_char();
            self.validity_changed();
        }
    }

    pub fn next_field(&mut self) {
        self.focus(self.active.next());
    }

    pub fn prev_field(&mut self) {
        self.focus(self.active.prev());
    }

    /// Clear both fields and return the cursor to the email field
    pub fn reset(&mut self) {
        self.email.dispatch(FieldEvent::Reset);
        self.password.dispatch(FieldEvent::Reset);
        self.active = LoginField::Email;
        self.validity_changed();
    }

    /// Schedule a recomputation whenever the validity pair moved
    fn validity_changed(&mut self) {
        let pair = (self.email.is_valid(), self.password.is_valid());
        if pair == self.scheduled_for {
            return;
        }
        self.scheduled_for = pair;
        self.generation += 1;
        self.debouncer.schedule(ValidityCheck {
            generation: self.generation,
            form_is_valid: pair == (Some(true), Some(true)),
        });
    }

    /// Apply a delivered check. Returns false for superseded checks.
    pub fn apply_validity_check(&mut self, check: ValidityCheck) -> bool {
        if check.generation != self.generation {
            tracing::trace!(
                generation = check.generation,
                current = self.generation,
                "ignoring superseded validity check"
            );
            return false;
        }
        tracing::debug!(form_is_valid = check.form_is_valid, "checking form validity");
        self.form_is_valid = check.form_is_valid;
        true
    }

    /// Submit the form: log in when valid, otherwise focus the offending field
    pub async fn submit(&mut self, auth: &mut dyn AuthSession) -> Result<SubmitOutcome> {
        let outcome = submit_target(self.form_is_valid, self.email.is_valid());
        match outcome {
            SubmitOutcome::LoginAttempted => {
                auth.login(self.email.value(), self.password.value()).await?;
            }
            SubmitOutcome::Focused(field) => {
                tracing::debug!(?field, "form invalid, moving focus");
                self.focus(field);
            }
        }
        Ok(outcome)
    }
}

impl Focusable for LoginForm {
    /// Move the cursor, blurring the text field it leaves
    fn focus(&mut self, field: LoginField) {
        if field == self.active {
            return;
        }
        if let Some(kind) = self.active.kind() {
            self.dispatch(kind, FieldEvent::InputBlur);
        }
        self.active = field;
    }
}
