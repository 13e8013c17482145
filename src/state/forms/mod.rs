//! Form domain layer
//!
//! Field validation state machines and the login form controller.

mod debounce;
mod field;
mod login_form;
mod validators;

pub use field::FormField;
pub use login_form::{LoginField, LoginForm, SubmitOutcome, ValidityCheck};
