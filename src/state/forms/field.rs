//! Login form fields and their validation state machine

use super::validators::{is_valid_email, is_valid_password};

/// Which predicate a field validates against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    pub fn validate(self, value: &str) -> bool {
        match self {
            FieldKind::Email => is_valid_email(value),
            FieldKind::Password => is_valid_password(value),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }
}

/// Events accepted by a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user replaced the field's content
    UserInput(String),
    /// Focus left the field
    InputBlur,
    Reset,
}

/// Value and validity of one input.
///
/// `is_valid` stays `None` until the first input or blur evaluates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: Option<bool>,
}

/// Pure transition function for a single field
pub fn reduce(kind: FieldKind, state: &FieldState, event: FieldEvent) -> FieldState {
    match event {
        FieldEvent::UserInput(value) => FieldState {
            is_valid: Some(kind.validate(&value)),
            value,
        },
        FieldEvent::InputBlur => FieldState {
            value: state.value.clone(),
            is_valid: Some(kind.validate(&state.value)),
        },
        FieldEvent::Reset => FieldState {
            value: String::new(),
            is_valid: Some(false),
        },
    }
}

/// A form field: its kind plus the state the reducer maintains
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    state: FieldState,
}

impl FormField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            state: FieldState::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn is_valid(&self) -> Option<bool> {
        self.state.is_valid
    }

    /// Apply an event. Returns true if the validity flag changed.
    pub fn dispatch(&mut self, event: FieldEvent) -> bool {
        let before = self.state.is_valid;
        self.state = reduce(self.kind, &self.state, event);
        before != self.state.is_valid
    }

    /// Append a character as user input
    pub fn push_char(&mut self, c: char) -> bool {
        let mut value = self.state.value.clone();
        value.push(c);
        self.dispatch(FieldEvent::UserInput(value))
    }

    /// Remove the last character as user input
    pub fn pop_char(&mut self) -> bool {
        let mut value = self.state.value.clone();
        value.pop();
        self.dispatch(FieldEvent::UserInput(value))
    }

    /// Get the display value for rendering
    pub fn display_value(&self, masked: bool) -> String {
        if masked {
            "•".repeat(self.state.value.chars().count())
        } else {
            self.state.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: FieldKind, events: Vec<FieldEvent>) -> FieldState {
        events
            .into_iter()
            .fold(FieldState::default(), |state, event| reduce(kind, &state, event))
    }

    mod reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state_is_unevaluated() {
            let state = FieldState::default();
            assert_eq!(state.value, "");
            assert_eq!(state.is_valid, None);
        }

        #[test]
        fn test_email_input_then_blur() {
            let state = run(
                FieldKind::Email,
                vec![FieldEvent::UserInput("a@b.com".into()), FieldEvent::InputBlur],
            );
            assert_eq!(
                state,
                FieldState {
                    value: "a@b.com".into(),
                    is_valid: Some(true),
                }
            );
        }

        #[test]
        fn test_short_password_input_then_blur() {
            let state = run(
                FieldKind::Password,
                vec![FieldEvent::UserInput("short".into()), FieldEvent::InputBlur],
            );
            assert_eq!(
                state,
                FieldState {
                    value: "short".into(),
                    is_valid: Some(false),
                }
            );
        }

        #[test]
        fn test_blur_on_untouched_field_evaluates_empty_value() {
            let state = run(FieldKind::Email, vec![FieldEvent::InputBlur]);
            assert_eq!(state.value, "");
            assert_eq!(state.is_valid, Some(false));
        }

        #[test]
        fn test_blur_keeps_value() {
            let before = FieldState {
                value: "kept@value".into(),
                is_valid: None,
            };
            let after = reduce(FieldKind::Email, &before, FieldEvent::InputBlur);
            assert_eq!(after.value, "kept@value");
            assert_eq!(after.is_valid, Some(true));
        }

        #[test]
        fn test_reset_clears_and_marks_invalid() {
            let state = run(
                FieldKind::Password,
                vec![FieldEvent::UserInput("long enough".into()), FieldEvent::Reset],
            );
            assert_eq!(
                state,
                FieldState {
                    value: String::new(),
                    is_valid: Some(false),
                }
            );
        }

        #[test]
        fn test_validity_tracks_latest_input() {
            let state = run(
                FieldKind::Email,
                vec![
                    FieldEvent::UserInput("a@b".into()),
                    FieldEvent::UserInput("ab".into()),
                ],
            );
            assert_eq!(state.is_valid, Some(false));
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_field_is_empty() {
            let field = FormField::new(FieldKind::Email);
            assert_eq!(field.value(), "");
            assert_eq!(field.is_valid(), None);
            assert_eq!(field.label(), "Email");
        }

        #[test]
        fn test_push_char_reports_validity_change() {
            let mut field = FormField::new(FieldKind::Email);
            // None -> Some(false)
            assert!(field.push_char('a'));
            // Some(false) -> Some(false)
            assert!(!field.push_char('b'));
            // Some(false) -> Some(true)
            assert!(field.push_char('@'));
            assert_eq!(field.value(), "ab@");
        }

        #[test]
        fn test_pop_char_revalidates() {
            let mut field = FormField::new(FieldKind::Email);
            for c in "x@".chars() {
                field.push_char(c);
            }
            assert!(field.pop_char());
            assert_eq!(field.value(), "x");
            assert_eq!(field.is_valid(), Some(false));
        }

        #[test]
        fn test_pop_char_on_empty_field_evaluates() {
            let mut field = FormField::new(FieldKind::Password);
            assert!(field.pop_char());
            assert_eq!(field.value(), "");
            assert_eq!(field.is_valid(), Some(false));
        }

        #[test]
        fn test_display_value_masks_per_char() {
            let mut field = FormField::new(FieldKind::Password);
            for c in "pässwort".chars() {
                field.push_char(c);
            }
            assert_eq!(field.display_value(true), "••••••••");
            assert_eq!(field.display_value(false), "pässwort");
        }
    }
}
