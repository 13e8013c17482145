//! Field validation predicates

/// Passwords must be strictly longer than this once surrounding whitespace is trimmed
pub const PASSWORD_MIN_EXCLUSIVE: usize = 6;

/// An email is accepted as soon as it contains an `@`
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}

/// A password is accepted when its trimmed length exceeds [`PASSWORD_MIN_EXCLUSIVE`]
pub fn is_valid_password(value: &str) -> bool {
    value.trim().chars().count() > PASSWORD_MIN_EXCLUSIVE
}
