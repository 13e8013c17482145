//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Reset form shortcut display
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Whether `modifiers` carry the platform form modifier (Ctrl always works)
pub fn has_form_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(FORM_MODIFIER | KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_always_counts() {
        assert!(has_form_modifier(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_plain_key_does_not_count() {
        assert!(!has_form_modifier(KeyModifiers::NONE));
        assert!(!has_form_modifier(KeyModifiers::SHIFT));
    }
}
