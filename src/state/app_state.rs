//! Application state definitions

use super::navigation::NavSelection;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    /// Landing page after signing in
    Home,
}

/// Focus state for the home view (navigation bar vs logout button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    NavBar,
    LogoutButton,
}

impl HomeFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::NavBar => Self::LogoutButton,
            Self::LogoutButton => Self::NavBar,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub home_focus: HomeFocus,
    pub nav_selection: NavSelection,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    /// The error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Switch views, resetting per-view focus
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(?view, "navigate");
        self.current_view = view;
        self.home_focus = HomeFocus::default();
        self.nav_selection = NavSelection::default();
    }
}
