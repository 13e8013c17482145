//! Application state and core logic

use crate::auth::AuthSession;
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{
    activate, nav_items, AppState, HomeFocus, LoginForm, SubmitOutcome, ValidityCheck, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Injected session; the only source of login state
    auth: Box<dyn AuthSession>,
    /// Mounted only while the login view is shown
    pub login_form: Option<LoginForm>,
    validity_tx: UnboundedSender<ValidityCheck>,
    validity_rx: UnboundedReceiver<ValidityCheck>,
    validity_delay: Duration,
    /// Whether the password field renders as bullets
    pub mask_password: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, auth: Box<dyn AuthSession>) -> Self {
        let (validity_tx, validity_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            auth,
            login_form: None,
            validity_tx,
            validity_rx,
            validity_delay: config.validity_debounce(),
            mask_password: config.mask_password(),
            quit: false,
        };

        if app.auth.is_logged_in() {
            app.state.navigate(View::Home);
        } else {
            app.mount_login_form();
        }
        app
    }

    pub fn auth(&self) -> &dyn AuthSession {
        self.auth.as_ref()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Show the login view with a fresh form
    fn mount_login_form(&mut self) {
        // Checks still queued from a previous form must not reach the new one
        while self.validity_rx.try_recv().is_ok() {}
        self.login_form = Some(LoginForm::new(
            self.validity_delay,
            self.validity_tx.clone(),
        ));
        self.state.navigate(View::Login);
    }

    /// Drop the login form, cancelling any pending validity check
    fn unmount_login_form(&mut self) {
        self.login_form = None;
    }

    /// Apply validity checks the debouncer has delivered since the last frame
    pub fn process_validity_checks(&mut self) {
        while let Ok(check) = self.validity_rx.try_recv() {
            match self.login_form.as_mut() {
                Some(form) => {
                    form.apply_validity_check(check);
                }
                None => tracing::trace!("validity check arrived with no form mounted"),
            }
        }
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog swallows input until dismissed
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await,
            View::Home => self.handle_home_key(key).await,
        }
    }

    /// Handle keys in the Login view
    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Enter {
            self.submit_login().await;
            return Ok(());
        }

        let Some(form) = self.login_form.as_mut() else {
            return Ok(());
        };

        let with_modifier = platform::has_form_modifier(key.modifiers);
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Char('r') if with_modifier => form.reset(),
            KeyCode::Char(c) if !with_modifier => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    async fn submit_login(&mut self) {
        let Some(form) = self.login_form.as_mut() else {
            return;
        };

        match form.submit(self.auth.as_mut()).await {
            Ok(SubmitOutcome::LoginAttempted) => {
                self.unmount_login_form();
                self.state.navigate(View::Home);
                self.state.status_message = self
                    .auth
                    .session()
                    .map(|s| format!("Signed in as {}", s.identifier));
            }
            Ok(SubmitOutcome::Focused(_)) => {}
            Err(e) => self.push_error(format!("Login failed: {e}")),
        }
    }

    /// Handle keys in the Home view
    async fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        let item_count = nav_items(self.auth.is_logged_in()).len();
        let on_nav_bar = self.state.home_focus == HomeFocus::NavBar;

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.state.home_focus.toggle(),
            KeyCode::Left | KeyCode::Char('h') if on_nav_bar => {
                self.state.nav_selection.prev(item_count)
            }
            KeyCode::Right | KeyCode::Char('l') if on_nav_bar => {
                self.state.nav_selection.next(item_count)
            }
            KeyCode::Enter if on_nav_bar => self.activate_nav_item().await,
            KeyCode::Enter => self.logout().await,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    async fn activate_nav_item(&mut self) {
        let mut logout_requested = false;
        let item = activate(
            self.auth.is_logged_in(),
            self.state.nav_selection.index,
            || logout_requested = true,
        );

        if logout_requested {
            self.logout().await;
        } else if let Some(item) = item {
            // Users and Admin both point at the start page
            tracing::debug!(link = item.label(), "nav link activated");
            self.state.status_message = Some(format!("{}: start page", item.label()));
        }
    }

    async fn logout(&mut self) {
        match self.auth.logout().await {
            Ok(()) => {
                self.mount_login_form();
                self.state.status_message = Some("Signed out".to_string());
            }
            Err(e) => self.push_error(format!("Logout failed: {e}")),
        }
    }
}
