//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod navigation;

use crate::app::App;
use crate::state::{HomeFocus, View};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, main_area, status_area) = layout::create_layout(frame.area());

    // The nav bar only shows a selection while it owns focus
    let nav_selected = (app.state.current_view == View::Home
        && app.state.home_focus == HomeFocus::NavBar)
        .then_some(app.state.nav_selection.index);
    navigation::draw(frame, nav_area, app.auth().is_logged_in(), nav_selected);

    match app.state.current_view {
        View::Login => forms::draw_login(frame, main_area, app),
        View::Home => home::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
