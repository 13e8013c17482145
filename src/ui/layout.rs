//! Layout components (nav bar slot, content area, status bar)

use crate::app::App;
use crate::platform::RESET_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the navigation bar (top border + items + bottom border)
pub const NAV_HEIGHT: u16 = 3;

/// Split the screen into nav bar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Navigation bar
            Constraint::Min(0),             // Main content
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// A rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Session status
    match app.auth().session() {
        Some(session) => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
            spans.push(Span::styled(
                session.identifier,
                Style::default().fg(Color::White),
            ));
            spans.push(Span::raw(" | "));
        }
        None => spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red))),
    }

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Login => format!("Tab:next  Enter:login  {RESET_SHORTCUT}:reset  ^C:quit"),
        View::Home => "←/→:nav  Tab:focus  Enter:select  q:quit".to_string(),
    }
}
