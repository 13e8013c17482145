//! Home view: the landing card shown after signing in

use crate::app::App;
use crate::state::HomeFocus;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(50, 11, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Greeting
            Constraint::Length(BUTTON_HEIGHT), // Logout
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        "Welcome back!",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(session) = app.auth().session() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            session.identifier,
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(Span::styled(
            format!("since {}", session.started_at.format("%Y-%m-%d %H:%M UTC")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    render_button(
        frame,
        centered_rect(16, BUTTON_HEIGHT, chunks[1]),
        "Logout",
        app.state.home_focus == HomeFocus::LogoutButton,
        Color::Yellow,
    );
}
