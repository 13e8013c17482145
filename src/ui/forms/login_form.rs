//! Login form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{LoginField, LoginForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 50;
const CARD_HEIGHT: u16 = 15;

/// Draw the login card
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.login_form.as_ref() else {
        return;
    };

    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Form status
            Constraint::Length(BUTTON_HEIGHT), // Login button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let active = form.active_field();
    draw_field(
        frame,
        chunks[0],
        form.email(),
        active == LoginField::Email,
        false,
    );
    draw_field(
        frame,
        chunks[1],
        form.password(),
        active == LoginField::Password,
        app.mask_password,
    );

    frame.render_widget(Paragraph::new(form_status_line(form)), chunks[2]);

    let button_area = centered_rect(16, BUTTON_HEIGHT, chunks[3]);
    render_button(
        frame,
        button_area,
        "Login",
        active == LoginField::Submit,
        Color::Green,
    );
}

/// One-line summary of the debounced form validity
fn form_status_line(form: &LoginForm) -> Line<'static> {
    if form.is_check_pending() {
        Line::from(Span::styled(
            "Checking…",
            Style::default().fg(Color::Yellow),
        ))
    } else if form.form_is_valid() {
        Line::from(Span::styled(
            "✓ Ready to sign in",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "Email needs an @, password more than 6 characters",
            Style::default().fg(Color::DarkGray),
        ))
    }
}
