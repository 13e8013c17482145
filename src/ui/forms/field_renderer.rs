//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border color for a field: active wins, then invalid, then idle.
///
/// A field that has not been evaluated yet is never shown as invalid.
pub fn field_color(is_active: bool, is_valid: Option<bool>) -> Color {
    match (is_active, is_valid) {
        (false, Some(false)) => Color::Red,
        (true, Some(false)) => Color::LightRed,
        (true, _) => Color::Cyan,
        (false, _) => Color::DarkGray,
    }
}

/// Draw a single-line form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, masked: bool) {
    let color = field_color(is_active, field.is_valid());

    let display_value = field.display_value(masked);
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, Style::default().fg(Color::White)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = if field.is_valid() == Some(false) {
        format!(" {} (invalid) ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}
