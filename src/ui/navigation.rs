//! Navigation bar rendering

use crate::state::nav_items;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the navigation bar.
///
/// Renders only the title while logged out. `selected` highlights an item
/// when the bar has focus.
pub fn draw(frame: &mut Frame, area: Rect, is_logged_in: bool, selected: Option<usize>) {
    let mut spans = vec![Span::styled(
        " Session ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (idx, item) in nav_items(is_logged_in).iter().enumerate() {
        let style = if selected == Some(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if item.is_action() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!(" {} ", item.label()), style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(is_logged_in: bool, selected: Option<usize>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), is_logged_in, selected))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_logged_out_shows_no_links() {
        let screen = render(false, None);
        assert!(screen.contains("Session"));
        for label in ["Users", "Admin", "Logout"] {
            assert!(!screen.contains(label), "{label} should be hidden");
        }
    }

    #[test]
    fn test_logged_in_shows_all_links() {
        let screen = render(true, Some(0));
        for label in ["Users", "Admin", "Logout"] {
            assert!(screen.contains(label), "{label} should be shown");
        }
    }
}
