//! Error dialog overlay

use crate::ui::layout::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 60;

/// Rows needed for the message plus title, spacing, hint and borders
fn dialog_height(error_message: &str) -> u16 {
    // Inner width excludes borders and one column of padding on each side
    let inner_width = usize::from(DIALOG_WIDTH - 4);
    let message_rows = error_message
        .lines()
        .map(|l| l.chars().count().div_ceil(inner_width).max(1))
        .sum::<usize>()
        .max(1);
    u16::try_from(message_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(6)
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]);

    let height = dialog_height(error_message);

    let area = centered_rect(DIALOG_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(error_message.lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dialog_shows_message_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, "Login failed: account locked"))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Login failed: account locked"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_dialog_fits_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, &"long ".repeat(100)))
            .unwrap();
    }

    #[test]
    fn test_height_counts_wrapped_rows() {
        assert_eq!(dialog_height(""), 7);
        assert_eq!(dialog_height("short"), 7);
        assert_eq!(dialog_height(&"x".repeat(57)), 8);
        assert_eq!(dialog_height("one\ntwo\nthree"), 9);
    }

    #[test]
    fn test_height_saturates_for_huge_messages() {
        let message = "line\n".repeat(70_000);
        assert_eq!(dialog_height(&message), u16::MAX);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, &message))
            .unwrap();
    }
}
