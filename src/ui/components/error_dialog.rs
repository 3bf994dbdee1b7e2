//! Error dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;
/// 2 chars padding on each side
const PADDING: u16 = 4;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let lines = wrap_text(message, (MAX_WIDTH - PADDING) as usize);

    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(hint.width()))
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + PADDING + 2).min(MAX_WIDTH).min(area.width);
    // title + blank + message + blank + hint + borders
    let height = (lines.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap to `max_width` columns
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + word.chars().count() + 1 > max_width
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("Submit failed", 20), vec!["Submit failed"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("Submit failed: backend down", 15),
            vec!["Submit failed:", "backend down"]
        );
    }

    #[test]
    fn test_wrap_measures_characters() {
        // 9 characters, 18 bytes
        assert_eq!(wrap_text("ääää äääää", 10), vec!["ääää äääää"]);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
