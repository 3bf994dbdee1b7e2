//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border colour for a field: errors win over focus
fn border_color(field: &FormField, is_active: bool) -> Color {
    if field.has_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Placeholder shown in an empty, unfocused input
fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "you@gmail.com",
        FieldKind::Text => "(empty)",
    }
}

/// Draw a single-line input box titled with the field label
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value = field.display_value();

    let mut spans = if value.is_empty() && !is_active {
        vec![Span::styled(
            placeholder(field.kind),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(value, Style::default().fg(Color::White))]
    };
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the field's error message, if it has one
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(message) = field.error_message() {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldError, FieldName};

    #[test]
    fn test_error_border_overrides_focus() {
        let mut field = FormField::email(FieldName::Email, "Email");
        assert_eq!(border_color(&field, false), Color::DarkGray);
        assert_eq!(border_color(&field, true), Color::Cyan);

        field.set_error(Some(FieldError::new(
            FieldName::Email,
            "Provider must be a gmail",
        )));
        assert_eq!(border_color(&field, true), Color::Red);
    }

    #[test]
    fn test_placeholder_by_kind() {
        assert_eq!(placeholder(FieldKind::Email), "you@gmail.com");
        assert_eq!(placeholder(FieldKind::Text), "(empty)");
    }
}
