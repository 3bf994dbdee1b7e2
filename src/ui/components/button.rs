//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button.
///
/// A disabled button is greyed out and never shows focus.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = if !is_enabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    } else if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Blue),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
