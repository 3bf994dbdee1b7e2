//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::state::{AppState, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows taken by the card: per field an input (3) and an error line (1),
/// a spacer, the button, and the card borders with margin
pub const FORM_HEIGHT: u16 = 2 * 4 + 1 + BUTTON_HEIGHT + 4;
pub const FORM_WIDTH: u16 = 56;

/// Draw the sign-up card inside `area`
pub fn draw_signup(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;

    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Username
            Constraint::Length(1),             // Username error
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    for (idx, name) in FieldName::ALL.iter().enumerate() {
        let field = form.field(*name);
        let is_active = form.active_field_name() == Some(*name);
        draw_field(frame, chunks[idx * 2], field, is_active);
        draw_field_error(frame, chunks[idx * 2 + 1], field);
    }

    draw_submit(frame, chunks[5], form);
}

fn draw_submit(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let status = form.status();
    render_button(
        frame,
        area,
        status.button_label(),
        form.is_submit_row_active(),
        !status.is_submitting(),
    );
}
