//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let card = layout::centered_rect(content_area, forms::FORM_WIDTH, forms::FORM_HEIGHT);
    forms::draw_signup(frame, card, &app.state);

    layout::draw_status_bar(frame, status_area, &app.state);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::Form;
    use crate::validation::FieldName;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    /// (x, y) of the first occurrence of `text`; assumes single-width cells
    fn find(rows: &[String], text: &str) -> Option<(u16, u16)> {
        rows.iter().enumerate().find_map(|(y, row)| {
            row.find(text).map(|byte| {
                let x = row[..byte].chars().count();
                (x as u16, y as u16)
            })
        })
    }

    fn filled_app(email: &str, username: &str) -> App {
        let mut app = App::new(TuiConfig::default());
        app.state.form.set_value(FieldName::Email, email);
        app.state.form.set_value(FieldName::Username, username);
        app
    }

    #[test]
    fn test_no_error_lines_before_submit() {
        let app = filled_app("a@yahoo.com", "ab");
        let rows = rows(&render(&app));

        assert!(find(&rows, "Provider must be a gmail").is_none());
        assert!(find(&rows, "Username must be atleast").is_none());

        let (x, y) = find(&rows, "Submit").unwrap();
        assert!(find(&rows, "Submitting...").is_none());
        assert_eq!(render(&app)[(x, y)].fg, Color::White);
    }

    #[test]
    fn test_error_line_sits_beneath_failing_field_only() {
        let mut app = filled_app("a@yahoo.com", "validUser");
        app.state.form.begin_submit();
        let rows = rows(&render(&app));

        let (_, email_title) = find(&rows, " Email ").unwrap();
        let (_, error_row) = find(&rows, "Provider must be a gmail").unwrap();
        // Input box is three rows tall: title border, value, bottom border
        assert_eq!(error_row, email_title + 3);

        let (_, username_title) = find(&rows, " Username ").unwrap();
        let username_error = &rows[usize::from(username_title + 3)];
        assert!(username_error.trim_matches(|c| c == ' ' || c == '│').is_empty());
        assert!(find(&rows, "Username must").is_none());
    }

    #[test]
    fn test_both_error_lines_when_both_fail() {
        let mut app = filled_app("not-an-email", "12345678901");
        app.state.form.begin_submit();
        let rows = rows(&render(&app));

        let (_, email_title) = find(&rows, " Email ").unwrap();
        let (_, username_title) = find(&rows, " Username ").unwrap();
        assert_eq!(
            find(&rows, "Input must be a valid email").map(|(_, y)| y),
            Some(email_title + 3)
        );
        assert_eq!(
            find(&rows, "Username must not exceed 10 characters long").map(|(_, y)| y),
            Some(username_title + 3)
        );
    }

    #[test]
    fn test_button_disabled_while_submitting() {
        let mut app = filled_app("a@gmail.com", "validUser");
        app.state.form.set_active_field(2);
        app.state.form.begin_submit();
        assert!(app.state.form.is_submitting());

        let buffer = render(&app);
        let rows = rows(&buffer);

        let (x, y) = find(&rows, "Submitting...").unwrap();
        // Greyed out even though the button row has focus
        assert_eq!(buffer[(x, y)].fg, Color::DarkGray);
        assert!(find(&rows, "Provider must be a gmail").is_none());
    }
}
