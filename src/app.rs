//! Application state and core logic

use crate::config::TuiConfig;
use crate::handler::{LoggingHandler, SubmitHandler};
use crate::state::{AppState, Form, SubmitAttempt};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives validated records
    handler: Arc<dyn SubmitHandler>,
    /// Handler task for the submission in flight
    pending: Option<JoinHandle<Result<()>>>,
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that logs submitted records
    pub fn new(config: TuiConfig) -> Self {
        let handler = Arc::new(LoggingHandler::new(config.submit_delay()));
        Self::with_handler(config, handler)
    }

    pub fn with_handler(config: TuiConfig, handler: Arc<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::default(),
            handler,
            pending: None,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_row = self.state.form.is_submit_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::RESET_MODIFIER) => {
                self.reset()
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand the record to the handler task
    pub fn submit(&mut self) {
        match self.state.form.begin_submit() {
            SubmitAttempt::Rejected => {
                tracing::debug!("Submit ignored while a submission is in flight");
            }
            SubmitAttempt::Invalid(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                tracing::debug!(?fields, "Submit blocked: {errors}");
            }
            SubmitAttempt::Accepted(record) => {
                let handler = Arc::clone(&self.handler);
                self.pending = Some(tokio::spawn(async move { handler.handle(record).await }));
            }
        }
    }

    /// Clear the form, unless a submission is in flight
    fn reset(&mut self) {
        if self.state.form.reset() {
            self.state.set_status("Form reset");
        } else {
            self.state.set_status("Cannot reset while submitting");
        }
    }

    /// Collect the handler result once its task has finished
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return;
        }
        let Some(handle) = self.pending.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(result) => result,
            Err(err) => Err(anyhow!("submit handler panicked: {err}")),
        };
        self.state.form.finish_submit(&outcome);

        match outcome {
            Ok(()) => {
                self.state.set_status("Submitted!");
                if self.config.reset_after_submit() {
                    self.state.form.reset();
                }
            }
            Err(err) => {
                tracing::error!("Submit failed: {err:#}");
                self.push_error(format!("Submit failed: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::MockSubmitHandler;
    use crate::state::{SubmitStatus, SUBMIT_ROW};
    use crate::validation::{FieldName, SignupRecord};
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill(app: &mut App, email: &str, username: &str) {
        type_str(app, email);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, username);
    }

    async fn settle(app: &mut App) {
        while app.has_pending_submission() {
            tokio::time::sleep(Duration::from_millis(1)).await;
            app.poll_submission().await;
        }
    }

    /// Handler that blocks until released
    struct GatedHandler {
        gate: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SubmitHandler for GatedHandler {
        async fn handle(&self, _record: SignupRecord) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_valid_submit_calls_handler_with_record() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_handle()
            .with(eq(SignupRecord::new("a@gmail.com", "validUser")))
            .times(1)
            .returning(|_| Ok(()));
        let mut app = App::with_handler(TuiConfig::default(), Arc::new(handler));

        fill(&mut app, "a@gmail.com", "validUser");
        app.handle_key(ctrl('s')).unwrap();
        assert!(app.state.form.is_submitting());
        settle(&mut app).await;

        assert_eq!(app.state.form.status(), SubmitStatus::Idle);
        assert_eq!(app.state.form.successful_submits(), 1);
        assert_eq!(app.state.status_message.as_deref(), Some("Submitted!"));
        // Values are kept unless reset_after_submit is set
        assert_eq!(
            app.state.form.values(),
            SignupRecord::new("a@gmail.com", "validUser")
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_shows_errors_without_handler() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_handle().times(0);
        let mut app = App::with_handler(TuiConfig::default(), Arc::new(handler));

        fill(&mut app, "not-an-email", "12345678901");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.form.active_field(), SUBMIT_ROW);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!app.has_pending_submission());
        assert!(!app.state.form.is_submitting());
        assert_eq!(
            app.state.form.email.error_message(),
            Some("Input must be a valid email")
        );
        assert_eq!(
            app.state.form.username.error_message(),
            Some("Username must not exceed 10 characters long")
        );
    }

    #[tokio::test]
    async fn test_resubmit_while_submitting_is_ignored() {
        let handler = Arc::new(GatedHandler {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let mut app = App::with_handler(TuiConfig::default(), handler.clone());

        fill(&mut app, "a@gmail.com", "validUser");
        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(app.state.form.status().button_label(), "Submitting...");

        app.handle_key(ctrl('s')).unwrap();
        app.poll_submission().await;
        assert!(app.state.form.is_submitting());
        assert_eq!(app.state.form.submit_count(), 1);

        handler.gate.notify_one();
        settle(&mut app).await;

        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.state.form.status().button_label(), "Submit");
    }

    #[tokio::test]
    async fn test_handler_failure_opens_error_dialog() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_handle()
            .times(1)
            .returning(|_| Err(anyhow!("backend down")));
        let mut app = App::with_handler(TuiConfig::default(), Arc::new(handler));

        fill(&mut app, "a@gmail.com", "validUser");
        app.submit();
        settle(&mut app).await;

        assert!(!app.state.form.is_submitting());
        assert_eq!(
            app.state.current_error(),
            Some("Submit failed: backend down")
        );

        // Typing is blocked until the dialog is dismissed
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.form.username.value(), "validUser");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_reset_after_submit_clears_form() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_handle().times(1).returning(|_| Ok(()));
        let config = TuiConfig {
            reset_after_submit: Some(true),
            ..Default::default()
        };
        let mut app = App::with_handler(config, Arc::new(handler));

        fill(&mut app, "a@gmail.com", "validUser");
        app.submit();
        settle(&mut app).await;

        assert_eq!(app.state.form.values(), SignupRecord::default());
    }

    #[test]
    fn test_editing_keys() {
        let mut app = App::new(TuiConfig::default());

        type_str(&mut app, "a@gmail.comm");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_str(&mut app, "user");
        app.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(app.state.form.active_field_name(), Some(FieldName::Email));

        assert_eq!(
            app.state.form.values(),
            SignupRecord::new("a@gmail.com", "user")
        );
    }

    #[test]
    fn test_reset_shortcut() {
        let mut app = App::new(TuiConfig::default());
        type_str(&mut app, "something");

        app.handle_key(KeyEvent::new(
            KeyCode::Char('r'),
            crate::platform::RESET_MODIFIER,
        ))
        .unwrap();

        assert_eq!(app.state.form.values(), SignupRecord::default());
        assert_eq!(app.state.status_message.as_deref(), Some("Form reset"));
    }

    #[test]
    fn test_escape_quits() {
        let mut app = App::new(TuiConfig::default());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }
}
