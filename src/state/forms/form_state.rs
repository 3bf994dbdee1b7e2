//! Sign-up form controller

use super::field::FormField;
use crate::handler::SubmitHandler;
use crate::validation::{FieldName, Schema, SignupRecord, ValidationErrors};
use anyhow::Result;

/// Focus index of the submit button row (after the two fields)
pub const SUBMIT_ROW: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmitStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    /// Label for the submit button
    pub fn button_label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Submit",
            SubmitStatus::Submitting => "Submitting...",
        }
    }
}

/// Result of pressing submit, before the handler runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight
    Rejected,
    /// Validation failed; errors are attached to the fields
    Invalid(ValidationErrors),
    /// Validation passed; the form is now submitting and the record
    /// must be passed to the handler
    Accepted(SignupRecord),
}

/// Result of a full submit cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Invalid(ValidationErrors),
    Submitted(SignupRecord),
}

/// Email + username sign-up form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: FormField,
    pub username: FormField,
    pub active_field_index: usize,
    status: SubmitStatus,
    submit_count: u32,
    successful_submits: u32,
    schema: Schema,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::with_schema(Schema::signup())
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            email: FormField::email(FieldName::Email, "Email"),
            username: FormField::text(FieldName::Username, "Username"),
            active_field_index: 0,
            status: SubmitStatus::Idle,
            submit_count: 0,
            successful_submits: 0,
            schema,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Username => &self.username,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Username => &mut self.username,
        }
    }

    /// Field under focus, `None` on the submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Current values as a record
    pub fn values(&self) -> SignupRecord {
        SignupRecord::new(self.email.value(), self.username.value())
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Number of submit attempts that reached validation
    #[allow(dead_code)]
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    #[allow(dead_code)]
    pub fn successful_submits(&self) -> u32 {
        self.successful_submits
    }

    /// Snapshot of the errors currently attached to fields
    #[allow(dead_code)]
    pub fn errors(&self) -> ValidationErrors {
        FieldName::ALL
            .iter()
            .filter_map(|name| self.field(*name).error().cloned())
            .collect()
    }

    /// Set a field value.
    ///
    /// Once the form has been submitted, the field is re-validated on
    /// every change so its error tracks the input.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_value(value);
        self.revalidate(name);
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.field(name).value().to_string();
            value.push(c);
            self.set_value(name, value);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.field(name).value().to_string();
            if value.pop().is_some() {
                self.set_value(name, value);
            }
        }
    }

    fn revalidate(&mut self, name: FieldName) {
        if self.submit_count == 0 {
            return;
        }
        let error = self.schema.validate_field(name, self.field(name).value());
        self.field_mut(name).set_error(error);
    }

    /// Start a submission.
    ///
    /// Validation runs synchronously. On failure every field gets its
    /// first error and focus moves to the first invalid field. On success
    /// the form enters `Submitting` until `finish_submit` is called.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Rejected;
        }

        self.submit_count += 1;

        match self.schema.validate(&self.values()) {
            Ok(record) => {
                self.email.clear_error();
                self.username.clear_error();
                self.status = SubmitStatus::Submitting;
                SubmitAttempt::Accepted(record)
            }
            Err(errors) => {
                for name in FieldName::ALL {
                    self.field_mut(name).set_error(errors.get(name).cloned());
                }
                if let Some(index) = FieldName::ALL.iter().position(|n| errors.contains(*n)) {
                    self.active_field_index = index;
                }
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Mark the in-flight submission as done
    pub fn finish_submit(&mut self, outcome: &Result<()>) {
        if !self.is_submitting() {
            return;
        }
        self.status = SubmitStatus::Idle;
        if outcome.is_ok() {
            self.successful_submits += 1;
        }
    }

    /// Validate and, if valid, await `handler` in place.
    ///
    /// The app cannot hold the form across the await, so it runs the same
    /// cycle split in two: `begin_submit`, a spawned handler task, then
    /// `finish_submit` once the task is done.
    #[allow(dead_code)]
    pub async fn submit(&mut self, handler: &dyn SubmitHandler) -> Result<SubmitOutcome> {
        match self.begin_submit() {
            SubmitAttempt::Rejected => Ok(SubmitOutcome::Rejected),
            SubmitAttempt::Invalid(errors) => Ok(SubmitOutcome::Invalid(errors)),
            SubmitAttempt::Accepted(record) => {
                let result = handler.handle(record.clone()).await;
                self.finish_submit(&result);
                result.map(|()| SubmitOutcome::Submitted(record))
            }
        }
    }

    /// Restore the empty form. Returns false while submitting.
    pub fn reset(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.email.clear();
        self.username.clear();
        self.active_field_index = 0;
        self.submit_count = 0;
        self.successful_submits = 0;
        true
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        3 // email, username, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
