//! Form domain layer
//!
//! Field bindings and the submit lifecycle for the sign-up form.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, SignupForm, SubmitAttempt};

#[cfg(test)]
pub use form_state::{SubmitStatus, SUBMIT_ROW};
