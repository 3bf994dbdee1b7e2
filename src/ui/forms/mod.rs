//! Form rendering module
//!
//! - `field_renderer`: input boxes and inline error lines
//! - `signup_form`: the sign-up card

mod field_renderer;
mod signup_form;

pub use signup_form::{draw_signup, FORM_HEIGHT, FORM_WIDTH};
