//! Sign-up schema validation
//!
//! Each field owns an ordered list of rules. Validation stops at the first
//! failing rule of a field, so a field reports at most one message.

mod error;
mod record;
mod rule;
mod schema;

pub use error::{FieldError, ValidationErrors};
pub use record::{FieldName, SignupRecord};
pub use schema::Schema;
