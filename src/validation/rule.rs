//! Field rules: a predicate paired with the message shown when it fails

use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Local part, `@`, dot-terminated domain labels, alphabetic TLD
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check that `value` has the shape of an email address.
///
/// The regex crate has no lookahead, so the leading-dot and double-dot
/// restrictions are checked separately.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_SHAPE.is_match(value)
}

/// Length in UTF-16 code units, so characters outside the BMP count twice
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

type Check = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single validation rule
#[derive(Clone)]
pub struct Rule {
    message: &'static str,
    check: Check,
}

impl Rule {
    /// Build a rule from an arbitrary predicate
    pub fn new(message: &'static str, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            message,
            check: Arc::new(check),
        }
    }

    /// Value must look like an email address
    pub fn email(message: &'static str) -> Self {
        Self::new(message, is_valid_email)
    }

    /// Value must end with `suffix`
    pub fn ends_with(suffix: &'static str, message: &'static str) -> Self {
        Self::new(message, move |value| value.ends_with(suffix))
    }

    /// Value must be at least `min` characters long
    pub fn min_len(min: usize, message: &'static str) -> Self {
        Self::new(message, move |value| text_len(value) >= min)
    }

    /// Value must be at most `max` characters long
    pub fn max_len(max: usize, message: &'static str) -> Self {
        Self::new(message, move |value| text_len(value) <= max)
    }

    /// Run the rule, returning its message on failure
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
