//! Ordered rule tables per field

use super::error::{FieldError, ValidationErrors};
use super::record::{FieldName, SignupRecord};
use super::rule::Rule;

/// Required provider suffix for sign-up emails
pub const GMAIL_SUFFIX: &str = "@gmail.com";
pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 10;

/// Rules for one field, evaluated in declaration order
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: FieldName,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Append a rule (builder style)
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Error for the first rule `value` violates, if any
    pub fn first_failure(&self, value: &str) -> Option<FieldError> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value).err())
            .map(|message| FieldError::new(self.field, message))
    }
}

/// Validation schema for a whole record
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// The sign-up form rules
    pub fn signup() -> Self {
        Self::new(vec![
            FieldSchema::new(FieldName::Email)
                .rule(Rule::email("Input must be a valid email"))
                .rule(Rule::ends_with(GMAIL_SUFFIX, "Provider must be a gmail")),
            FieldSchema::new(FieldName::Username)
                .rule(Rule::min_len(
                    USERNAME_MIN_LEN,
                    "Username must be atleast 4 characters long",
                ))
                .rule(Rule::max_len(
                    USERNAME_MAX_LEN,
                    "Username must not exceed 10 characters long",
                )),
        ])
    }

    /// Validate a single field. Fields without rules always pass.
    pub fn validate_field(&self, field: FieldName, value: &str) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|schema| schema.field == field)
            .and_then(|schema| schema.first_failure(value))
    }

    /// Validate a full record.
    ///
    /// On success the record comes back unchanged. On failure every failing
    /// field reports the first rule it violated.
    pub fn validate(&self, record: &SignupRecord) -> Result<SignupRecord, ValidationErrors> {
        let errors: ValidationErrors = self
            .fields
            .iter()
            .filter_map(|schema| schema.first_failure(record.value(schema.field)))
            .collect();

        if errors.is_empty() {
            Ok(record.clone())
        } else {
            Err(errors)
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::signup()
    }
}
