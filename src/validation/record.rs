//! The record a sign-up form produces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the fields on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Email,
    Username,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 2] = [FieldName::Email, FieldName::Username];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Username => "username",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw or validated form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    pub username: String,
}

impl SignupRecord {
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
        }
    }

    /// Read a field by name
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::Username => &self.username,
        }
    }
}
