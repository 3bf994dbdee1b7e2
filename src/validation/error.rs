//! Field validation errors

use super::record::FieldName;
use std::collections::BTreeMap;
use thiserror::Error;

/// A violated rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: FieldName, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Every field that failed validation, at most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. A field keeps its first error.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.entry(error.field).or_insert(error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message for `field`, if it failed
    #[allow(dead_code)]
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
