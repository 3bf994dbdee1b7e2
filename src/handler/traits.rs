//! Trait abstraction for submit handlers to enable mocking in tests

use crate::validation::SignupRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a record that passed validation.
///
/// The form stays in the submitting state until `handle` resolves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn handle(&self, record: SignupRecord) -> Result<()>;
}
