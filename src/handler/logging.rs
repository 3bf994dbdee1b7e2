//! Handler that logs submitted records

use super::traits::SubmitHandler;
use crate::validation::SignupRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Logs each record as JSON, optionally after a simulated delay
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler {
    delay: Duration,
}

impl LoggingHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmitHandler for LoggingHandler {
    async fn handle(&self, record: SignupRecord) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let payload = serde_json::to_string(&record)?;
        tracing::info!(submitted_at = %Utc::now().to_rfc3339(), "Form submitted: {payload}");
        Ok(())
    }
}
