use crate::config::DeliveryConfig;
use crate::domain::{DeliveryPayload, Draft, HistoryRecord};
use crate::error::DispatchError;
use crate::services::clock::Clock;
use crate::services::delivery::DeliveryProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Makes exactly one delivery attempt per call. Never retries.
#[derive(Debug, Clone)]
pub struct SubmissionDispatcher {
    provider: Arc<dyn DeliveryProvider>,
    clock: Arc<dyn Clock>,
    to_email: String,
    timeout: Duration,
}

impl SubmissionDispatcher {
    #[must_use]
    pub fn new(provider: Arc<dyn DeliveryProvider>, clock: Arc<dyn Clock>, config: &DeliveryConfig) -> Self {
        Self {
            provider,
            clock,
            to_email: config.to_email.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Stamps the draft with the current time, sends it and returns the record
    /// to keep once the service has acknowledged it.
    ///
    /// # Errors
    /// Returns `DispatchError::Delivery` if the provider fails and
    /// `DispatchError::TimedOut` if it does not answer within the configured timeout.
    #[tracing::instrument(level = "debug", skip_all, err(Display))]
    pub async fn dispatch(&self, draft: &Draft) -> Result<HistoryRecord, DispatchError> {
        let timestamp = self.clock.timestamp();
        let payload = DeliveryPayload::new(draft, &self.to_email, &timestamp);

        match timeout(self.timeout, self.provider.deliver(&payload)).await {
            Ok(Ok(())) => {
                tracing::debug!(timestamp = %payload.timestamp, "Delivery acknowledged");
                Ok(payload.into_record())
            }
            Ok(Err(e)) => Err(DispatchError::Delivery(e)),
            Err(_) => Err(DispatchError::TimedOut(self.timeout)),
        }
    }
}
