use crate::domain::DeliveryPayload;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery service rejected the message (status {status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("Delivery service refused the credentials (status {status})")]
    Unauthorized { status: u16 },
    #[error("External service error: {0}")]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait DeliveryProvider: Send + Sync + std::fmt::Debug {
    /// Hands one message to the external delivery service.
    ///
    /// # Errors
    /// Returns `DeliveryError::Unauthorized` when the configured credentials are refused,
    /// `DeliveryError::Rejected` for any other refusal and `DeliveryError::Other` when the
    /// service could not be reached.
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError>;
}
