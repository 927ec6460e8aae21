use crate::services::delivery::DeliveryError;
use std::time::Duration;
use thiserror::Error;

pub const GENERIC_FAILURE_NOTICE: &str = "Failed to send message. Please try again later.";
pub const TIMEOUT_NOTICE: &str = "The message service did not respond in time. Please try again.";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to persist history: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
    #[error("Delivery timed out after {0:?}")]
    TimedOut(Duration),
}

impl DispatchError {
    /// Text safe to show to the person filling in the form. The underlying
    /// cause is never included.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Delivery(_) => GENERIC_FAILURE_NOTICE,
            Self::TimedOut(_) => TIMEOUT_NOTICE,
        }
    }

    /// Short label used as a metrics attribute.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Delivery(DeliveryError::Rejected { .. }) => "rejected",
            Self::Delivery(DeliveryError::Unauthorized { .. }) => "unauthorized",
            Self::Delivery(DeliveryError::Other(_)) => "other",
            Self::TimedOut(_) => "timeout",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
