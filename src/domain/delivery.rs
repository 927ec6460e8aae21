use crate::domain::draft::Draft;
use crate::domain::history::HistoryRecord;
use serde::Serialize;

/// Template parameters handed to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPayload {
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
    pub timestamp: String,
}

impl DeliveryPayload {
    #[must_use]
    pub fn new(draft: &Draft, to_email: &str, timestamp: &str) -> Self {
        Self {
            from_name: draft.name.clone(),
            from_email: draft.email.clone(),
            to_email: to_email.to_string(),
            message: draft.message.clone(),
            timestamp: timestamp.to_string(),
        }
    }

    #[must_use]
    pub fn into_record(self) -> HistoryRecord {
        HistoryRecord { name: self.from_name, email: self.from_email, message: self.message, timestamp: self.timestamp }
    }
}
