use serde::{Deserialize, Serialize};

/// One successfully delivered submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_plain_string_fields_on_the_wire() {
        let record = HistoryRecord {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            message: "Hi".to_string(),
            timestamp: "10/19/2026, 3:04:05 PM".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Alice",
                "email": "a@x.com",
                "message": "Hi",
                "timestamp": "10/19/2026, 3:04:05 PM",
            })
        );
    }
}
