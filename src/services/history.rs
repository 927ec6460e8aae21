use crate::adapters::storage::KeyValueStore;
use crate::config::HistoryConfig;
use crate::domain::HistoryRecord;
use crate::error::HistoryError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Newest-first list of delivered submissions, persisted under a single key.
///
/// The list is only ever prepended to. Each append rewrites the whole list.
#[derive(Debug)]
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    max_records: usize,
    records: RwLock<Vec<HistoryRecord>>,
}

impl HistoryService {
    /// Reads the persisted list once. Missing, unreadable or malformed data
    /// yields an empty history; this never fails.
    pub async fn load(store: Arc<dyn KeyValueStore>, config: &HistoryConfig) -> Self {
        let mut records = match store.get(&config.key).await {
            Ok(Some(raw)) => serde_json::from_str::<Vec<HistoryRecord>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %config.key, error = %e, "Discarding malformed submission history");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %config.key, error = %e, "Failed to read submission history, starting empty");
                Vec::new()
            }
        };

        if config.max_records > 0 {
            records.truncate(config.max_records);
        }
        tracing::debug!(key = %config.key, count = records.len(), "Loaded submission history");

        Self { store, key: config.key.clone(), max_records: config.max_records, records: RwLock::new(records) }
    }

    /// Prepends a record and persists the full resulting list.
    ///
    /// # Errors
    /// Returns an error if the list cannot be serialized or written. The
    /// in-memory list keeps the record either way.
    pub async fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let mut records = self.records.write().await;
        records.insert(0, record);
        if self.max_records > 0 && records.len() > self.max_records {
            let dropped = records.len() - self.max_records;
            records.truncate(self.max_records);
            tracing::debug!(dropped, "Evicted oldest history records");
        }

        let serialized = serde_json::to_string(&*records)?;
        self.store.set(&self.key, &serialized).await?;
        Ok(())
    }

    pub async fn list(&self) -> Vec<HistoryRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;

    fn record(name: &str) -> HistoryRecord {
        HistoryRecord {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            message: "Hi".to_string(),
            timestamp: "10/19/2026, 3:04:05 PM".to_string(),
        }
    }

    fn config(max_records: usize) -> HistoryConfig {
        HistoryConfig { max_records, ..HistoryConfig::default() }
    }

    #[tokio::test]
    async fn test_load_treats_malformed_content_as_empty() {
        let store = Arc::new(MemoryStore::new().with_entry("contact_history", "not valid json"));
        let history = HistoryService::load(store, &config(0)).await;
        assert!(history.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_with_nothing_stored_is_empty() {
        let history = HistoryService::load(Arc::new(MemoryStore::new()), &config(0)).await;
        assert!(history.is_empty().await);
    }

    #[tokio::test]
    async fn test_append_prepends_and_rewrites_whole_list() {
        let store = Arc::new(MemoryStore::new());
        let history = HistoryService::load(Arc::clone(&store) as Arc<dyn KeyValueStore>, &config(0)).await;

        history.append(record("R1")).await.unwrap();
        history.append(record("R2")).await.unwrap();

        assert_eq!(history.list().await, vec![record("R2"), record("R1")]);

        let persisted: Vec<HistoryRecord> = serde_json::from_str(&store.raw("contact_history").unwrap()).unwrap();
        assert_eq!(persisted, vec![record("R2"), record("R1")]);
    }

    #[tokio::test]
    async fn test_append_evicts_oldest_beyond_cap() {
        let store = Arc::new(MemoryStore::new());
        let history = HistoryService::load(store, &config(2)).await;

        for name in ["A", "B", "C"] {
            history.append(record(name)).await.unwrap();
        }

        assert_eq!(history.list().await, vec![record("C"), record("B")]);
    }

    #[tokio::test]
    async fn test_load_trims_oversized_history() {
        let raw = serde_json::to_string(&vec![record("C"), record("B"), record("A")]).unwrap();
        let store = Arc::new(MemoryStore::new().with_entry("contact_history", raw));
        let history = HistoryService::load(store, &config(1)).await;

        assert_eq!(history.list().await, vec![record("C")]);
    }

    #[tokio::test]
    async fn test_history_survives_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let first = HistoryService::load(Arc::clone(&store), &config(0)).await;
        first.append(record("R1")).await.unwrap();

        let second = HistoryService::load(store, &config(0)).await;
        assert_eq!(second.list().await, vec![record("R1")]);
    }
}
