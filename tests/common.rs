#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_contact::AppBuilder;
use portfolio_contact::adapters::storage::KeyValueStore;
use portfolio_contact::config::Config;
use portfolio_contact::domain::DeliveryPayload;
use portfolio_contact::error::StorageError;
use portfolio_contact::services::{ContactForm, DeliveryError, DeliveryProvider, FixedClock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::macros::datetime;

pub const TIMESTAMP: &str = "10/19/2026, 3:04:05 PM";

/// Records every payload and answers according to the `fail` switch.
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub payloads: Mutex<Vec<DeliveryPayload>>,
    pub fail: AtomicBool,
    pub delay: Option<Duration>,
}

impl FakeProvider {
    pub fn failing() -> Self {
        Self { fail: AtomicBool::new(true), ..Self::default() }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay), ..Self::default() }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait]
impl DeliveryProvider for FakeProvider {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        self.payloads.lock().unwrap().push(payload.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected { status: 400, detail: "The service ID is invalid".to_string() });
        }
        Ok(())
    }
}

/// A store whose disk is gone: every read and write fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk unavailable")))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk unavailable")))
    }
}

pub fn get_test_config() -> Config {
    let mut config = Config::default();
    config.delivery.service_id = "service_test".to_string();
    config.delivery.template_id = "template_test".to_string();
    config.delivery.public_key = "public_test".to_string();
    config.delivery.to_email = "owner@example.com".to_string();
    config.notice.display_ms = 100;
    config
}

pub fn setup_tracing() {
    portfolio_contact::telemetry::init_test_telemetry();
}

pub async fn build_form(config: Config, store: Arc<dyn KeyValueStore>, provider: Arc<FakeProvider>) -> ContactForm {
    setup_tracing();
    AppBuilder::new(config)
        .with_store(store)
        .with_delivery_provider(provider)
        .with_clock(Arc::new(FixedClock(datetime!(2026-10-19 15:04:05 UTC))))
        .build()
        .await
        .expect("Failed to build contact form")
}
