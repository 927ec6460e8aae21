#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod telemetry;

use crate::adapters::delivery::EmailJsProvider;
use crate::adapters::storage::{FileStore, KeyValueStore};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::{
    Clock, ContactForm, DeliveryProvider, HistoryService, NoticeTimer, SubmissionDispatcher, SystemClock,
};
use std::sync::Arc;
use std::time::Duration;

/// Wires a [`ContactForm`] from configuration plus injected collaborators.
///
/// Anything not injected falls back to the production implementation derived
/// from the config: EmailJS delivery, a file-backed store and the system clock.
#[derive(Debug)]
pub struct AppBuilder {
    config: Config,
    store: Option<Arc<dyn KeyValueStore>>,
    provider: Option<Arc<dyn DeliveryProvider>>,
    clock: Option<Arc<dyn Clock>>,
}

impl AppBuilder {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, store: None, provider: None, clock: None }
    }

    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn with_delivery_provider(mut self, provider: Arc<dyn DeliveryProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Loads the stored history and returns a ready form.
    ///
    /// # Errors
    /// Returns an error if the default HTTP client cannot be created or the
    /// delivery timeout is zero.
    pub async fn build(self) -> Result<ContactForm> {
        if self.config.delivery.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("delivery timeout must be at least one second"));
        }

        let provider: Arc<dyn DeliveryProvider> = match self.provider {
            Some(provider) => provider,
            None => Arc::new(EmailJsProvider::from_config(&self.config.delivery)?),
        };
        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::new(&self.config.history.dir)),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let history = HistoryService::load(store, &self.config.history).await;
        tracing::info!(records = history.len().await, "Contact form ready");

        let dispatcher = SubmissionDispatcher::new(provider, clock, &self.config.delivery);
        let notices = NoticeTimer::new(Duration::from_millis(self.config.notice.display_ms));

        Ok(ContactForm::new(dispatcher, Arc::new(history), notices))
    }
}
