use crate::domain::{Draft, DraftField, FormState, HistoryRecord, SubmissionStatus, UnknownField};
use crate::error::GENERIC_FAILURE_NOTICE;
use crate::services::dispatcher::SubmissionDispatcher;
use crate::services::history::HistoryService;
use crate::services::notice::NoticeTimer;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Clone, Debug)]
struct Metrics {
    submissions: Counter<u64>,
    delivered: Counter<u64>,
    errors: Counter<u64>,
    rejected: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("portfolio-contact");
        Self {
            submissions: meter
                .u64_counter("contact_submissions_total")
                .with_description("Total number of submission attempts started")
                .build(),
            delivered: meter
                .u64_counter("contact_deliveries_total")
                .with_description("Total number of messages acknowledged by the delivery service")
                .build(),
            errors: meter
                .u64_counter("contact_delivery_errors_total")
                .with_description("Total number of failed delivery attempts")
                .build(),
            rejected: meter
                .u64_counter("contact_submissions_rejected_total")
                .with_description("Total number of submits ignored because one was already in flight")
                .build(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered(HistoryRecord),
    Failed { reason: String },
    /// Another submission was still in flight; nothing was sent.
    AlreadySubmitting,
}

/// Owns the draft and the submission status of one contact form.
///
/// Cloning yields another handle to the same form. At most one submission is
/// in flight per form at any time.
#[derive(Clone, Debug)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: Arc<watch::Sender<FormState>>,
    dispatcher: SubmissionDispatcher,
    history: Arc<HistoryService>,
    notices: NoticeTimer,
    metrics: Metrics,
}

impl ContactForm {
    #[must_use]
    pub fn new(dispatcher: SubmissionDispatcher, history: Arc<HistoryService>, notices: NoticeTimer) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            inner: Arc::new(Inner { state: Arc::new(state), dispatcher, history, notices, metrics: Metrics::new() }),
        }
    }

    pub fn set_field(&self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        self.inner.state.send_if_modified(|state| {
            if state.draft.get(field) == value {
                return false;
            }
            state.draft.set(field, value);
            true
        });
    }

    /// Same as [`Self::set_field`], keyed by the form input name.
    ///
    /// # Errors
    /// Returns `UnknownField` if `name` is not one of the draft fields.
    pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<DraftField>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn reset(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.draft.is_empty() {
                return false;
            }
            state.draft = Draft::default();
            true
        });
    }

    #[must_use]
    pub fn draft(&self) -> Draft {
        self.inner.state.borrow().draft.clone()
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.inner.state.borrow().status.clone()
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.inner.state.borrow().clone()
    }

    /// Renderers watch this to redraw on every draft or status change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn history(&self) -> &Arc<HistoryService> {
        &self.inner.history
    }

    /// Sends the current draft once.
    ///
    /// On success the record is added to the history and the draft is cleared.
    /// On failure the draft is left untouched so it can be resubmitted. Either
    /// way the resulting notice clears itself after the display interval.
    /// Calling this while a submission is in flight does nothing.
    ///
    /// The attempt runs on its own task, so dropping the returned future does
    /// not abort it: the status still settles and the notice still clears.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut claimed: Option<(Draft, u64)> = None;
        self.inner.state.send_if_modified(|state| {
            if state.status.is_submitting() {
                return false;
            }
            state.status = SubmissionStatus::Submitting;
            state.attempt += 1;
            claimed = Some((state.draft.clone(), state.attempt));
            true
        });

        let Some((draft, attempt)) = claimed else {
            tracing::debug!("Submit ignored, a submission is already in flight");
            self.inner.metrics.rejected.add(1, &[]);
            return SubmitOutcome::AlreadySubmitting;
        };

        self.inner.notices.cancel();
        self.inner.metrics.submissions.add(1, &[]);

        let submission_id = Uuid::now_v7();
        let span = tracing::info_span!("submit_contact", "submission.id" = %submission_id, attempt);
        let form = self.clone();
        let task = tokio::spawn(async move { form.run_submission(draft, attempt).await }.instrument(span));

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, attempt, "Submission task did not complete");
                let reason = GENERIC_FAILURE_NOTICE.to_string();
                self.inner.state.send_if_modified(|state| {
                    if state.attempt != attempt || !state.status.is_submitting() {
                        return false;
                    }
                    state.status = SubmissionStatus::Failed { reason: reason.clone() };
                    true
                });
                self.schedule_notice_clear(attempt);
                SubmitOutcome::Failed { reason }
            }
        }
    }

    async fn run_submission(&self, draft: Draft, attempt: u64) -> SubmitOutcome {
        let outcome = match self.inner.dispatcher.dispatch(&draft).await {
            Ok(record) => {
                self.inner.metrics.delivered.add(1, &[]);
                tracing::info!("Contact message delivered");

                if let Err(e) = self.inner.history.append(record.clone()).await {
                    tracing::warn!(error = %e, "Message delivered but history could not be persisted");
                }

                self.inner.state.send_modify(|state| {
                    state.draft = Draft::default();
                    state.status = SubmissionStatus::Succeeded;
                });
                SubmitOutcome::Delivered(record)
            }
            Err(e) => {
                self.inner.metrics.errors.add(1, &[KeyValue::new("reason", e.reason())]);
                tracing::error!(error = %e, "Failed to deliver contact message");

                let reason = e.user_message().to_string();
                self.inner.state.send_modify(|state| {
                    state.status = SubmissionStatus::Failed { reason: reason.clone() };
                });
                SubmitOutcome::Failed { reason }
            }
        };

        self.schedule_notice_clear(attempt);
        outcome
    }

    fn schedule_notice_clear(&self, attempt: u64) {
        let state = Arc::clone(&self.inner.state);
        self.inner.notices.schedule(move || {
            state.send_if_modified(|state| {
                if state.attempt != attempt || !state.status.is_settled() {
                    return false;
                }
                state.status = SubmissionStatus::Idle;
                true
            });
        });
    }
}
