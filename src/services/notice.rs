use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs a single deferred action at a time. Scheduling a new one cancels the
/// one still pending, and dropping the timer cancels whatever is left.
#[derive(Debug)]
pub struct NoticeTimer {
    display: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl NoticeTimer {
    #[must_use]
    pub const fn new(display: Duration) -> Self {
        Self { display, pending: Mutex::new(None) }
    }

    #[must_use]
    pub const fn display(&self) -> Duration {
        self.display
    }

    /// Runs `clear` after the display interval unless cancelled or superseded first.
    ///
    /// Outside a Tokio runtime nothing is scheduled and the notice stays until
    /// the next submission replaces it.
    pub fn schedule<F>(&self, clear: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.swap(Some(token.clone())) {
            previous.cancel();
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No Tokio runtime available, notice will not auto-clear");
            return;
        };

        let display = self.display;
        handle.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    tracing::trace!("Notice clear superseded");
                }
                () = tokio::time::sleep(display) => clear(),
            }
        });
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.swap(None) {
            previous.cancel();
        }
    }

    fn swap(&self, next: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut guard = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
