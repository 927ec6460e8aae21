use std::sync::Once;
use time::{OffsetDateTime, UtcOffset};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// `10/19/2026, 3:04:05 PM`
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> OffsetDateTime;

    /// Human-readable local time used to stamp submissions.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to format timestamp, using unix seconds");
        at.unix_timestamp().to_string()
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        local_or_utc(OffsetDateTime::now_local())
    }
}

static UTC_FALLBACK: Once = Once::new();

/// Falls back to UTC when the local offset is unknown. The timestamp text
/// carries no zone, so the first fallback is logged.
fn local_or_utc<E: std::fmt::Display>(local: Result<OffsetDateTime, E>) -> OffsetDateTime {
    local.unwrap_or_else(|e| {
        UTC_FALLBACK.call_once(|| {
            tracing::warn!(error = %e, "Local UTC offset unavailable, submission timestamps will be in UTC");
        });
        OffsetDateTime::now_utc()
    })
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
