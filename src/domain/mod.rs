pub mod delivery;
pub mod draft;
pub mod history;
pub mod submission;

pub use delivery::DeliveryPayload;
pub use draft::{Draft, DraftField, UnknownField};
pub use history::HistoryRecord;
pub use submission::{FormState, Notice, NoticeKind, SubmissionStatus};
