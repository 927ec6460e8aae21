pub mod clock;
pub mod delivery;
pub mod dispatcher;
pub mod form;
pub mod history;
pub mod notice;

pub use clock::{Clock, FixedClock, SystemClock};
pub use delivery::{DeliveryError, DeliveryProvider};
pub use dispatcher::SubmissionDispatcher;
pub use form::{ContactForm, SubmitOutcome};
pub use history::HistoryService;
pub use notice::NoticeTimer;
