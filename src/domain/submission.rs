use crate::domain::draft::Draft;

pub const SUCCESS_NOTICE: &str = "Message sent successfully!";

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed {
        reason: String,
    },
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether this status carries a transient notice that should auto-clear.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Succeeded => Some(Notice { kind: NoticeKind::Success, message: SUCCESS_NOTICE.to_string() }),
            Self::Failed { reason } => Some(Notice { kind: NoticeKind::Error, message: reason.clone() }),
            Self::Idle | Self::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: Draft,
    pub status: SubmissionStatus,
    /// Number of submission attempts started by this form.
    pub attempt: u64,
}

impl FormState {
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.status.notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_settled_statuses_show_a_notice() {
        assert_eq!(SubmissionStatus::Idle.notice(), None);
        assert_eq!(SubmissionStatus::Submitting.notice(), None);
        assert_eq!(SubmissionStatus::Succeeded.notice().map(|n| n.kind), Some(NoticeKind::Success));

        let failed = SubmissionStatus::Failed { reason: "nope".to_string() };
        assert_eq!(failed.notice(), Some(Notice { kind: NoticeKind::Error, message: "nope".to_string() }));
        assert!(failed.is_settled());
        assert!(!SubmissionStatus::Submitting.is_settled());
    }
}
