/// Base class of the feedback element; the kind modifiers are appended to it.
pub const FEEDBACK_CLASS: &str = "form-message";

/// Where the form is in the current submission attempt.
///
/// `Succeeded` and `Failed` are resting states: they record how the last
/// attempt ended and, like `Idle`, accept a new attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_busy(self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FeedbackKind::Success => "form-message success",
            FeedbackKind::Error => "form-message error",
        }
    }

    /// Errors interrupt the screen reader; confirmations wait their turn.
    pub fn aria_role(self) -> &'static str {
        match self {
            FeedbackKind::Success => "status",
            FeedbackKind::Error => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub text: String,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_in_progress_states_are_busy() {
        assert!(!SubmissionState::Idle.is_busy());
        assert!(SubmissionState::Validating.is_busy());
        assert!(SubmissionState::Submitting.is_busy());
        assert!(!SubmissionState::Succeeded.is_busy());
        assert!(!SubmissionState::Failed.is_busy());
    }

    #[test]
    fn kinds_map_to_classes_and_roles() {
        assert_eq!(FeedbackKind::Error.class_name(), "form-message error");
        assert_eq!(FeedbackKind::Error.aria_role(), "alert");
        assert_eq!(FeedbackKind::Success.class_name(), "form-message success");
        assert!(FeedbackKind::Success.class_name().starts_with(FEEDBACK_CLASS));
    }
}
