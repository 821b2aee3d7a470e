/// Lifecycle of the new-post form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// The post was created and the browser followed the redirect.
    Navigated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Invalid,
    Created,
}

impl SubmissionState {
    /// Submitting twice from one page does nothing; the button is disabled.
    pub fn submit(self) -> SubmissionState {
        match self {
            SubmissionState::Idle => SubmissionState::Submitting,
            other => other,
        }
    }

    pub fn resolve(self, resolution: Resolution) -> SubmissionState {
        match (self, resolution) {
            (SubmissionState::Submitting, Resolution::Invalid) => SubmissionState::Idle,
            (SubmissionState::Submitting, Resolution::Created) => SubmissionState::Navigated,
            (other, _) => other,
        }
    }

    pub fn is_pending(self) -> bool {
        self == SubmissionState::Submitting
    }

    pub fn controls_disabled(self) -> bool {
        self != SubmissionState::Idle
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SubmissionState::Idle => "Create Post",
            SubmissionState::Submitting | SubmissionState::Navigated => "Wait...",
        }
    }
}

impl From<&crate::action::ActionOutcome> for Resolution {
    fn from(outcome: &crate::action::ActionOutcome) -> Resolution {
        match outcome {
            crate::action::ActionOutcome::Invalid(_) => Resolution::Invalid,
            crate::action::ActionOutcome::Created(_) => Resolution::Created,
        }
    }
}
