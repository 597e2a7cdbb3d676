use std::cell::Cell;

use tracing::{debug, info, warn};

use super::error::SubmissionError;
use super::state::{FeedbackMessage, SubmissionState};
use super::transport::Transport;
use super::validation::{FormInput, ValidationError};
use crate::config::ContactConfig;

/// The page surface the controller drives. Methods take `&self` because the
/// DOM is shared and mutated through handles.
pub trait FormView {
    fn read_input(&self) -> FormInput;
    fn endpoint(&self) -> String;
    fn clear_fields(&self);
    fn reset_feedback(&self);
    fn show_feedback(&self, feedback: &FeedbackMessage);
    /// Disables the submit control and swaps in `label`, returning the label
    /// it replaced.
    fn begin_pending(&self, label: &str) -> String;
    fn end_pending(&self, original_label: &str);
    fn reveal_feedback(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Invalid(ValidationError),
    Failed(SubmissionError),
    /// A submit arrived while another was still in flight.
    Ignored,
}

pub struct FormSubmissionController<V, T> {
    view: V,
    transport: T,
    config: ContactConfig,
    state: Cell<SubmissionState>,
}

impl<V: FormView, T: Transport> FormSubmissionController<V, T> {
    pub fn new(view: V, transport: T, config: ContactConfig) -> Self {
        Self {
            view,
            transport,
            config,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Runs one full attempt: read, validate, and send if valid.
    pub async fn handle_submit(&self) -> SubmissionOutcome {
        if self.state.get().is_busy() {
            debug!("Submit ignored, a submission is already in flight");
            return SubmissionOutcome::Ignored;
        }

        self.view.reset_feedback();
        self.state.set(SubmissionState::Validating);
        let input = self.view.read_input();

        match self.validate(&input) {
            Ok(()) => self.submit(&input).await,
            Err(err) => SubmissionOutcome::Invalid(err),
        }
    }

    /// Validates `input`, showing the first problem in the feedback element.
    pub fn validate(&self, input: &FormInput) -> Result<(), ValidationError> {
        input.validate().map_err(|err| {
            debug!("Contact form rejected locally: {}", err);
            self.view.show_feedback(&FeedbackMessage::error(err.to_string()));
            self.state.set(SubmissionState::Idle);
            err
        })
    }

    /// Sends already-validated input. The submit control is released and the
    /// feedback scrolled into view exactly once, whatever the outcome.
    pub async fn submit(&self, input: &FormInput) -> SubmissionOutcome {
        let original_label = self.view.begin_pending(&self.config.pending_label);
        self.state.set(SubmissionState::Submitting);
        let _in_flight = scopeguard::guard(original_label, |label| {
            self.view.end_pending(&label);
            self.view.reveal_feedback();
        });

        let endpoint = self.view.endpoint();
        let result = match self.transport.post_form(&endpoint, input).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => Err(SubmissionError::rejected(response.status, &response.body)),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                info!("Contact form sent");
                self.view.clear_fields();
                self.view.show_feedback(&FeedbackMessage::success(self.config.success_text.as_str()));
                self.state.set(SubmissionState::Succeeded);
                SubmissionOutcome::Sent
            }
            Err(err) => {
                warn!("Contact form submission failed: {:?}", err);
                self.view.show_feedback(&FeedbackMessage::error(err.to_string()));
                self.state.set(SubmissionState::Failed);
                SubmissionOutcome::Failed(err)
            }
        }
    }
}
