//! Typed-phrase confirmation gate for destructive workspace actions.
//!
//! Ownership transfer and workspace deletion both require the user to type
//! an exact phrase before the destructive call is allowed to start.

use chrono::{DateTime, Utc};

use mitto_core::AppResult;

use crate::notice::Notice;

/// Lifecycle of one confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    /// Waiting for the user to type the phrase.
    Confirming,
    /// The destructive call is in flight.
    Submitting,
    /// The call succeeded; the dialog shows the terminal message.
    Completed,
}

/// A destructive action guarded by an exact typed phrase.
#[derive(Debug, Clone)]
pub struct ConfirmationGate {
    required_phrase: String,
    entered: String,
    state: ConfirmationState,
    error: Option<Notice>,
}

impl ConfirmationGate {
    /// Creates a gate requiring `phrase` to be typed exactly.
    #[must_use]
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            required_phrase: phrase.into(),
            entered: String::new(),
            state: ConfirmationState::Confirming,
            error: None,
        }
    }

    /// Returns the phrase the user must type.
    #[must_use]
    pub fn required_phrase(&self) -> &str {
        self.required_phrase.as_str()
    }

    /// Returns the dialog lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConfirmationState {
        self.state
    }

    /// Records what the user has typed so far.
    pub fn enter(&mut self, text: impl Into<String>) {
        if self.state == ConfirmationState::Confirming {
            self.entered = text.into();
        }
    }

    /// Returns whether the typed text matches exactly (case-sensitive) and
    /// the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == ConfirmationState::Confirming && self.entered == self.required_phrase
    }

    /// Starts the destructive call. Returns `false` when the phrase does
    /// not match or a call is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.state = ConfirmationState::Submitting;
        self.error = None;
        true
    }

    /// Records the outcome of the destructive call.
    ///
    /// Failure returns to the confirming phase with the typed phrase kept,
    /// so the user corrects nothing and simply retries.
    pub fn complete_submit(&mut self, outcome: AppResult<()>, fallback: &str, now: DateTime<Utc>) {
        if self.state != ConfirmationState::Submitting {
            return;
        }

        match outcome {
            Ok(()) => self.state = ConfirmationState::Completed,
            Err(error) => {
                self.state = ConfirmationState::Confirming;
                self.error = Some(Notice::from_error(&error, fallback, now));
            }
        }
    }

    /// Returns the inline error if still within its display window.
    #[must_use]
    pub fn error(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.error.as_ref().filter(|notice| notice.is_visible(now))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use mitto_core::AppError;

    use super::{ConfirmationGate, ConfirmationState};

    #[test]
    fn submit_requires_the_exact_phrase() {
        let mut gate = ConfirmationGate::new("TRANSFER");
        assert!(!gate.can_submit());

        gate.enter("transfer");
        assert!(!gate.can_submit());

        gate.enter("TRANSFER ");
        assert!(!gate.can_submit());

        gate.enter("TRANSFER");
        assert!(gate.can_submit());
        assert!(gate.begin_submit());
        assert_eq!(gate.state(), ConfirmationState::Submitting);
    }

    #[test]
    fn double_submit_is_rejected_while_in_flight() {
        let mut gate = ConfirmationGate::new("TRANSFER");
        gate.enter("TRANSFER");
        assert!(gate.begin_submit());
        assert!(!gate.begin_submit());
    }

    #[test]
    fn failure_returns_to_confirming_with_the_phrase_kept() {
        let now = Utc::now();
        let mut gate = ConfirmationGate::new("TRANSFER");
        gate.enter("TRANSFER");
        gate.begin_submit();
        gate.complete_submit(
            Err(AppError::Api("new owner not found".to_owned())),
            "Transfer failed",
            now,
        );

        assert_eq!(gate.state(), ConfirmationState::Confirming);
        assert_eq!(
            gate.error(now).map(super::Notice::message),
            Some("new owner not found")
        );
        assert!(gate.can_submit());
    }

    #[test]
    fn success_is_terminal() {
        let now = Utc::now();
        let mut gate = ConfirmationGate::new("Acme Inc");
        gate.enter("Acme Inc");
        gate.begin_submit();
        gate.complete_submit(Ok(()), "Delete failed", now);

        assert_eq!(gate.state(), ConfirmationState::Completed);
        assert!(!gate.begin_submit());
        gate.enter("Acme Inc");
        assert!(!gate.can_submit());
    }
}
