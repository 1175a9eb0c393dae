//! Modal editor for one provider's credential settings.
//!
//! The editor is a single state machine per panel. Only one modal can be
//! open at a time, masked secrets are never redisplayed, and closing a
//! dirty form always passes through an explicit confirmation step.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use mitto_core::AppResult;
use mitto_domain::{FieldKind, Provider, is_masked_placeholder};

use crate::notice::Notice;

/// Success message posted after a completed save.
const SAVED_MESSAGE: &str = "Settings saved";

/// Fallback error message when a credential save fails without a server
/// message.
const SAVE_FAILED_MESSAGE: &str = "Failed to save settings";

/// What `request_close` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The editor closed.
    Closed,
    /// Unsaved edits exist; the editor is asking for confirmation.
    ConfirmRequested,
    /// The request was ignored (a save is in flight, or nothing was open).
    Ignored,
}

/// Editable form for one provider, built from its static field schema.
#[derive(Debug, Clone)]
pub struct CredentialForm {
    provider: Provider,
    values: BTreeMap<String, String>,
    masked_keys: BTreeSet<String>,
    dirty: bool,
    notice: Option<Notice>,
}

impl CredentialForm {
    /// Builds the form from fetched settings, applying the masking rule to
    /// secret fields.
    ///
    /// A masked placeholder becomes an empty editable value plus a masked
    /// marker; the placeholder text itself is discarded so it can never be
    /// echoed back to the backend.
    fn from_fetched(provider: Provider, fetched: &BTreeMap<String, String>) -> Self {
        let mut values = BTreeMap::new();
        let mut masked_keys = BTreeSet::new();

        for field in provider.field_schema() {
            let fetched_value = fetched.get(field.key).map(String::as_str).unwrap_or("");
            match field.kind {
                FieldKind::Secret if is_masked_placeholder(fetched_value) => {
                    values.insert(field.key.to_owned(), String::new());
                    masked_keys.insert(field.key.to_owned());
                }
                FieldKind::Secret | FieldKind::Text | FieldKind::ReadonlySecret => {
                    values.insert(field.key.to_owned(), fetched_value.to_owned());
                }
            }
        }

        Self {
            provider,
            values,
            masked_keys,
            dirty: false,
            notice: None,
        }
    }

    /// An all-empty form, used when the settings fetch fails and the user
    /// re-enters everything from scratch.
    fn empty(provider: Provider) -> Self {
        Self::from_fetched(provider, &BTreeMap::new())
    }

    /// Returns which provider this form edits.
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the current editable value for a field key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns whether a secret exists server-side for this key but its
    /// plaintext is withheld. Drives the "configured" placeholder hint.
    #[must_use]
    pub fn is_masked(&self, key: &str) -> bool {
        self.masked_keys.contains(key)
    }

    /// Returns whether the form has unsaved edits.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Builds the save payload in schema order.
    ///
    /// Secret fields left empty are omitted entirely so the backend keeps
    /// the stored secret. Read-only fields are echoed verbatim.
    fn payload(&self) -> BTreeMap<String, String> {
        let mut payload = BTreeMap::new();
        for field in self.provider.field_schema() {
            let value = self.values.get(field.key).map(String::as_str).unwrap_or("");
            if field.kind == FieldKind::Secret && value.is_empty() {
                continue;
            }
            payload.insert(field.key.to_owned(), value.to_owned());
        }

        payload
    }
}

/// The editor's lifecycle.
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No modal is open.
    #[default]
    Closed,
    /// Modal is open, settings fetch in flight.
    Opening {
        /// Provider being opened.
        provider: Provider,
    },
    /// Form is editable.
    Ready(CredentialForm),
    /// A save is in flight; edits and close requests are ignored.
    Saving(CredentialForm),
    /// The user tried to close a dirty form and must confirm the discard.
    ConfirmDiscard(CredentialForm),
}

/// Per-panel credential editor. Holds at most one open modal.
#[derive(Debug, Clone, Default)]
pub struct CredentialEditor {
    state: EditorState,
}

impl CredentialEditor {
    /// Creates a closed editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Returns the provider of the open modal, if any.
    #[must_use]
    pub fn provider(&self) -> Option<Provider> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::Opening { provider } => Some(*provider),
            EditorState::Ready(form)
            | EditorState::Saving(form)
            | EditorState::ConfirmDiscard(form) => Some(form.provider()),
        }
    }

    /// Opens the modal for a provider and returns `true` when the caller
    /// should start the settings fetch.
    ///
    /// Ignored unless the editor is closed, so an already-open modal (in
    /// any phase) cannot be stolen.
    pub fn open(&mut self, provider: Provider) -> bool {
        if !matches!(self.state, EditorState::Closed) {
            return false;
        }

        self.state = EditorState::Opening { provider };
        true
    }

    /// Delivers the settings fetch result started by [`Self::open`].
    ///
    /// Only honored while still `Opening` the same provider; a response
    /// that arrives after the modal was closed or reopened for another
    /// provider is dropped. A failed fetch degrades to an all-empty form
    /// with no error surfaced, matching a first-time setup.
    pub fn apply_fetch_result(
        &mut self,
        provider: Provider,
        result: AppResult<BTreeMap<String, String>>,
    ) {
        let EditorState::Opening { provider: opening } = &self.state else {
            return;
        };
        if *opening != provider {
            return;
        }

        let form = match result {
            Ok(fetched) => CredentialForm::from_fetched(provider, &fetched),
            Err(_) => CredentialForm::empty(provider),
        };
        self.state = EditorState::Ready(form);
    }

    /// Applies an edit to one field.
    ///
    /// Rejected for read-only fields, keys outside the provider's schema,
    /// and whenever the form is not in the editable phase.
    pub fn edit(&mut self, key: &str, value: impl Into<String>) -> bool {
        let EditorState::Ready(form) = &mut self.state else {
            return false;
        };
        let editable = form
            .provider
            .field_schema()
            .iter()
            .any(|field| field.key == key && field.kind != FieldKind::ReadonlySecret);
        if !editable {
            return false;
        }

        form.values.insert(key.to_owned(), value.into());
        form.dirty = true;
        form.notice = None;
        true
    }

    /// Starts a save and returns the payload to submit.
    ///
    /// Returns `None` unless the form is editable and dirty. The payload
    /// omits empty secret fields; see [`CredentialForm::payload`].
    pub fn begin_save(&mut self) -> Option<(Provider, BTreeMap<String, String>)> {
        let EditorState::Ready(form) = &self.state else {
            return None;
        };
        if !form.dirty {
            return None;
        }

        let payload = form.payload();
        let provider = form.provider;
        let form = match std::mem::take(&mut self.state) {
            EditorState::Ready(form) => form,
            _ => return None,
        };
        self.state = EditorState::Saving(form);
        Some((provider, payload))
    }

    /// Records the outcome of the in-flight save.
    ///
    /// Either way the form returns to the editable phase. Success clears
    /// the dirty flag, posts a success notice, and returns `true` so the
    /// caller can refresh the integration list; closing stays a separate
    /// user action. Failure keeps the edits intact with an error notice.
    pub fn complete_save(&mut self, outcome: AppResult<()>, now: DateTime<Utc>) -> bool {
        let EditorState::Saving(_) = &self.state else {
            return false;
        };
        let EditorState::Saving(mut form) = std::mem::take(&mut self.state) else {
            return false;
        };

        let saved = outcome.is_ok();
        match outcome {
            Ok(()) => {
                form.dirty = false;
                form.notice = Some(Notice::success(SAVED_MESSAGE, now));
            }
            Err(error) => {
                form.notice = Some(Notice::from_error(&error, SAVE_FAILED_MESSAGE, now));
            }
        }
        self.state = EditorState::Ready(form);

        saved
    }

    /// Handles the close control (button, overlay click, or Escape).
    ///
    /// A clean form closes immediately, a dirty form moves to the discard
    /// confirmation, and a saving form ignores the request entirely.
    pub fn request_close(&mut self) -> CloseOutcome {
        match std::mem::take(&mut self.state) {
            EditorState::Closed => CloseOutcome::Ignored,
            EditorState::Opening { .. } => CloseOutcome::Closed,
            EditorState::Ready(form) => {
                if form.dirty {
                    self.state = EditorState::ConfirmDiscard(form);
                    CloseOutcome::ConfirmRequested
                } else {
                    CloseOutcome::Closed
                }
            }
            EditorState::Saving(form) => {
                self.state = EditorState::Saving(form);
                CloseOutcome::Ignored
            }
            EditorState::ConfirmDiscard(form) => {
                self.state = EditorState::ConfirmDiscard(form);
                CloseOutcome::Ignored
            }
        }
    }

    /// Confirms the discard: drops the edits and closes the modal.
    pub fn discard_and_close(&mut self) {
        if matches!(self.state, EditorState::ConfirmDiscard(_)) {
            self.state = EditorState::Closed;
        }
    }

    /// Cancels the discard confirmation and returns to editing, edits
    /// intact.
    pub fn cancel_close(&mut self) {
        if let EditorState::ConfirmDiscard(form) = std::mem::take(&mut self.state) {
            self.state = EditorState::Ready(form);
        }
    }

    /// Returns the open form, if the editor is past the fetch phase.
    #[must_use]
    pub fn form(&self) -> Option<&CredentialForm> {
        match &self.state {
            EditorState::Ready(form)
            | EditorState::Saving(form)
            | EditorState::ConfirmDiscard(form) => Some(form),
            EditorState::Closed | EditorState::Opening { .. } => None,
        }
    }

    /// Returns the form's notice if still within its display window.
    #[must_use]
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.form()
            .and_then(|form| form.notice.as_ref())
            .filter(|notice| notice.is_visible(now))
    }
}

#[cfg(test)]
mod tests;
