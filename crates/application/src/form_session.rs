//! Generic form machine for the simple settings sections.
//!
//! One tagged union per section instead of separate loading and saving
//! flags, making combinations like "saving while still loading"
//! unrepresentable.

use chrono::{DateTime, Utc};

use mitto_core::AppResult;

use crate::notice::Notice;

/// Success message posted after a completed save.
const SAVED_MESSAGE: &str = "Changes saved";

/// Fallback error message when the backend supplies none.
const SAVE_FAILED_MESSAGE: &str = "Failed to save changes";

/// Mutable state of a loaded form.
#[derive(Debug, Clone)]
pub struct FormState<T> {
    model: T,
    dirty: bool,
    saving: bool,
    notice: Option<Notice>,
}

/// A section form: `Loading` until the first fetch resolves, then `Ready`.
#[derive(Debug, Clone)]
pub enum FormSession<T> {
    /// Initial fetch is in flight; nothing is editable.
    Loading,
    /// Form is editable (and possibly saving).
    Ready(FormState<T>),
}

impl<T: Clone> FormSession<T> {
    /// Creates a session awaiting its initial fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::Loading
    }

    /// Resolves the initial fetch.
    ///
    /// Read failures are recovered by the caller passing a fallback model;
    /// the form must never stay blocked on a failed read. Ignored when the
    /// session is already `Ready` so a late duplicate response cannot
    /// clobber edits.
    pub fn finish_load(&mut self, model: T) {
        if matches!(self, Self::Loading) {
            *self = Self::Ready(FormState {
                model,
                dirty: false,
                saving: false,
                notice: None,
            });
        }
    }

    /// Applies an edit to the model. Marks the form dirty and drops any
    /// prior success notice. Returns `false` while loading or saving.
    pub fn edit(&mut self, apply: impl FnOnce(&mut T)) -> bool {
        let Self::Ready(state) = self else {
            return false;
        };
        if state.saving {
            return false;
        }

        apply(&mut state.model);
        state.dirty = true;
        if state
            .notice
            .as_ref()
            .is_some_and(|notice| notice.kind() == crate::NoticeKind::Success)
        {
            state.notice = None;
        }

        true
    }

    /// Starts a save and returns the payload to submit.
    ///
    /// Returns `None` unless the form is ready, dirty, and not already
    /// saving; at most one save is in flight per form.
    pub fn begin_save(&mut self) -> Option<T> {
        let Self::Ready(state) = self else {
            return None;
        };
        if !state.dirty || state.saving {
            return None;
        }

        state.saving = true;
        Some(state.model.clone())
    }

    /// Records the outcome of the in-flight save.
    ///
    /// Success clears the dirty flag; failure keeps it so the user retries
    /// without retyping. Ignored if no save is in flight.
    pub fn complete_save(&mut self, outcome: AppResult<()>, now: DateTime<Utc>) {
        let Self::Ready(state) = self else {
            return;
        };
        if !state.saving {
            return;
        }

        state.saving = false;
        match outcome {
            Ok(()) => {
                state.dirty = false;
                state.notice = Some(Notice::success(SAVED_MESSAGE, now));
            }
            Err(error) => {
                state.notice = Some(Notice::from_error(&error, SAVE_FAILED_MESSAGE, now));
            }
        }
    }

    /// Returns the model once loaded.
    #[must_use]
    pub fn model(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(state) => Some(&state.model),
        }
    }

    /// Returns whether the initial fetch is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns whether the form has unsaved edits.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Ready(state) if state.dirty)
    }

    /// Returns whether a save is in flight (the save control is disabled).
    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Ready(state) if state.saving)
    }

    /// Returns the current notice if it is still within its display window.
    #[must_use]
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        match self {
            Self::Loading => None,
            Self::Ready(state) => state
                .notice
                .as_ref()
                .filter(|notice| notice.is_visible(now)),
        }
    }
}

impl<T: Clone> Default for FormSession<T> {
    fn default() -> Self {
        Self::new()
    }
}
