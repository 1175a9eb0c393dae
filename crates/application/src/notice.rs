use chrono::{DateTime, Duration, Utc};

use mitto_core::AppError;

/// How long a success notice stays visible.
pub const SUCCESS_NOTICE_SECONDS: i64 = 3;

/// How long an error notice stays visible. Longer than success so the user
/// has time to read the server's message before retrying.
pub const ERROR_NOTICE_SECONDS: i64 = 8;

/// Flavor of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A write completed.
    Success,
    /// A write failed; the operation stays retryable.
    Error,
}

/// A transient, auto-expiring message attached to a form or card.
///
/// Notices are presentation state only; they are never thrown to a global
/// handler and they expire by being filtered out, not by a timer mutating
/// the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
    posted_at: DateTime<Utc>,
}

impl Notice {
    /// Creates a success notice posted at `now`.
    #[must_use]
    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            posted_at: now,
        }
    }

    /// Creates an error notice posted at `now`.
    #[must_use]
    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            posted_at: now,
        }
    }

    /// Creates an error notice carrying the server's message when the error
    /// has one, otherwise `fallback`.
    #[must_use]
    pub fn from_error(error: &AppError, fallback: &str, now: DateTime<Utc>) -> Self {
        let message = error.user_message().unwrap_or(fallback).to_owned();
        Self::error(message, now)
    }

    /// Returns the notice kind.
    #[must_use]
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns whether the notice is still within its display window at `now`.
    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        let window = match self.kind {
            NoticeKind::Success => Duration::seconds(SUCCESS_NOTICE_SECONDS),
            NoticeKind::Error => Duration::seconds(ERROR_NOTICE_SECONDS),
        };

        now.signed_duration_since(self.posted_at) < window
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use mitto_core::AppError;

    use super::{ERROR_NOTICE_SECONDS, Notice, SUCCESS_NOTICE_SECONDS};

    #[test]
    fn success_notice_expires_after_its_window() {
        let now = Utc::now();
        let notice = Notice::success("saved", now);
        assert!(notice.is_visible(now));
        assert!(notice.is_visible(now + Duration::seconds(SUCCESS_NOTICE_SECONDS - 1)));
        assert!(!notice.is_visible(now + Duration::seconds(SUCCESS_NOTICE_SECONDS)));
    }

    #[test]
    fn error_window_outlasts_success_window() {
        let now = Utc::now();
        let notice = Notice::error("failed", now);
        assert!(notice.is_visible(now + Duration::seconds(SUCCESS_NOTICE_SECONDS)));
        assert!(!notice.is_visible(now + Duration::seconds(ERROR_NOTICE_SECONDS)));
    }

    #[test]
    fn from_error_prefers_the_server_message() {
        let now = Utc::now();
        let notice = Notice::from_error(&AppError::Api("quota exceeded".to_owned()), "failed", now);
        assert_eq!(notice.message(), "quota exceeded");

        let notice = Notice::from_error(&AppError::Network("timeout".to_owned()), "failed", now);
        assert_eq!(notice.message(), "failed");
    }
}
