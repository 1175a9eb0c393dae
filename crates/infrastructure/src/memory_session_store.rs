//! In-process session store.

use std::sync::RwLock;

use mitto_application::SessionStore;
use mitto_domain::User;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Process-local [`SessionStore`]: holds the bearer token and the last
/// fetched user record for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RwLock<SessionState>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a bearer token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                token: Some(token.into()),
                user: None,
            }),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.state
            .read()
            .map(|state| state.token.clone())
            .unwrap_or(None)
    }

    fn cached_user(&self) -> Option<User> {
        self.state
            .read()
            .map(|state| state.user.clone())
            .unwrap_or(None)
    }

    fn remember_user(&self, user: &User) {
        if let Ok(mut state) = self.state.write() {
            state.user = Some(user.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            state.token = None;
            state.user = None;
        }
    }
}
