use std::sync::RwLock;

use crate::domain::models::auth::User;

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Signed-in state shared by the gateways and the booking flow: the bearer
/// token plus the resolved profile. Passed around explicitly as an `Arc`;
/// there is no process-global session.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_auth(&self, token: String, user: User) {
        let mut state = self.inner.write().unwrap();
        state.token = Some(token);
        state.user = Some(user);
    }

    /// Store a token before the profile is known (social-login callback).
    pub fn set_token(&self, token: String) {
        self.inner.write().unwrap().token = Some(token);
    }

    pub fn set_user(&self, user: User) {
        self.inner.write().unwrap().user = Some(user);
    }

    pub fn clear(&self) {
        let mut state = self.inner.write().unwrap();
        state.token = None;
        state.user = None;
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().unwrap().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().token.is_some()
    }
}
