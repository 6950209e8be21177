use std::rc::Rc;

use dioxus::prelude::*;
use gateway::ApiClient;
use shared_types::{AppError, LoginRequest, Session, User, UserRole};

use crate::storage::{self, SessionStorage};

/// Session state shared by every route, persisted on each change.
#[derive(Clone, Copy)]
pub struct AuthState {
    session: Signal<Session>,
    store: CopyValue<Rc<dyn SessionStorage>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::with_storage(storage::default_storage())
    }

    pub fn with_storage(store: Rc<dyn SessionStorage>) -> Self {
        let session = storage::load_session(store.as_ref());
        Self {
            session: Signal::new(session),
            store: CopyValue::new(store),
        }
    }

    /// Snapshot of the session. Subscribes the caller to changes.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.session.write().set_user(user);
        self.persist();
    }

    pub fn clear_user(&mut self) {
        self.session.write().clear_user();
        self.persist();
    }

    fn persist(&self) {
        let session = self.session.peek().clone();
        storage::save_session(self.store.read().as_ref(), &session);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Log in and fetch the account the new session belongs to.
pub async fn sign_in(api: &ApiClient, credentials: &LoginRequest) -> Result<User, AppError> {
    gateway::api::login(api, credentials).await?;
    gateway::api::current_user(api).await
}

/// End the session on the backend, then locally. The local session is
/// cleared even when the backend call fails.
pub async fn sign_out(api: &ApiClient, mut auth: AuthState) {
    if let Err(e) = gateway::api::logout(api).await {
        tracing::warn!(error = %e, "logout request failed");
    }
    auth.clear_user();
}
