use serde::{Deserialize, Serialize};

use crate::user::{User, UserRole};

/// Durable storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "auth-user";

/// Client-side view of who is signed in.
///
/// Authentication is derived from the presence of a user; there is no
/// separate flag to drift out of sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the current user. `None` signs out.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Serialize into the persisted document.
    pub fn to_storage_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&PersistedSession::from(self))
    }

    /// Restore from the persisted document. The stored `isAuthenticated`
    /// flag is ignored; only the user matters.
    pub fn from_storage_str(raw: &str) -> Result<Self, serde_json::Error> {
        let persisted: PersistedSession = serde_json::from_str(raw)?;
        Ok(Self::new(persisted.state.user))
    }
}

/// On-disk envelope: `{"state": {...}, "version": 0}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct PersistedSession {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct PersistedState {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(rename = "isAuthenticated", default)]
    is_authenticated: bool,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            state: PersistedState {
                user: session.user.clone(),
                role: session.role(),
                is_authenticated: session.is_authenticated(),
            },
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn admin() -> User {
        User {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Admin".into(),
            phone_number: None,
            role: UserRole::Admin,
        }
    }

    #[test]
    fn new_session_is_signed_out() {
        let s = Session::default();
        assert!(!s.is_authenticated());
        assert_eq!(s.role(), None);
    }

    #[test]
    fn set_user_authenticates() {
        let mut s = Session::default();
        s.set_user(Some(admin()));
        assert!(s.is_authenticated());
        assert_eq!(s.role(), Some(UserRole::Admin));
    }

    #[test]
    fn set_user_none_signs_out() {
        let mut s = Session::new(Some(admin()));
        s.set_user(None);
        assert!(!s.is_authenticated());
        assert_eq!(s.role(), None);
    }

    #[test]
    fn clear_user_resets_everything() {
        let mut s = Session::new(Some(admin()));
        s.clear_user();
        assert_eq!(s, Session::default());
    }

    #[test]
    fn storage_roundtrip() {
        let s = Session::new(Some(admin()));
        let raw = s.to_storage_string().unwrap();
        assert_eq!(Session::from_storage_str(&raw).unwrap(), s);
    }

    #[test]
    fn persisted_document_shape() {
        let raw = Session::new(Some(admin())).to_storage_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["role"], "admin");
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn stale_flag_without_user_loads_signed_out() {
        let raw = r#"{"state":{"user":null,"role":null,"isAuthenticated":true},"version":0}"#;
        let s = Session::from_storage_str(raw).unwrap();
        assert!(!s.is_authenticated());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Session::from_storage_str("not json").is_err());
    }
}
