//! Durable key/value storage for the auth session.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use shared_types::{Session, SESSION_STORAGE_KEY};

/// Minimal string key/value store.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// In-memory storage for native builds and tests. Nothing survives a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Browser `window.localStorage`.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorage {
    /// `None` when there is no window or storage is disabled.
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {e:?}"))
    }

    fn remove(&self, key: &str) {
        let _ = self.inner.remove_item(key);
    }
}

/// Pick the best storage for this build.
pub fn default_storage() -> Rc<dyn SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        if let Some(local) = LocalStorage::open() {
            return Rc::new(local);
        }
        tracing::warn!("localStorage unavailable, the session will not survive a reload");
    }
    Rc::new(MemoryStorage::new())
}

/// Restore the persisted session. Missing or unreadable data yields an
/// empty session.
pub fn load_session(storage: &dyn SessionStorage) -> Session {
    let Some(raw) = storage.get(SESSION_STORAGE_KEY) else {
        return Session::default();
    };
    match Session::from_storage_str(&raw) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable persisted session");
            storage.remove(SESSION_STORAGE_KEY);
            Session::default()
        }
    }
}

pub fn save_session(storage: &dyn SessionStorage, session: &Session) {
    let result = session
        .to_storage_string()
        .map_err(|e| e.to_string())
        .and_then(|raw| storage.set(SESSION_STORAGE_KEY, &raw));
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to persist session");
    }
}
