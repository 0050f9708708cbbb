//! Shared admin session store.
//!
//! Single source of truth for the current session token. Every consumer that
//! watches the session (route guards, the admin floating button, the backend
//! client's bearer header) observes the same store, so they converge without
//! polling. The token is persisted under a fixed key inside the configured
//! state directory and restored at construction, surviving restarts.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Fixed key the session token is persisted under.
pub const ADMIN_TOKEN_KEY: &str = "admin_session_token";

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`], used to de-register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Process-wide holder of the current admin session token.
///
/// Cheaply cloneable; all clones share the same token and subscriber list.
/// All writers go through [`SessionStore::set_token`] - nothing else may
/// touch the persisted value, or subscribers would miss the change.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    token: Mutex<Option<String>>,
    subscribers: Mutex<Vec<(SubscriberId, Callback)>>,
    next_subscriber: AtomicU64,
    /// File the token is mirrored to; `None` means memory-only.
    persist_path: Option<PathBuf>,
}

impl SessionStore {
    /// A store with no persistence; the session dies with the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::build(None, None)
    }

    /// A store persisted to `state_dir/admin_session_token`.
    ///
    /// The persisted token, if any, seeds the in-memory value. Persistence
    /// I/O is best-effort: if the directory cannot be used the store keeps
    /// working memory-only and logs at warn.
    #[must_use]
    pub fn with_persistence(state_dir: &Path) -> Self {
        let path = state_dir.join(ADMIN_TOKEN_KEY);
        let seeded = read_persisted(&path);
        Self::build(Some(path), seeded)
    }

    fn build(persist_path: Option<PathBuf>, token: Option<String>) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                token: Mutex::new(token),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber: AtomicU64::new(0),
                persist_path,
            }),
        }
    }

    /// The current token, if a session is held.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Replace the current token and notify every subscriber.
    ///
    /// `Some` writes the persisted value, `None` removes it; both are
    /// best-effort. Notification is synchronous, in registration order, and
    /// fires on every call - including redundant same-value sets.
    pub fn set_token(&self, token: Option<String>) {
        {
            let mut held = self
                .inner
                .token
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            held.clone_from(&token);
        }

        if let Some(path) = &self.inner.persist_path {
            persist(path, token.as_deref());
        }

        self.notify();
    }

    /// Register a callback invoked after every [`SessionStore::set_token`].
    ///
    /// The callback receives no arguments; poll [`SessionStore::token`] to
    /// observe the new value.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// De-register a previously subscribed callback.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .retain(|(held, _)| *held != id);
    }

    fn notify(&self) {
        // Snapshot so callbacks can subscribe/unsubscribe without deadlock.
        let snapshot: Vec<Callback> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            callback();
        }
    }
}

fn read_persisted(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let token = contents.trim();
            (!token.is_empty()).then(|| token.to_owned())
        }
        Err(_) => None,
    }
}

fn persist(path: &Path, token: Option<&str>) {
    let result = match token {
        Some(token) => {
            if let Some(dir) = path.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            std::fs::write(path, token)
        }
        None => match std::fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        },
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "session persistence unavailable; continuing memory-only");
    }
}
