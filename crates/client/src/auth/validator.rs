//! Session token validation against the remote authority.
//!
//! The validator keeps a derived "is this token currently good" flag in sync
//! with the remote store, without blocking consumers: state queries are
//! synchronous, only the validation calls themselves suspend.
//!
//! # State machine
//!
//! For each (token, authority-instance) pair the validator is in one of:
//!
//! - **Idle** - no token held; nothing to do
//! - **AwaitingAuthority** - token held but no authority attached yet; no
//!   call is issued until one arrives
//! - **Validating** - a check for the current pair is pending or in flight
//! - **Valid** - the authority confirmed the token
//! - **Invalid** - the token was rejected; it has been discarded via the
//!   session store
//! - **Degraded** - the check failed transiently; the token is retained and
//!   the check can be retried indefinitely
//!
//! A completion only commits if the token and authority it was issued for
//! are still current; superseded results are dropped so a slow stale check
//! can never overwrite a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use secrecy::SecretString;

use crate::auth::error::{AuthError, ValidationError, ValidationErrorKind};
use crate::auth::store::SessionStore;
use crate::backend::{BackendClient, BackendError};

/// Observable validator state, one name per state-machine node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    AwaitingAuthority,
    Validating,
    Valid,
    Invalid,
    Degraded,
}

/// One validation attempt, pinned to the inputs it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Attempt {
    generation: u64,
    token: String,
}

#[derive(Debug, Clone)]
struct Authority {
    client: BackendClient,
    generation: u64,
}

#[derive(Debug, Default)]
struct ValidatorState {
    is_valid: bool,
    /// The pair currently being checked, if a call is in flight.
    in_flight: Option<Attempt>,
    /// The pair the last committed result belongs to. Guards against
    /// issuing a second call for an already-checked combination.
    checked: Option<Attempt>,
    error: Option<ValidationError>,
}

/// Validates the held token against the remote authority.
///
/// Cheaply cloneable; all clones share state.
#[derive(Clone)]
pub struct SessionValidator {
    inner: Arc<ValidatorInner>,
}

struct ValidatorInner {
    store: SessionStore,
    authority: Mutex<Option<Authority>>,
    state: Mutex<ValidatorState>,
}

impl SessionValidator {
    /// Create a validator over the given session store, with no authority
    /// attached yet.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(ValidatorInner {
                store,
                authority: Mutex::new(None),
                state: Mutex::new(ValidatorState::default()),
            }),
        }
    }

    /// Attach (or replace) the remote authority.
    ///
    /// Each attachment is a distinct authority instance: any previous
    /// validation result no longer applies and any in-flight check for the
    /// old instance will be dropped at commit time. Call
    /// [`SessionValidator::revalidate`] afterwards to check the held token
    /// against the new instance.
    pub fn attach_authority(&self, client: BackendClient) {
        let mut authority = lock(&self.inner.authority);
        let generation = authority.as_ref().map_or(0, |a| a.generation + 1);
        *authority = Some(Authority { client, generation });

        let mut state = lock(&self.inner.state);
        state.checked = None;
        state.is_valid = false;
    }

    /// Whether an authority is attached.
    #[must_use]
    pub fn authority_ready(&self) -> bool {
        lock(&self.inner.authority).is_some()
    }

    /// Whether the held token is currently confirmed good.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        lock(&self.inner.state).is_valid
    }

    /// Whether a validation call is in flight.
    #[must_use]
    pub fn is_validating(&self) -> bool {
        lock(&self.inner.state).in_flight.is_some()
    }

    /// The outcome of the last failed check, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<ValidationError> {
        lock(&self.inner.state).error.clone()
    }

    /// The current state-machine node, for guards and diagnostics.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.inner.store.token().is_none() {
            return SessionStatus::Idle;
        }

        let authority = lock(&self.inner.authority);
        if authority.is_none() {
            return SessionStatus::AwaitingAuthority;
        }
        drop(authority);

        let state = lock(&self.inner.state);
        if state.in_flight.is_some() {
            return SessionStatus::Validating;
        }
        if state.is_valid {
            return SessionStatus::Valid;
        }
        match &state.error {
            Some(e) if e.is_transient() => SessionStatus::Degraded,
            Some(_) => SessionStatus::Invalid,
            // Token and authority present but no result yet: a check is due.
            None => SessionStatus::Validating,
        }
    }

    /// Check the held token against the attached authority.
    ///
    /// Issues at most one call per distinct (token, authority-instance)
    /// pair; redundant calls for an already-checked or in-flight pair return
    /// immediately. With no token this resets to Idle; with no authority it
    /// leaves the pending check for when one is attached.
    pub async fn revalidate(&self) {
        let Some((attempt, client)) = self.begin_attempt() else {
            return;
        };

        let result = client.validate_admin_session(&attempt.token).await;
        self.commit(attempt, result);
    }

    /// Re-check the held token even though its pair was already examined.
    ///
    /// This is the manual recovery path out of Degraded; it works any number
    /// of times.
    pub async fn retry_validation(&self) {
        {
            let mut state = lock(&self.inner.state);
            state.checked = None;
        }
        self.revalidate().await;
    }

    /// Authenticate and store the resulting session token.
    ///
    /// A successful login is authoritative: the validator transitions
    /// straight to Valid without a follow-up validation round. On failure
    /// only a sanitized message is returned; the submitted credentials are
    /// dropped either way and are never logged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthorityNotReady`] if no authority is attached,
    /// or [`AuthError::Login`] with a user-safe message if the login fails.
    pub async fn login(&self, username: &str, password: SecretString) -> Result<(), AuthError> {
        let (client, generation) = {
            let authority = lock(&self.inner.authority);
            let authority = authority.as_ref().ok_or(AuthError::AuthorityNotReady)?;
            (authority.client.clone(), authority.generation)
        };

        match client.admin_login(username, &password).await {
            Ok(token) => {
                {
                    let mut state = lock(&self.inner.state);
                    state.is_valid = true;
                    state.error = None;
                    state.in_flight = None;
                    state.checked = Some(Attempt {
                        generation,
                        token: token.clone(),
                    });
                }
                self.inner.store.set_token(Some(token));
                Ok(())
            }
            Err(error) => {
                tracing::warn!("admin login failed");
                Err(AuthError::login_failure(&error))
            }
        }
    }

    /// End the session.
    ///
    /// Local state is cleared first and unconditionally - a network failure
    /// must never leave the client looking authenticated. The remote
    /// revocation afterwards is best-effort and its failure is swallowed.
    pub async fn logout(&self) {
        let token = self.inner.store.token();

        {
            let mut state = lock(&self.inner.state);
            *state = ValidatorState::default();
        }
        self.inner.store.set_token(None);

        let client = lock(&self.inner.authority)
            .as_ref()
            .map(|a| a.client.clone());
        if let (Some(token), Some(client)) = (token, client) {
            if let Err(error) = client.admin_logout(&token).await {
                tracing::debug!(error = %error, "session revocation failed; local session already cleared");
            }
        }
    }

    /// Decide whether a call is due and mark it in flight.
    fn begin_attempt(&self) -> Option<(Attempt, BackendClient)> {
        let authority = lock(&self.inner.authority);
        let mut state = lock(&self.inner.state);

        let Some(token) = self.inner.store.token() else {
            // Idle: nothing to validate, nothing to report.
            *state = ValidatorState::default();
            return None;
        };

        let Some(authority) = authority.as_ref() else {
            // AwaitingAuthority: the check happens once one is attached.
            return None;
        };

        let attempt = Attempt {
            generation: authority.generation,
            token,
        };

        if state.checked.as_ref() == Some(&attempt) || state.in_flight.as_ref() == Some(&attempt) {
            return None;
        }

        state.in_flight = Some(attempt.clone());
        Some((attempt, authority.client.clone()))
    }

    /// Apply a completed check, unless its inputs were superseded meanwhile.
    fn commit(&self, attempt: Attempt, result: Result<bool, BackendError>) {
        let clear_token = {
            let authority = lock(&self.inner.authority);
            let mut state = lock(&self.inner.state);

            if state.in_flight.as_ref() == Some(&attempt) {
                state.in_flight = None;
            }

            let token_current =
                self.inner.store.token().as_deref() == Some(attempt.token.as_str());
            let authority_current = authority
                .as_ref()
                .is_some_and(|a| a.generation == attempt.generation);
            if !token_current || !authority_current {
                // A newer (token, authority) pair owns the state now.
                return;
            }

            match result {
                Ok(true) => {
                    state.is_valid = true;
                    state.error = None;
                    state.checked = Some(attempt);
                    false
                }
                Ok(false) => {
                    state.is_valid = false;
                    state.error = Some(ValidationError::invalid());
                    state.checked = None;
                    true
                }
                Err(error) => {
                    let classified = ValidationError::from_backend(&error);
                    state.is_valid = false;
                    let discard = classified.kind == ValidationErrorKind::Invalid;
                    state.checked = if discard { None } else { Some(attempt) };
                    state.error = Some(classified);
                    discard
                }
            }
        };

        if clear_token {
            // Outside the locks: notification fans out synchronously.
            self.inner.store.set_token(None);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
