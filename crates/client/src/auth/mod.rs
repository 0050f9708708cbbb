//! Admin authentication.
//!
//! Three layers, composed bottom-up:
//!
//! - [`store::SessionStore`] - the single shared token holder, persisted and
//!   observable
//! - [`validator::SessionValidator`] - keeps the token's validity in sync
//!   with the remote authority
//! - [`AdminAuth`] - the one boolean-plus-status surface route guards consume
//!
//! # Guard contract
//!
//! While [`AdminAuth::is_checking_auth`] holds, render a neutral loading
//! state. If [`AdminAuth::validation_error`] is transient, offer a retry -
//! the held session may still be good and must not force a re-login.
//! Otherwise, when not authenticated, show the login prompt.

pub mod error;
pub mod store;
pub mod validator;

pub use error::{AuthError, ValidationError, ValidationErrorKind};
pub use store::{ADMIN_TOKEN_KEY, SessionStore, SubscriberId};
pub use validator::{SessionStatus, SessionValidator};

use secrecy::SecretString;

/// The authentication view consumed by UI guards.
///
/// Cheaply cloneable; all clones observe the same session.
#[derive(Clone)]
pub struct AdminAuth {
    store: SessionStore,
    validator: SessionValidator,
}

impl AdminAuth {
    /// Compose the facade over an existing store and validator.
    #[must_use]
    pub const fn new(store: SessionStore, validator: SessionValidator) -> Self {
        Self { store, validator }
    }

    /// True iff a token is held and the validator has confirmed it.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some() && self.validator.is_valid()
    }

    /// True while the held token's validity is still being established:
    /// either the authority has not come up yet, or a check is in flight.
    ///
    /// Always false without a token - an unauthenticated visitor is never
    /// shown a loading state.
    #[must_use]
    pub fn is_checking_auth(&self) -> bool {
        self.store.token().is_some()
            && (!self.validator.authority_ready() || self.validator.is_validating())
    }

    /// The outcome of the last failed check, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validator.validation_error()
    }

    /// Authenticate with the remote authority and store the session.
    ///
    /// # Errors
    ///
    /// Returns a sanitized [`AuthError`]; submitted credentials never appear
    /// in it.
    pub async fn login(&self, username: &str, password: SecretString) -> Result<(), AuthError> {
        self.validator.login(username, password).await
    }

    /// End the session locally, then best-effort revoke it remotely.
    pub async fn logout(&self) {
        self.validator.logout().await;
    }

    /// Check the held token against the authority.
    pub async fn revalidate(&self) {
        self.validator.revalidate().await;
    }

    /// Recover from a transient validation failure without re-login.
    pub async fn retry_validation(&self) {
        self.validator.retry_validation().await;
    }

    /// The underlying token store, for consumers that subscribe to changes.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::BackendClient;
    use crate::config::SiteConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn facade(uri: &str, attach: bool) -> (AdminAuth, SessionStore) {
        let store = SessionStore::in_memory();
        let validator = SessionValidator::new(store.clone());
        if attach {
            let config = SiteConfig::new(uri, "/tmp/unused-state").unwrap();
            validator.attach_authority(BackendClient::new(&config, store.clone()).unwrap());
        }
        (AdminAuth::new(store.clone(), validator), store)
    }

    #[tokio::test]
    async fn test_visitor_without_token_is_not_checking() {
        // No token: neither authenticated nor loading, even with no
        // authority attached yet.
        let (auth, _store) = facade("http://127.0.0.1:9", false);
        assert!(!auth.is_authenticated());
        assert!(!auth.is_checking_auth());
    }

    #[tokio::test]
    async fn test_token_awaiting_authority_is_checking() {
        let (auth, store) = facade("http://127.0.0.1:9", false);
        store.set_token(Some("t-held".to_owned()));
        assert!(auth.is_checking_auth());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_authenticated_after_successful_check() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/validate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(true))
            .mount(&server)
            .await;
        let (auth, store) = facade(&server.uri(), true);
        store.set_token(Some("t-good".to_owned()));

        auth.revalidate().await;

        assert!(auth.is_authenticated());
        assert!(!auth.is_checking_auth());
        assert!(auth.validation_error().is_none());
    }

    #[tokio::test]
    async fn test_transient_error_offers_retry_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/validate"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let (auth, store) = facade(&server.uri(), true);
        store.set_token(Some("t-kept".to_owned()));

        auth.revalidate().await;

        assert!(!auth.is_authenticated());
        let error = auth.validation_error().unwrap();
        assert!(error.is_transient());
        // Token retained: a retry, not a re-login, is the recovery path.
        assert_eq!(store.token(), Some("t-kept".to_owned()));
    }
}
