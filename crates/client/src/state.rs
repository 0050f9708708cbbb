//! Application state shared across consumers.

use std::sync::Arc;

use thiserror::Error;

use crate::auth::{AdminAuth, SessionStore, SessionValidator};
use crate::backend::{BackendClient, BackendError};
use crate::config::{ConfigError, SiteConfig};
use crate::content::ContentCatalog;
use crate::services::{
    ContactEditor, ContentEditor, EnquiryInbox, GalleryManager, SiteContent,
};

/// Errors that can occur while assembling the application state.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client error: {0}")]
    Backend(#[from] BackendError),
}

/// The dependency-injected composition root.
///
/// Constructed once at startup and passed by reference to every consumer:
/// there is deliberately no module-level session singleton. Cheaply
/// cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    backend: BackendClient,
    auth: AdminAuth,
    catalog: ContentCatalog,
}

impl AppState {
    /// Assemble the application state from a configuration.
    ///
    /// Wires the pieces bottom-up: the session store (seeded from the state
    /// directory), the backend client reading that store, and the validator
    /// with the client attached as its remote authority. The held token, if
    /// one was restored, still needs a [`AdminAuth::revalidate`] round
    /// before it counts as authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be built.
    pub fn new(config: SiteConfig) -> Result<Self, InitError> {
        let store = SessionStore::with_persistence(&config.state_dir);
        let backend = BackendClient::new(&config, store.clone())?;

        let validator = SessionValidator::new(store.clone());
        validator.attach_authority(backend.clone());
        let auth = AdminAuth::new(store, validator);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                auth,
                catalog: ContentCatalog::bundled(),
            }),
        })
    }

    /// Assemble the application state from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing/invalid or the backend
    /// client cannot be built.
    pub fn from_env() -> Result<Self, InitError> {
        Ok(Self::new(SiteConfig::from_env()?)?)
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the remote store client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the admin authentication facade.
    #[must_use]
    pub fn auth(&self) -> &AdminAuth {
        &self.inner.auth
    }

    /// Get a reference to the bundled content catalog.
    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.inner.catalog
    }

    // =========================================================================
    // Service Constructors
    // =========================================================================

    /// Content resolution for the public pages.
    #[must_use]
    pub fn site_content(&self) -> SiteContent<'_> {
        SiteContent::new(&self.inner.backend, &self.inner.catalog)
    }

    /// Admin content editing.
    #[must_use]
    pub fn content_editor(&self) -> ContentEditor<'_> {
        ContentEditor::new(&self.inner.backend, &self.inner.catalog)
    }

    /// Gallery browsing and management.
    #[must_use]
    pub fn gallery(&self) -> GalleryManager<'_> {
        GalleryManager::new(&self.inner.backend)
    }

    /// Enquiry submission and review.
    #[must_use]
    pub fn enquiries(&self) -> EnquiryInbox<'_> {
        EnquiryInbox::new(&self.inner.backend)
    }

    /// Contact-details viewing and editing.
    #[must_use]
    pub fn contact(&self) -> ContactEditor<'_> {
        ContactEditor::new(&self.inner.backend)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_restores_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = SessionStore::with_persistence(dir.path());
            store.set_token(Some("t-restored".to_owned()));
        }

        let config = SiteConfig::new("http://127.0.0.1:9", dir.path()).unwrap();
        let state = AppState::new(config).unwrap();

        // Token restored but not yet validated: held, not authenticated.
        assert!(!state.auth().is_authenticated());
        assert_eq!(
            state.auth().store().token(),
            Some("t-restored".to_owned())
        );
    }

    #[tokio::test]
    async fn test_fresh_state_has_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::new("http://127.0.0.1:9", dir.path()).unwrap();
        let state = AppState::new(config).unwrap();

        assert!(!state.auth().is_authenticated());
        assert!(!state.auth().is_checking_auth());
    }
}
