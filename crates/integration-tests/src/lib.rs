//! Integration tests for the school website client.
//!
//! Every test runs the real client stack - config, session store, validator,
//! backend client, services - against a `wiremock` rendition of the remote
//! content store. Only the HTTP boundary is mocked.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p innovation-school-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use tempfile::TempDir;
use wiremock::MockServer;

use innovation_school_client::config::SiteConfig;
use innovation_school_client::state::AppState;

/// One fully wired client stack over a mocked store.
pub struct TestContext {
    pub server: MockServer,
    pub state: AppState,
    state_dir: TempDir,
}

impl TestContext {
    /// Start a mock store and assemble an [`AppState`] against it, with a
    /// throwaway state directory for session persistence.
    ///
    /// # Panics
    ///
    /// Panics if the mock server or state cannot be set up.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let state_dir = TempDir::new().expect("temp state dir");
        let config =
            SiteConfig::new(&server.uri(), state_dir.path()).expect("valid test config");
        let state = AppState::new(config).expect("app state");

        Self {
            server,
            state,
            state_dir,
        }
    }

    /// A second [`AppState`] over the same store and state directory,
    /// simulating a page reload in the same browser context.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be set up.
    #[must_use]
    pub fn reload(&self) -> AppState {
        let config =
            SiteConfig::new(&self.server.uri(), self.state_dir.path()).expect("valid test config");
        AppState::new(config).expect("app state")
    }
}
