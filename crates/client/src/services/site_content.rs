//! Public-site content resolution.

use innovation_school_core::ContentSection;
use tracing::instrument;

use crate::backend::BackendClient;
use crate::content::ContentCatalog;

/// Resolves page content for the public site.
///
/// Fetches the latest remote snapshot (through the client's cache) and
/// resolves against the bundled defaults. The public pages must keep
/// rendering when the store is unreachable, so a failed fetch degrades to an
/// empty snapshot - every block falls back to its default - rather than
/// erroring.
pub struct SiteContent<'a> {
    backend: &'a BackendClient,
    catalog: &'a ContentCatalog,
}

impl<'a> SiteContent<'a> {
    /// Create a resolver over the shared client and catalog.
    #[must_use]
    pub const fn new(backend: &'a BackendClient, catalog: &'a ContentCatalog) -> Self {
        Self { backend, catalog }
    }

    async fn snapshot(&self) -> Vec<ContentSection> {
        match self.backend.get_all_content_sections().await {
            Ok(sections) => sections,
            Err(error) => {
                tracing::warn!(error = %error, "content fetch failed; rendering bundled defaults");
                Vec::new()
            }
        }
    }

    /// Resolve one content block.
    #[instrument(skip(self))]
    pub async fn section(&self, id: &str) -> ContentSection {
        let snapshot = self.snapshot().await;
        self.catalog.resolve(&snapshot, id)
    }

    /// Resolve every content block of a page prefix, in display order.
    #[instrument(skip(self))]
    pub async fn sections_by_prefix(&self, prefix: &str) -> Vec<ContentSection> {
        let snapshot = self.snapshot().await;
        self.catalog.resolve_by_prefix(&snapshot, prefix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::store::SessionStore;
    use crate::config::SiteConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(uri: &str) -> BackendClient {
        let config = SiteConfig::new(uri, "/tmp/unused-state").unwrap();
        BackendClient::new(&config, SessionStore::in_memory()).unwrap()
    }

    #[tokio::test]
    async fn test_section_uses_remote_when_published() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": "home-hero-title",
                "title": "Hero Title",
                "body": "IPS - Admissions Open",
                "isPublished": true
            }])))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let catalog = ContentCatalog::bundled();

        let section = SiteContent::new(&backend, &catalog)
            .section("home-hero-title")
            .await;

        assert_eq!(section.body, "IPS - Admissions Open");
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let catalog = ContentCatalog::bundled();

        let section = SiteContent::new(&backend, &catalog)
            .section("home-hero-title")
            .await;

        assert_eq!(section.body, "Innovation Public School");
    }

    #[tokio::test]
    async fn test_prefix_resolution_through_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let catalog = ContentCatalog::bundled();

        let sections = SiteContent::new(&backend, &catalog)
            .sections_by_prefix("admissions-")
            .await;

        assert_eq!(sections.len(), 3);
    }
}
