//! Admin content editing.

use innovation_school_core::{ContentSection, SectionId};
use tracing::instrument;

use crate::backend::BackendClient;
use crate::content::{ContentCatalog, EditorSection};
use crate::services::ServiceError;

/// Admin operations on content sections.
///
/// The editor view is the union merge - every editable block appears, with
/// its provenance, whether or not it has ever been saved remotely.
pub struct ContentEditor<'a> {
    backend: &'a BackendClient,
    catalog: &'a ContentCatalog,
}

impl<'a> ContentEditor<'a> {
    /// Create an editor over the shared client and catalog.
    #[must_use]
    pub const fn new(backend: &'a BackendClient, catalog: &'a ContentCatalog) -> Self {
        Self { backend, catalog }
    }

    /// The full editable section list with provenance tags, sorted by title.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote snapshot cannot be fetched -
    /// unlike the public path, the editor must not silently show defaults as
    /// if they were the saved state.
    #[instrument(skip(self))]
    pub async fn list_for_editing(&self) -> Result<Vec<EditorSection>, ServiceError> {
        let remote = self.backend.get_all_content_sections().await?;
        Ok(self.catalog.merge_for_editing(&remote))
    }

    /// Create a new section remotely.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self, section), fields(id = %section.id))]
    pub async fn create(&self, section: &ContentSection) -> Result<(), ServiceError> {
        self.backend.create_content_section(section).await?;
        Ok(())
    }

    /// Save edits to a section (also how a default first becomes remote).
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self, section), fields(id = %id))]
    pub async fn update(&self, id: &SectionId, section: &ContentSection) -> Result<(), ServiceError> {
        self.backend.update_content_section(id, section).await?;
        Ok(())
    }

    /// Delete a remotely saved section; its bundled default resurfaces.
    ///
    /// Destructive - callers confirm with the admin before invoking.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &SectionId) -> Result<(), ServiceError> {
        self.backend.delete_content_section(id).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::store::SessionStore;
    use crate::config::SiteConfig;
    use crate::content::Provenance;
    use crate::error::MSG_BACKEND_UNAVAILABLE;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(uri: &str) -> BackendClient {
        let config = SiteConfig::new(uri, "/tmp/unused-state").unwrap();
        BackendClient::new(&config, SessionStore::in_memory()).unwrap()
    }

    #[tokio::test]
    async fn test_editor_list_includes_unsaved_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": "home-hero-title",
                "title": "Hero Title",
                "body": "Edited remotely",
                "isPublished": false
            }])))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let catalog = ContentCatalog::bundled();

        let rows = ContentEditor::new(&backend, &catalog)
            .list_for_editing()
            .await
            .unwrap();

        // All 17 defaults appear; exactly one is backed by a remote save.
        assert_eq!(rows.len(), 17);
        let remote_rows = rows
            .iter()
            .filter(|r| r.provenance == Provenance::Remote)
            .count();
        assert_eq!(remote_rows, 1);
    }

    #[tokio::test]
    async fn test_editor_list_surfaces_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let catalog = ContentCatalog::bundled();

        let error = ContentEditor::new(&backend, &catalog)
            .list_for_editing()
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), MSG_BACKEND_UNAVAILABLE);
    }
}
