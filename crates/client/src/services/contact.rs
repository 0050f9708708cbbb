//! Contact-details viewing and editing.

use innovation_school_core::ContactDetails;
use tracing::instrument;

use crate::backend::BackendClient;
use crate::services::ServiceError;

/// Contact record operations: the public contact page reads it, the admin
/// contact manager edits it.
pub struct ContactEditor<'a> {
    backend: &'a BackendClient,
}

impl<'a> ContactEditor<'a> {
    /// Create an editor over the shared client.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// The current contact record.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<ContactDetails, ServiceError> {
        Ok(self.backend.get_contact_details().await?)
    }

    /// Replace the contact record.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self, details))]
    pub async fn update(&self, details: &ContactDetails) -> Result<(), ServiceError> {
        self.backend.update_contact_details(details).await?;
        Ok(())
    }

    /// Flip whether the contact page shows the embedded map.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn toggle_map_display(&self) -> Result<(), ServiceError> {
        self.backend.toggle_map_display().await?;
        Ok(())
    }

    /// Replace the embedded map link.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self, map_link))]
    pub async fn update_map_embed(&self, map_link: &str) -> Result<(), ServiceError> {
        self.backend.update_map_embed(map_link).await?;
        Ok(())
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
    async fn test_update_then_get_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "email": "office@ips.example",
                "phone": "+91 98765 43210",
                "address": "12 School Road",
                "mapEmbed": "",
                "displayMap": false
            })))
            // The cached snapshot is invalidated by the update, so the
            // follow-up read goes back to the store.
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;
        let backend = backend_for(&server.uri());
        let editor = ContactEditor::new(&backend);

        let details = editor.get().await.unwrap();
        editor.update(&details).await.unwrap();
        let refetched = editor.get().await.unwrap();

        assert_eq!(refetched.email, "office@ips.example");
    }
}
