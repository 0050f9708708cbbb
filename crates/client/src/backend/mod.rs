//! HTTP client for the remote content store.
//!
//! # Architecture
//!
//! - The remote store is the source of truth for edited content - no local
//!   sync, direct API calls
//! - In-memory caching via `moka` for read snapshots (5 minute TTL), with
//!   explicit invalidation after successful mutations only
//! - The held admin session token rides along as a bearer header on every
//!   request; this client only ever *reads* the session store
//!
//! # Example
//!
//! ```rust,ignore
//! use innovation_school_client::backend::BackendClient;
//!
//! let client = BackendClient::new(&config, store.clone())?;
//! let sections = client.get_all_content_sections().await?;
//! ```

mod cache;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use innovation_school_core::{ContactDetails, ContentSection, Enquiry, GalleryItem, SectionId};

use crate::auth::store::SessionStore;
use crate::config::SiteConfig;

use cache::{CacheKey, CacheValue};

/// Cached read snapshots live this long before a forced refetch.
const CACHE_TTL: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: u64 = 64;

/// How much of an error body is kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors that can occur when talking to the remote content store.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the held session token.
    #[error("session token rejected by the backend")]
    InvalidSession,

    /// Login rejected the submitted credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The caller is authenticated but not allowed to do this.
    #[error("not authorized")]
    Unauthorized,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store rejected the request input; carries the store's own text.
    #[error("{0}")]
    Rejected(String),

    /// The store is erroring (5xx).
    #[error("backend service unavailable (HTTP {0})")]
    Unavailable(u16),

    /// Rate limited by the store.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

// =============================================================================
// BackendClient
// =============================================================================

/// Client for the remote content/gallery/enquiry/contact store.
///
/// Cheaply cloneable; all clones share the same HTTP pool and cache.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("endpoint", &self.inner.endpoint)
            .finish_non_exhaustive()
    }
}

struct BackendClientInner {
    http: reqwest::Client,
    /// Base endpoint, without a trailing slash.
    endpoint: String,
    api_key: Option<SecretString>,
    session: SessionStore,
    cache: Cache<CacheKey, CacheValue>,
}

impl BackendClient {
    /// Create a new store client.
    ///
    /// The client reads the current admin token from `session` for every
    /// request but never writes it; all session mutation goes through
    /// [`SessionStore::set_token`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &SiteConfig, session: SessionStore) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                http,
                endpoint: config.backend_url.as_str().trim_end_matches('/').to_owned(),
                api_key: config.backend_api_key.clone(),
                session,
                cache,
            }),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .http
            .request(method, format!("{}/{path}", self.inner.endpoint));

        if let Some(token) = self.inner.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(key) = &self.inner.api_key {
            request = request.header("X-School-Api-Key", key.expose_secret());
        }

        request
    }

    /// Send a request and map non-success statuses onto [`BackendError`].
    async fn send(request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(BackendError::RateLimited(retry_after));
        }

        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        match status.as_u16() {
            401 => Err(BackendError::InvalidSession),
            403 => Err(BackendError::Unauthorized),
            404 => Err(BackendError::NotFound(snippet)),
            500..=599 => {
                tracing::error!(
                    status = %status,
                    body = %snippet,
                    "backend returned server error"
                );
                Err(BackendError::Unavailable(status.as_u16()))
            }
            _ => Err(BackendError::Rejected(snippet)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let body = Self::send(self.request(reqwest::Method::GET, path)).await?;
        parse_body(&body)
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<String, BackendError> {
        Self::send(self.request(reqwest::Method::POST, path).json(payload)).await
    }

    async fn put_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<String, BackendError> {
        Self::send(self.request(reqwest::Method::PUT, path).json(payload)).await
    }

    async fn delete(&self, path: &str) -> Result<(), BackendError> {
        Self::send(self.request(reqwest::Method::DELETE, path)).await?;
        Ok(())
    }

    // =========================================================================
    // Admin Session
    // =========================================================================

    /// Exchange credentials for a session token.
    ///
    /// Must not be retried automatically; the caller decides whether to
    /// resubmit. The password is serialized into the request body and is
    /// never logged.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidCredentials` if the store rejects the
    /// credentials, or a transport/service error otherwise.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn admin_login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<String, BackendError> {
        let payload = serde_json::json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let result = self.post_json("api/admin/login", &payload).await;
        let body = match result {
            // A 401 on the login endpoint means bad credentials, not a bad
            // session token.
            Err(BackendError::InvalidSession) => return Err(BackendError::InvalidCredentials),
            other => other?,
        };

        let response: LoginResponse = parse_body(&body)?;
        Ok(response.token)
    }

    /// Revoke a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the revocation call fails; callers treat this as
    /// best-effort.
    #[instrument(skip(self, token))]
    pub async fn admin_logout(&self, token: &str) -> Result<(), BackendError> {
        self.post_json("api/admin/logout", &serde_json::json!({ "token": token }))
            .await?;
        Ok(())
    }

    /// Ask the store whether a session token is currently good.
    ///
    /// A `false` return means the token itself was examined and rejected;
    /// transport and service failures raise instead, so callers can tell an
    /// expired session apart from an unreachable authority.
    ///
    /// # Errors
    ///
    /// Returns a transport/service error when the store cannot be asked.
    #[instrument(skip(self, token))]
    pub async fn validate_admin_session(&self, token: &str) -> Result<bool, BackendError> {
        let body = self
            .post_json("api/admin/validate", &serde_json::json!({ "token": token }))
            .await?;
        parse_body(&body)
    }

    // =========================================================================
    // Content Sections
    // =========================================================================

    /// Fetch the full content section list (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_all_content_sections(&self) -> Result<Vec<ContentSection>, BackendError> {
        if let Some(CacheValue::Sections(sections)) =
            self.inner.cache.get(&CacheKey::ContentSections).await
        {
            debug!("cache hit for content sections");
            return Ok(sections);
        }

        let sections: Vec<ContentSection> = self.get_json("api/content").await?;

        self.inner
            .cache
            .insert(
                CacheKey::ContentSections,
                CacheValue::Sections(sections.clone()),
            )
            .await;

        Ok(sections)
    }

    /// Create a content section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, section), fields(id = %section.id))]
    pub async fn create_content_section(
        &self,
        section: &ContentSection,
    ) -> Result<(), BackendError> {
        self.post_json("api/content", section).await?;
        self.inner.cache.invalidate(&CacheKey::ContentSections).await;
        Ok(())
    }

    /// Update a content section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, section), fields(id = %id))]
    pub async fn update_content_section(
        &self,
        id: &SectionId,
        section: &ContentSection,
    ) -> Result<(), BackendError> {
        self.put_json(&format!("api/content/{id}"), section).await?;
        self.inner.cache.invalidate(&CacheKey::ContentSections).await;
        Ok(())
    }

    /// Delete a content section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_content_section(&self, id: &SectionId) -> Result<(), BackendError> {
        self.delete(&format!("api/content/{id}")).await?;
        self.inner.cache.invalidate(&CacheKey::ContentSections).await;
        Ok(())
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// Fetch all gallery items (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_all_gallery_items(&self) -> Result<Vec<GalleryItem>, BackendError> {
        if let Some(CacheValue::Gallery(items)) =
            self.inner.cache.get(&CacheKey::GalleryItems).await
        {
            debug!("cache hit for gallery items");
            return Ok(items);
        }

        self.fetch_gallery_items().await
    }

    /// Fetch all gallery items, bypassing the cache.
    ///
    /// Used by the read-modify-write gallery update, where the read must be
    /// scoped immediately before the write.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_all_gallery_items_fresh(&self) -> Result<Vec<GalleryItem>, BackendError> {
        self.fetch_gallery_items().await
    }

    async fn fetch_gallery_items(&self) -> Result<Vec<GalleryItem>, BackendError> {
        let items: Vec<GalleryItem> = self.get_json("api/gallery").await?;

        self.inner
            .cache
            .insert(CacheKey::GalleryItems, CacheValue::Gallery(items.clone()))
            .await;

        Ok(items)
    }

    /// Fetch gallery items of one category (uncached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn get_gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, BackendError> {
        self.get_json(&format!(
            "api/gallery?category={}",
            urlencode(category)
        ))
        .await
    }

    /// Create a gallery item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn create_gallery_item(&self, item: &GalleryItem) -> Result<(), BackendError> {
        self.post_json("api/gallery", item).await?;
        self.inner.cache.invalidate(&CacheKey::GalleryItems).await;
        Ok(())
    }

    /// Update a gallery item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, item), fields(id = %id))]
    pub async fn update_gallery_item(
        &self,
        id: &str,
        item: &GalleryItem,
    ) -> Result<(), BackendError> {
        self.put_json(&format!("api/gallery/{id}"), item).await?;
        self.inner.cache.invalidate(&CacheKey::GalleryItems).await;
        Ok(())
    }

    /// Delete a gallery item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_gallery_item(&self, id: &str) -> Result<(), BackendError> {
        self.delete(&format!("api/gallery/{id}")).await?;
        self.inner.cache.invalidate(&CacheKey::GalleryItems).await;
        Ok(())
    }

    // =========================================================================
    // Enquiries (not cached - mutable review data)
    // =========================================================================

    /// Fetch all enquiries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_all_enquiries(&self) -> Result<Vec<Enquiry>, BackendError> {
        self.get_json("api/enquiries").await
    }

    /// Submit a visitor enquiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, enquiry), fields(id = %enquiry.id))]
    pub async fn submit_enquiry(&self, enquiry: &Enquiry) -> Result<(), BackendError> {
        self.post_json("api/enquiries", enquiry).await?;
        Ok(())
    }

    /// Mark an enquiry as read. Idempotent on the store side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn mark_enquiry_as_read(&self, id: &str) -> Result<(), BackendError> {
        self.post_json(&format!("api/enquiries/{id}/read"), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    /// Delete an enquiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_enquiry(&self, id: &str) -> Result<(), BackendError> {
        self.delete(&format!("api/enquiries/{id}")).await
    }

    // =========================================================================
    // Contact Details
    // =========================================================================

    /// Fetch the contact record (cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_contact_details(&self) -> Result<ContactDetails, BackendError> {
        if let Some(CacheValue::Contact(details)) =
            self.inner.cache.get(&CacheKey::ContactDetails).await
        {
            debug!("cache hit for contact details");
            return Ok(*details);
        }

        let details: ContactDetails = self.get_json("api/contact").await?;

        self.inner
            .cache
            .insert(
                CacheKey::ContactDetails,
                CacheValue::Contact(Box::new(details.clone())),
            )
            .await;

        Ok(details)
    }

    /// Replace the contact record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, details))]
    pub async fn update_contact_details(
        &self,
        details: &ContactDetails,
    ) -> Result<(), BackendError> {
        self.put_json("api/contact", details).await?;
        self.inner.cache.invalidate(&CacheKey::ContactDetails).await;
        Ok(())
    }

    /// Flip whether the contact page embeds the map.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn toggle_map_display(&self) -> Result<(), BackendError> {
        self.post_json("api/contact/map/toggle", &serde_json::json!({}))
            .await?;
        self.inner.cache.invalidate(&CacheKey::ContactDetails).await;
        Ok(())
    }

    /// Replace the embedded map link.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, map_link))]
    pub async fn update_map_embed(&self, map_link: &str) -> Result<(), BackendError> {
        self.put_json(
            "api/contact/map",
            &serde_json::json!({ "mapEmbed": map_link }),
        )
        .await?;
        self.inner.cache.invalidate(&CacheKey::ContactDetails).await;
        Ok(())
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate every cached snapshot.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(ERROR_BODY_LIMIT).collect::<String>(),
            "failed to parse backend response"
        );
        BackendError::Parse(e)
    })
}

/// Percent-encode a query value. Category names only contain letters and
/// spaces, so the space is the one character that matters.
fn urlencode(value: &str) -> String {
    value.replace(' ', "%20")
}
