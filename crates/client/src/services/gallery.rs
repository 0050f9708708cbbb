//! Gallery management and browsing.

use innovation_school_core::{GalleryItem, ImageRef};
use tracing::instrument;
use uuid::Uuid;

use crate::backend::{BackendClient, BackendError};
use crate::services::ServiceError;

/// The fixed gallery categories offered by the admin manager.
pub const CATEGORIES: [&str; 4] = ["Events", "Classrooms", "Sports", "Cultural Programs"];

/// Input for a new gallery item; the image must already be uploaded.
#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub title: String,
    pub category: String,
    pub image: ImageRef,
}

/// Metadata edits for an existing gallery item.
///
/// `image` is optional: when absent, the item keeps its current image
/// reference, which is the common case of renaming or recategorizing.
#[derive(Debug, Clone)]
pub struct GalleryItemUpdate {
    pub title: String,
    pub category: String,
    pub is_active: bool,
    pub image: Option<ImageRef>,
}

/// Gallery operations for both the public page and the admin manager.
pub struct GalleryManager<'a> {
    backend: &'a BackendClient,
}

impl<'a> GalleryManager<'a> {
    /// Create a manager over the shared client.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Every item, active or not (admin view).
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<GalleryItem>, ServiceError> {
        Ok(self.backend.get_all_gallery_items().await?)
    }

    /// Active items for the public gallery, optionally limited to one
    /// category (`None` is the "All" tab).
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self))]
    pub async fn active(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, ServiceError> {
        let items = match category {
            Some(category) => self.backend.get_gallery_items_by_category(category).await?,
            None => self.backend.get_all_gallery_items().await?,
        };
        Ok(items.into_iter().filter(|item| item.is_active).collect())
    }

    /// Add a new item, active by default, with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self, item), fields(title = %item.title))]
    pub async fn create(&self, item: NewGalleryItem) -> Result<GalleryItem, ServiceError> {
        let item = GalleryItem {
            id: Uuid::new_v4().to_string(),
            title: item.title,
            category: item.category,
            is_active: true,
            image: item.image,
        };
        self.backend.create_gallery_item(&item).await?;
        Ok(item)
    }

    /// Apply metadata edits to an existing item.
    ///
    /// When no new image is supplied, the current item is re-fetched
    /// immediately before the write so its image reference carries over.
    /// That read-modify-write keeps the staleness window small; true
    /// atomicity belongs to the remote store's own concurrency control.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the item does not exist or the remote
    /// call fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update(&self, id: &str, update: GalleryItemUpdate) -> Result<(), ServiceError> {
        let image = match update.image {
            Some(image) => image,
            None => self.current_image(id).await?,
        };

        let item = GalleryItem {
            id: id.to_owned(),
            title: update.title,
            category: update.category,
            is_active: update.is_active,
            image,
        };
        self.backend.update_gallery_item(id, &item).await?;
        Ok(())
    }

    /// Remove an item.
    ///
    /// Destructive - callers confirm with the admin before invoking.
    ///
    /// # Errors
    ///
    /// Returns a sanitized error if the remote call fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.backend.delete_gallery_item(id).await?;
        Ok(())
    }

    async fn current_image(&self, id: &str) -> Result<ImageRef, ServiceError> {
        let items = self.backend.get_all_gallery_items_fresh().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .map(|item| item.image)
            .ok_or_else(|| ServiceError::from(BackendError::NotFound(format!("gallery item {id}"))))
    }
}
