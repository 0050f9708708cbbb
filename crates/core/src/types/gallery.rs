//! Gallery types.

use serde::{Deserialize, Serialize};

/// Reference to an image held in the remote store's blob storage.
///
/// The store hands back a URL that can be fetched directly; the client never
/// touches the bytes. Upload (and its progress reporting) happens on the
/// store's own side channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a directly fetchable image URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The directly fetchable URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }
}

/// One categorized gallery image.
///
/// Only active items appear on the public gallery page; inactive items stay
/// visible in the admin manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub is_active: bool,
    pub image: ImageRef,
}
