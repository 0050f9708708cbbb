//! Cache types for remote store responses.

use innovation_school_core::{ContactDetails, ContentSection, GalleryItem};

/// Cache key for read snapshots.
///
/// Per-category gallery reads and enquiries are deliberately absent: the
/// category lists would make invalidation imprecise, and enquiries are
/// mutable review data.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    ContentSections,
    GalleryItems,
    ContactDetails,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Sections(Vec<ContentSection>),
    Gallery(Vec<GalleryItem>),
    Contact(Box<ContactDetails>),
}
