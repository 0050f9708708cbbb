//! Public and admin services over the remote store.
//!
//! Each service borrows the shared [`BackendClient`] for its lifetime, the
//! same way a request handler would. Mutations report success only after the
//! remote call resolves (no optimistic paths), and every failure that leaves
//! a service has already been converted into a sanitized [`ServiceError`].

pub mod contact;
pub mod content_editor;
pub mod enquiries;
pub mod gallery;
pub mod site_content;

pub use contact::ContactEditor;
pub use content_editor::ContentEditor;
pub use enquiries::EnquiryInbox;
pub use gallery::{GalleryManager, GalleryItemUpdate, NewGalleryItem};
pub use site_content::SiteContent;

use thiserror::Error;

use crate::backend::BackendError;
use crate::error::user_message_for;

/// A failed service operation, carrying only a user-safe message.
///
/// The raw backend error stays attached as the source for logging, but
/// `Display` - the only thing presentation consumes - is the classified
/// message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: BackendError,
}

impl ServiceError {
    /// The sanitized, display-ready message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<BackendError> for ServiceError {
    fn from(source: BackendError) -> Self {
        Self {
            message: user_message_for(&source),
            source,
        }
    }
}
