//! Domain types for the school website.
//!
//! Wire field names are camelCase to match the remote content store's JSON.

pub mod contact;
pub mod content;
pub mod email;
pub mod enquiry;
pub mod gallery;

pub use contact::ContactDetails;
pub use content::{ContentSection, SectionId};
pub use email::{Email, EmailError};
pub use enquiry::{Enquiry, NewEnquiry};
pub use gallery::{GalleryItem, ImageRef};
