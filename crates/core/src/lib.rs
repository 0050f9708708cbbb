//! Innovation School Core - Shared domain types.
//!
//! This crate provides the types shared between the site client library and
//! its consumers (the rendered pages and the admin panel):
//!
//! - [`types::ContentSection`] - one editable block of page text
//! - [`types::GalleryItem`] - one categorized gallery image
//! - [`types::Enquiry`] - one submitted enquiry-form entry
//! - [`types::ContactDetails`] - the school's contact record
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no caching.
//! This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
