//! Editable page content types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one editable content block, unique across the whole site.
///
/// Ids are path-like: a page prefix followed by a section name, for example
/// `home-hero-title` or `about-vision`. The prefix groups the sections that
/// make up one page, which is what [`ContentSection`] lookups by prefix rely
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id belongs to the given page prefix (e.g. `about-`).
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One editable block of page text.
///
/// `body` may contain embedded line breaks which the pages render verbatim.
/// Only sections with `is_published` set are eligible for the public site;
/// unpublished sections exist solely in the editor until published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: SectionId,
    pub title: String,
    pub body: String,
    pub is_published: bool,
}

impl ContentSection {
    /// An empty placeholder for an id that exists neither remotely nor in the
    /// bundled defaults. Published so the public page renders it (as nothing)
    /// rather than hiding the slot.
    #[must_use]
    pub fn placeholder(id: SectionId) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            is_published: true,
        }
    }
}
