//! Default/remote content reconciliation.
//!
//! Two deliberately separate merge behaviors live here:
//!
//! - the **public** resolution ([`ContentCatalog::resolve`],
//!   [`ContentCatalog::resolve_by_prefix`]) hides unpublished or partial
//!   edits - a published remote section shadows its default, and a page
//!   prefix with any published remote sections shows exactly those, never a
//!   mixture;
//! - the **editor** merge ([`ContentCatalog::merge_for_editing`]) shows the
//!   union of everything editable, tagged with where each value currently
//!   comes from, so a section is editable before it has ever been saved
//!   remotely.
//!
//! Both are pure functions of the bundled defaults and the fetched remote
//! snapshot.

pub mod defaults;

use std::collections::HashMap;

use innovation_school_core::{ContentSection, SectionId};

/// Where the active value of an editor row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The remote store has a saved section for this id.
    Remote,
    /// Only the bundled default exists; not yet saved remotely.
    Default,
}

/// One row of the editor view: a section plus its provenance tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSection {
    pub section: ContentSection,
    pub provenance: Provenance,
}

/// The bundled default catalog plus the merge operations over it.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    /// Defaults in page order; order matters for prefix resolution.
    sections: Vec<ContentSection>,
}

impl ContentCatalog {
    /// The catalog shipped with this build.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            sections: defaults::bundled_sections(),
        }
    }

    /// A catalog with explicit defaults, for tests.
    #[must_use]
    pub const fn with_defaults(sections: Vec<ContentSection>) -> Self {
        Self { sections }
    }

    fn default_for(&self, id: &str) -> Option<&ContentSection> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// Resolve one section id against a remote snapshot.
    ///
    /// A published remote section wins; otherwise the bundled default;
    /// otherwise an empty placeholder, so pages never have a missing slot.
    /// Unpublished remote sections never shadow the default on this path.
    #[must_use]
    pub fn resolve(&self, remote: &[ContentSection], id: &str) -> ContentSection {
        remote
            .iter()
            .find(|s| s.id.as_str() == id && s.is_published)
            .or_else(|| self.default_for(id))
            .cloned()
            .unwrap_or_else(|| ContentSection::placeholder(SectionId::new(id)))
    }

    /// Resolve every section of a page prefix against a remote snapshot.
    ///
    /// If any published remote sections match the prefix, exactly that set is
    /// returned - remote fully shadows the defaults for the prefix, with no
    /// mixing. Otherwise all bundled defaults under the prefix are returned,
    /// in catalog order.
    #[must_use]
    pub fn resolve_by_prefix(&self, remote: &[ContentSection], prefix: &str) -> Vec<ContentSection> {
        let published: Vec<ContentSection> = remote
            .iter()
            .filter(|s| s.id.has_prefix(prefix) && s.is_published)
            .cloned()
            .collect();

        if !published.is_empty() {
            return published;
        }

        self.sections
            .iter()
            .filter(|s| s.id.has_prefix(prefix))
            .cloned()
            .collect()
    }

    /// Build the editor view: the union of default and remote ids.
    ///
    /// For every default id a remote counterpart wins and is tagged
    /// [`Provenance::Remote`]; otherwise the default appears tagged
    /// [`Provenance::Default`]. Remote-only ids are included too -
    /// regardless of publication state, since drafts are exactly what the
    /// editor is for. The combined set is sorted by title for stable display.
    #[must_use]
    pub fn merge_for_editing(&self, remote: &[ContentSection]) -> Vec<EditorSection> {
        let remote_by_id: HashMap<&str, &ContentSection> =
            remote.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut merged: Vec<EditorSection> = self
            .sections
            .iter()
            .map(|default| {
                remote_by_id.get(default.id.as_str()).map_or_else(
                    || EditorSection {
                        section: default.clone(),
                        provenance: Provenance::Default,
                    },
                    |saved| EditorSection {
                        section: (*saved).clone(),
                        provenance: Provenance::Remote,
                    },
                )
            })
            .collect();

        merged.extend(
            remote
                .iter()
                .filter(|s| self.default_for(s.id.as_str()).is_none())
                .map(|s| EditorSection {
                    section: s.clone(),
                    provenance: Provenance::Remote,
                }),
        );

        merged.sort_by(|a, b| a.section.title.cmp(&b.section.title));
        merged
    }
}
