//! Contact-details record.

use serde::{Deserialize, Serialize};

/// The school's published contact record.
///
/// Owned entirely by the remote store; the contact page renders it and the
/// admin contact manager edits it. `map_embed` is an embeddable map URL shown
/// only while `display_map` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub map_embed: String,
    pub display_map: bool,
}
